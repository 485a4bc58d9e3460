use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ToSchema)]
pub struct Pagination {
    pub page: i32,
    pub size: i32,
    #[serde(rename = "totalCount")]
    pub total_count: i64,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
}

impl Pagination {
    /// `size` must be at least 1; `total_pages = ceil(total_count / size)`.
    pub fn new(page: i32, size: i32, total_count: i64) -> Self {
        let per_page = i64::from(size.max(1));
        let total_pages = (total_count.max(0) + per_page - 1) / per_page;

        Self {
            page,
            size,
            total_count,
            total_pages,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, 10, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(Pagination::new(1, 10, 23).total_pages, 3);
        assert_eq!(Pagination::new(1, 10, 20).total_pages, 2);
        assert_eq!(Pagination::new(1, 10, 1).total_pages, 1);
    }

    #[test]
    fn empty_collection_has_no_pages() {
        assert_eq!(Pagination::new(1, 10, 0).total_pages, 0);
    }

    #[test]
    fn serializes_with_camel_case_totals() {
        let json = serde_json::to_value(Pagination::new(2, 5, 11)).unwrap();
        assert_eq!(json["totalCount"], 11);
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["page"], 2);
        assert_eq!(json["size"], 5);
    }
}
