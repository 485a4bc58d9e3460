use super::not_blank;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

pub const DEFAULT_PAGE: i32 = 1;
pub const DEFAULT_PAGE_SIZE: i32 = 10;
pub const MAX_PAGE_SIZE: i32 = 100;

/// Raw listing parameters as they arrive on the query string. Every field is
/// optional and loosely typed; [`FindAllAnnouncements`] applies the defaults.
#[derive(Debug, Deserialize, Validate, IntoParams, Default, Clone)]
#[into_params(parameter_in = Query)]
pub struct AnnouncementListQuery {
    /// 1-based page number, defaults to 1.
    pub page: Option<String>,
    /// Page size, defaults to 10, capped at 100.
    pub size: Option<String>,
    /// Substring matched against title or content.
    pub q: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindAllAnnouncements {
    pub page: i32,
    pub size: i32,
    pub search: Option<String>,
}

impl FindAllAnnouncements {
    pub fn new(page: i32, size: i32, search: Option<&str>) -> Self {
        let page = if page >= 1 { page } else { DEFAULT_PAGE };
        let size = if size >= 1 {
            size.min(MAX_PAGE_SIZE)
        } else {
            DEFAULT_PAGE_SIZE
        };
        let search = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Self { page, size, search }
    }

    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.size)
    }

    /// `ILIKE` pattern for the search term with `%`, `_` and `\` escaped.
    pub fn like_pattern(&self) -> Option<String> {
        self.search.as_deref().map(|search| {
            let mut escaped = String::with_capacity(search.len() + 2);
            escaped.push('%');
            for ch in search.chars() {
                if matches!(ch, '%' | '_' | '\\') {
                    escaped.push('\\');
                }
                escaped.push(ch);
            }
            escaped.push('%');
            escaped
        })
    }
}

impl Default for FindAllAnnouncements {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PAGE_SIZE, None)
    }
}

impl From<AnnouncementListQuery> for FindAllAnnouncements {
    fn from(value: AnnouncementListQuery) -> Self {
        let page = parse_positive(value.page.as_deref()).unwrap_or(DEFAULT_PAGE);
        let size = parse_positive(value.size.as_deref()).unwrap_or(DEFAULT_PAGE_SIZE);
        Self::new(page, size, value.q.as_deref())
    }
}

fn parse_positive(raw: Option<&str>) -> Option<i32> {
    raw.and_then(|v| v.trim().parse::<i32>().ok())
        .filter(|v| *v >= 1)
}

#[derive(Debug, Deserialize, Validate, IntoParams, Clone, Copy)]
#[into_params(parameter_in = Path)]
pub struct AnnouncementIdPath {
    #[validate(range(min = 1, message = "id must be a positive integer"))]
    pub id: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema, Clone)]
pub struct CreateAnnouncementRequest {
    #[validate(
        length(min = 1, max = 200, message = "title must be 1 to 200 characters"),
        custom(function = "not_blank", message = "title is required")
    )]
    pub title: String,

    #[validate(custom(function = "not_blank", message = "content is required"))]
    pub content: String,

    #[serde(default = "default_visible")]
    pub is_visible: bool,
}

fn default_visible() -> bool {
    true
}

#[derive(Debug, Deserialize, Validate, ToSchema, Clone)]
pub struct UpdateAnnouncementRequest {
    #[validate(
        length(min = 1, max = 200, message = "title must be 1 to 200 characters"),
        custom(function = "not_blank", message = "title is required")
    )]
    pub title: String,

    #[validate(custom(function = "not_blank", message = "content is required"))]
    pub content: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema, Clone, Copy)]
pub struct UpdateVisibilityRequest {
    pub is_visible: bool,
}
