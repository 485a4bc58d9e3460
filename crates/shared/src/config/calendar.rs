/// The academic term currently in session. Grades for this term are not final.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcademicCalendar {
    pub current_year: i32,
    pub current_term: String,
}

impl AcademicCalendar {
    pub fn new(current_year: i32, current_term: impl Into<String>) -> Self {
        Self {
            current_year,
            current_term: current_term.into(),
        }
    }

    pub fn is_current(&self, year: i32, term: &str) -> bool {
        self.current_year == year && self.current_term.eq_ignore_ascii_case(term.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_match_ignores_case() {
        let calendar = AcademicCalendar::new(2025, "SPRING");
        assert!(calendar.is_current(2025, "spring"));
        assert!(!calendar.is_current(2024, "SPRING"));
        assert!(!calendar.is_current(2025, "FALL"));
    }
}
