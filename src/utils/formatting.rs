//! Formatting utilities for display

/// Format the number of filtered records for the list header
pub fn format_match_count(count: usize) -> String {
    match count {
        0 => "No matches".to_string(),
        1 => "1 type".to_string(),
        n => format!("{} types", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_match_count_zero() {
        assert_eq!(format_match_count(0), "No matches");
    }

    #[test]
    fn test_format_match_count_singular() {
        assert_eq!(format_match_count(1), "1 type");
    }

    #[test]
    fn test_format_match_count_plural() {
        assert_eq!(format_match_count(8), "8 types");
    }
}
