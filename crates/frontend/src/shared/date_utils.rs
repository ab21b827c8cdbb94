/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application

/// Format ISO datetime string to "YYYY-MM-DD HH:MM"
/// Example: "2024-03-15T14:02:26.123Z" -> "2024-03-15 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        let hh_mm: String = time_part.chars().take(5).collect();
        if hh_mm.len() == 5 {
            return format!("{} {}", date_part, hh_mm);
        }
    }
    datetime_str.to_string()
}

/// Date part of an ISO string, or a dash for missing values
/// Example: Some("2024-03-15T14:02:26Z") -> "2024-03-15"
pub fn format_date(date_str: Option<&str>) -> String {
    match date_str.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => s.split('T').next().unwrap_or(s).to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "2024-03-15 14:02");
        assert_eq!(format_datetime("2024-12-31T23:59:59Z"), "2024-12-31 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some("2024-03-15")), "2024-03-15");
        assert_eq!(format_date(Some("2024-03-15T14:02:26.123Z")), "2024-03-15");
        assert_eq!(format_date(Some("")), "-");
        assert_eq!(format_date(None), "-");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
    }
}
