//! Date parsing for receipt dates as they come back from the model.

use chrono::NaiveDate;

/// Formats tried in order. ISO first since the prompt asks for it.
const RECEIPT_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d.%m.%Y",
    "%B %d, %Y",
    "%b %d, %Y",
];

/// Parse a receipt date, accepting ISO 8601 plus the handful of layouts
/// printed receipts commonly use. Returns `None` for anything else.
pub fn parse_receipt_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    RECEIPT_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso() {
        assert_eq!(
            parse_receipt_date("2025-03-01"),
            NaiveDate::from_ymd_opt(2025, 3, 1)
        );
    }

    #[test]
    fn test_parse_us_and_long_forms() {
        let want = NaiveDate::from_ymd_opt(2024, 11, 7);
        assert_eq!(parse_receipt_date("11/07/2024"), want);
        assert_eq!(parse_receipt_date("07.11.2024"), want);
        assert_eq!(parse_receipt_date("November 7, 2024"), want);
        assert_eq!(parse_receipt_date(" Nov 7, 2024 "), want);
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse_receipt_date(""), None);
        assert_eq!(parse_receipt_date("yesterday"), None);
        assert_eq!(parse_receipt_date("2025-02-30"), None);
    }
}
