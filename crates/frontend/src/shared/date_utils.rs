/// Utilities for date and time formatting
///
/// Mirrors the browser's `toLocaleString()` output for the two supported
/// languages, with commas replaced by spaces.
use chrono::{DateTime, Local, NaiveDateTime, Utc};

use crate::shared::i18n::Language;

/// Format a timestamp the way the terminal prints review dates
/// Example (pt): 2024-03-15T14:02:26 -> "15/03/2024 14:02:26"
/// Example (en): 2024-03-15T14:02:26 -> "3/15/2024  2:02:26 PM"
pub fn format_locale_datetime(datetime: &NaiveDateTime, lang: Language) -> String {
    match lang {
        Language::Pt => datetime.format("%d/%m/%Y %H:%M:%S").to_string(),
        Language::En => datetime.format("%-m/%-d/%Y  %-I:%M:%S %p").to_string(),
    }
}

/// Convert a UTC timestamp to the browser's local wall-clock time
pub fn to_local(datetime: &DateTime<Utc>) -> NaiveDateTime {
    datetime.with_timezone(&Local).naive_local()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(14, 2, 26)
            .unwrap()
    }

    #[test]
    fn test_format_pt() {
        assert_eq!(
            format_locale_datetime(&sample(), Language::Pt),
            "15/03/2024 14:02:26"
        );
    }

    #[test]
    fn test_format_en() {
        assert_eq!(
            format_locale_datetime(&sample(), Language::En),
            "3/15/2024  2:02:26 PM"
        );
    }

    #[test]
    fn test_midnight_en() {
        let midnight = NaiveDate::from_ymd_opt(2024, 12, 1)
            .unwrap()
            .and_hms_opt(0, 5, 0)
            .unwrap();
        assert_eq!(
            format_locale_datetime(&midnight, Language::En),
            "12/1/2024  12:05:00 AM"
        );
    }
}
