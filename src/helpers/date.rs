//! Date helper functions

use chrono::NaiveDate;

/// Format a date using a Moment.js-compatible format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "YYYY-MM-DD") // -> "2024-01-15"
/// ```
pub fn format_date(date: &NaiveDate, format: &str) -> String {
    let chrono_format = moment_to_chrono_format(format);
    date.format(&chrono_format).to_string()
}

/// Convert the Moment.js date tokens to chrono ones.
///
/// Longest tokens go first so that `MMMM` is not consumed as two `MM`s.
fn moment_to_chrono_format(format: &str) -> String {
    format
        .replace("YYYY", "%Y")
        .replace("MMMM", "%B")
        .replace("MMM", "%b")
        .replace("MM", "%m")
        .replace("dddd", "%A")
        .replace("ddd", "%a")
        .replace("DD", "%d")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_format_iso() {
        assert_eq!(format_date(&date(), "YYYY-MM-DD"), "2024-06-01");
    }

    #[test]
    fn test_format_long_month() {
        assert_eq!(format_date(&date(), "MMMM DD, YYYY"), "June 01, 2024");
    }

    #[test]
    fn test_format_weekday() {
        assert_eq!(format_date(&date(), "ddd DD MMM"), "Sat 01 Jun");
    }
}
