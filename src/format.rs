use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// 12-hour clock, e.g. "9:05:07 AM"
pub fn format_time<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    at.format("%-I:%M:%S %p").to_string()
}

/// Long date, e.g. "Friday, January 5, 2024"
pub fn format_long_date<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    at.format("%A, %B %-d, %Y").to_string()
}

/// Numeric date, e.g. "1/5/2024"
pub fn format_short_date<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    at.format("%-m/%-d/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format_time() {
        let morning = Utc.with_ymd_and_hms(2024, 1, 5, 9, 5, 7).unwrap();
        assert_eq!(format_time(&morning), "9:05:07 AM");

        let evening = Utc.with_ymd_and_hms(2024, 1, 5, 21, 30, 0).unwrap();
        assert_eq!(format_time(&evening), "9:30:00 PM");

        let midnight = Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap();
        assert_eq!(format_time(&midnight), "12:00:00 AM");
    }

    #[test]
    fn test_format_dates() {
        let at = Utc.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap();
        assert_eq!(format_long_date(&at), "Friday, January 5, 2024");
        assert_eq!(format_short_date(&at), "1/5/2024");
    }
}
