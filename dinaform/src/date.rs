//! Date picking for `date` fields.
//!
//! Pickers report a 0-based month index; the field shows `day/month/year`
//! without zero padding.

use chrono::{Datelike, Local, NaiveDate};

/// Display text for a picked date, or `None` if it isn't a calendar date.
///
/// ```
/// assert_eq!(dinaform::pick_date(2025, 0, 5).as_deref(), Some("5/1/2025"));
/// ```
pub fn pick_date(year: i32, month_index: u32, day: u32) -> Option<String> {
    let date = NaiveDate::from_ymd_opt(year, month_index.checked_add(1)?, day)?;
    Some(display_date(date))
}

/// Format a date as `D/M/YYYY` with no zero padding.
pub fn display_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.day(), date.month(), date.year())
}

/// The date a picker opens on: today, in local time.
pub fn picker_initial_date() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_zero_padding() {
        assert_eq!(pick_date(2025, 0, 5).as_deref(), Some("5/1/2025"));
        assert_eq!(pick_date(2024, 11, 31).as_deref(), Some("31/12/2024"));
    }

    #[test]
    fn invalid_dates() {
        assert_eq!(pick_date(2025, 1, 30), None);
        assert_eq!(pick_date(2025, 12, 1), None);
        assert_eq!(pick_date(2025, u32::MAX, 1), None);
    }

    #[test]
    fn leap_day() {
        assert_eq!(pick_date(2024, 1, 29).as_deref(), Some("29/2/2024"));
    }

    #[test]
    fn picker_opens_on_today() {
        let before = Local::now().date_naive();
        let initial = picker_initial_date();
        let after = Local::now().date_naive();
        // tolerate a midnight rollover between the calls
        assert!(initial == before || initial == after);
    }

    #[test]
    fn short_years_are_not_padded() {
        let date = NaiveDate::from_ymd_opt(987, 3, 4).unwrap();
        assert_eq!(display_date(date), "4/3/987");
    }
}
