//! # Calendar Rules
//!
//! Time-dependent business rules evaluated against a *given* instant.
//! Reading the current time is the caller's job (see the storefront's
//! `Clock` port), which keeps these rules deterministic.
//!
//! ```text
//!   Clock::now() ──► NaiveDateTime ──┬──► is_within_hours(time, hours)
//!                                    └──► holiday_discount(date, holiday)
//! ```

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use crate::types::{DiscountRate, Holiday, OpeningHours};

/// Returns true if `time` falls inside `[open, close)`.
///
/// ## Example
/// ```rust
/// use chrono::NaiveTime;
/// use shopkit_core::calendar::is_within_hours;
/// use shopkit_core::types::OpeningHours;
///
/// let hours = OpeningHours::default(); // 08:00 - 20:00
/// assert!(is_within_hours(NaiveTime::from_hms_opt(8, 0, 0).unwrap(), hours));
/// assert!(!is_within_hours(NaiveTime::from_hms_opt(20, 1, 0).unwrap(), hours));
/// ```
pub fn is_within_hours(time: NaiveTime, hours: OpeningHours) -> bool {
    let hour = time.hour();
    hour >= hours.open && hour < hours.close
}

/// Returns the holiday's discount on its day and zero on every other day.
pub fn holiday_discount(date: NaiveDate, holiday: &Holiday) -> DiscountRate {
    if date.month() == holiday.month && date.day() == holiday.day {
        holiday.discount
    } else {
        DiscountRate::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_outside_opening_hours() {
        let hours = OpeningHours::default();
        assert!(!is_within_hours(at(7, 59), hours));
        assert!(!is_within_hours(at(20, 1), hours));
        assert!(!is_within_hours(at(20, 0), hours));
    }

    #[test]
    fn test_within_opening_hours() {
        let hours = OpeningHours::default();
        assert!(is_within_hours(at(8, 0), hours));
        assert!(is_within_hours(at(19, 59), hours));
    }

    #[test]
    fn test_custom_hours() {
        let hours = OpeningHours { open: 0, close: 24 };
        assert!(is_within_hours(at(0, 0), hours));
        assert!(is_within_hours(at(23, 59), hours));
    }

    #[test]
    fn test_holiday_discount() {
        let christmas = Holiday::default();
        assert_eq!(holiday_discount(day(2024, 12, 25), &christmas).bps(), 2000);
        assert_eq!(holiday_discount(day(2024, 12, 24), &christmas), DiscountRate::zero());
        assert_eq!(holiday_discount(day(2025, 1, 25), &christmas), DiscountRate::zero());
    }
}
