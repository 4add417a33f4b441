use chrono::{Datelike, NaiveDateTime, NaiveTime, Timelike, Weekday};

/// True when a reminder should fire: a weekday whose wall-clock HH:MM
/// matches the configured time. Hours and minutes are compared as
/// components, so seconds never matter. `now` is injected by the caller.
pub fn reminder_due(time: NaiveTime, now: NaiveDateTime) -> bool {
    match now.weekday() {
        Weekday::Sat | Weekday::Sun => false,
        _ => now.hour() == time.hour() && now.minute() == time.minute(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    fn six_pm() -> NaiveTime {
        NaiveTime::from_hms_opt(18, 0, 0).unwrap()
    }

    #[test]
    fn test_due_on_a_weekday_at_the_matching_minute() {
        // 2026-08-21 is a Friday
        assert!(reminder_due(six_pm(), at(2026, 8, 21, 18, 0, 0)));
        assert!(reminder_due(six_pm(), at(2026, 8, 21, 18, 0, 42)));
    }

    #[test]
    fn test_never_due_on_weekends() {
        assert!(!reminder_due(six_pm(), at(2026, 8, 22, 18, 0, 0)));
        assert!(!reminder_due(six_pm(), at(2026, 8, 23, 18, 0, 0)));
        // next Monday fires again
        assert!(reminder_due(six_pm(), at(2026, 8, 24, 18, 0, 0)));
    }

    #[test]
    fn test_hour_and_minute_must_both_match() {
        assert!(!reminder_due(six_pm(), at(2026, 8, 21, 18, 1, 0)));
        assert!(!reminder_due(six_pm(), at(2026, 8, 21, 17, 0, 0)));
    }

    #[test]
    fn test_single_digit_components_compare_numerically() {
        let time = NaiveTime::parse_from_str("09:05", "%H:%M").unwrap();
        assert!(reminder_due(time, at(2026, 8, 19, 9, 5, 30)));
    }
}
