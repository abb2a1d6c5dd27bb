//! Conversion between 12-hour clock input and the 24-hour `HH:MM` strings stored
//! in task reminders.

use chrono::{NaiveTime, Timelike};

use crate::fields::Meridiem;

/// Convert a 12-hour wall-clock time to `HH:MM`.
///
/// 12 AM is midnight (`00`), 12 PM stays `12`, other PM hours gain twelve.
/// Returns `None` for an hour outside 1-12 or a minute outside 0-59.
pub fn to_24(hour: u32, minute: u32, meridiem: Meridiem) -> Option<String> {
    if !(1..=12).contains(&hour) || minute > 59 {
        return None;
    }
    let hour = match (meridiem, hour) {
        (Meridiem::Am, 12) => 0,
        (Meridiem::Am, h) => h,
        (Meridiem::Pm, 12) => 12,
        (Meridiem::Pm, h) => h + 12,
    };
    Some(format!("{hour:02}:{minute:02}"))
}

/// Convert `HH:MM` to `H:MM AM|PM`. Returns `None` for anything that is not a valid 24-hour time.
pub fn to_12(time24: &str) -> Option<String> {
    let time = parse_24(time24)?;
    let (is_pm, hour12) = time.hour12();
    let meridiem = if is_pm { Meridiem::Pm } else { Meridiem::Am };
    Some(format!("{}:{:02} {}", hour12, time.minute(), meridiem))
}

/// Parse a stored `HH:MM` reminder. Requires exactly two-digit fields.
pub fn parse_24(time24: &str) -> Option<NaiveTime> {
    let (h, m) = time24.split_once(':')?;
    if h.len() != 2 || m.len() != 2 {
        return None;
    }
    if !h.bytes().chain(m.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveTime::from_hms_opt(h.parse().ok()?, m.parse().ok()?, 0)
}

/// Whether `now`, at minute precision, is strictly later than the reminder.
///
/// An empty or malformed reminder is never overdue.
pub fn is_overdue(reminder: &str, now: NaiveTime) -> bool {
    let Some(reminder) = parse_24(reminder) else {
        return false;
    };
    let now = NaiveTime::from_hms_opt(now.hour(), now.minute(), 0).unwrap_or(now);
    now > reminder
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_24_wall_clock_rules() {
        assert_eq!(to_24(12, 30, Meridiem::Am).as_deref(), Some("00:30"));
        assert_eq!(to_24(12, 0, Meridiem::Pm).as_deref(), Some("12:00"));
        assert_eq!(to_24(1, 5, Meridiem::Am).as_deref(), Some("01:05"));
        assert_eq!(to_24(11, 59, Meridiem::Pm).as_deref(), Some("23:59"));
    }

    #[test]
    fn test_to_24_rejects_out_of_range() {
        assert_eq!(to_24(0, 0, Meridiem::Am), None);
        assert_eq!(to_24(13, 0, Meridiem::Pm), None);
        assert_eq!(to_24(5, 60, Meridiem::Am), None);
    }

    #[test]
    fn test_to_12() {
        assert_eq!(to_12("00:30").as_deref(), Some("12:30 AM"));
        assert_eq!(to_12("12:00").as_deref(), Some("12:00 PM"));
        assert_eq!(to_12("09:07").as_deref(), Some("9:07 AM"));
        assert_eq!(to_12("23:59").as_deref(), Some("11:59 PM"));
        assert_eq!(to_12(""), None);
        assert_eq!(to_12("7:30"), None);
        assert_eq!(to_12("24:00"), None);
    }

    #[test]
    fn test_round_trip_every_wall_clock_minute() {
        for meridiem in [Meridiem::Am, Meridiem::Pm] {
            for hour in 1..=12 {
                for minute in 0..=59 {
                    let stored = to_24(hour, minute, meridiem).unwrap();
                    let shown = to_12(&stored).unwrap();
                    assert_eq!(shown, format!("{hour}:{minute:02} {meridiem}"));
                }
            }
        }
    }

    #[test]
    fn test_is_overdue_is_strict_at_minute_precision() {
        let t = |h, m, s| NaiveTime::from_hms_opt(h, m, s).unwrap();
        assert!(!is_overdue("14:00", t(14, 0, 45)));
        assert!(is_overdue("14:00", t(14, 1, 0)));
        assert!(!is_overdue("14:00", t(13, 59, 59)));
        assert!(!is_overdue("", t(23, 59, 0)));
        assert!(!is_overdue("garbage", t(23, 59, 0)));
    }
}
