use chrono::{DateTime, Days, FixedOffset, LocalResult, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;

use super::validation::ValidationError;

/// All wall-clock comparisons happen in this timezone
pub const REFERENCE_TZ: Tz = chrono_tz::Asia::Kolkata;

/// Current time in the reference timezone
pub fn reference_now() -> DateTime<Tz> {
    chrono::Utc::now().with_timezone(&REFERENCE_TZ)
}

/// Calendar date of an instant in the reference timezone, as "YYYY-MM-DD"
pub fn reference_date(now: DateTime<Tz>) -> String {
    now.date_naive().format("%Y-%m-%d").to_string()
}

/// The next instant the given wall-clock time occurs in the reference
/// timezone: today if still ahead of `now`, otherwise tomorrow. The result
/// is always strictly in the future.
pub fn next_occurrence(now: DateTime<Tz>, time: NaiveTime) -> Result<DateTime<Tz>, ValidationError> {
    let candidate = resolve_local(now.date_naive(), time)?;
    if candidate > now {
        Ok(candidate)
    } else {
        resolve_local(now.date_naive() + Days::new(1), time)
    }
}

/// Format a stored instant for display in the reference timezone
pub fn format_reference(instant: DateTime<FixedOffset>) -> String {
    instant
        .with_timezone(&REFERENCE_TZ)
        .format("%Y-%m-%d %H:%M %Z")
        .to_string()
}

/// Resolve a local wall-clock time on a date. Ambiguous local times take
/// the earliest instant; a time skipped by an offset transition is invalid.
fn resolve_local(date: NaiveDate, time: NaiveTime) -> Result<DateTime<Tz>, ValidationError> {
    match REFERENCE_TZ.from_local_datetime(&date.and_time(time)) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => Err(ValidationError::InvalidTime(time.format("%H:%M").to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn at(h: u32, m: u32) -> DateTime<Tz> {
        REFERENCE_TZ.with_ymd_and_hms(2026, 8, 4, h, m, 0).unwrap()
    }

    #[test]
    fn test_next_occurrence_later_today() {
        let now = at(10, 0);
        let target = next_occurrence(now, NaiveTime::from_hms_opt(21, 0, 0).unwrap()).unwrap();
        assert_eq!(target.date_naive(), now.date_naive());
        assert_eq!((target.hour(), target.minute()), (21, 0));
        assert!(target > now);
    }

    #[test]
    fn test_next_occurrence_rolls_to_tomorrow() {
        let now = at(22, 30);
        let target = next_occurrence(now, NaiveTime::from_hms_opt(21, 0, 0).unwrap()).unwrap();
        assert_eq!(target.date_naive(), now.date_naive() + Days::new(1));
        assert_eq!((target.hour(), target.minute()), (21, 0));
        assert!(target > now);
    }

    #[test]
    fn test_next_occurrence_same_minute_rolls_over() {
        // The configured minute has already begun, so it counts as passed
        let now = at(21, 0);
        let target = next_occurrence(now, NaiveTime::from_hms_opt(21, 0, 0).unwrap()).unwrap();
        assert_eq!(target.date_naive(), now.date_naive() + Days::new(1));
        assert!(target > now);
    }

    #[test]
    fn test_reference_date_format() {
        assert_eq!(reference_date(at(0, 5)), "2026-08-04");
    }

    #[test]
    fn test_format_reference_renders_in_reference_tz() {
        let instant = DateTime::parse_from_rfc3339("2026-08-04T21:00:00+05:30").unwrap();
        assert_eq!(format_reference(instant), "2026-08-04 21:00 IST");
    }

    #[test]
    fn test_format_reference_converts_other_offsets() {
        // Midnight UTC is already the next morning in Kolkata
        let instant = DateTime::parse_from_rfc3339("2026-08-04T00:00:00+00:00").unwrap();
        assert_eq!(format_reference(instant), "2026-08-04 05:30 IST");
    }
}
