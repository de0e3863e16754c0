use time::format_description::FormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::error::{NutritionError, Result};

pub const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Years accepted for logged days. RFC 3339 timestamps need four unsigned digits,
/// and a day must stay inside that range after shifting by any offset.
pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9998;

/// Parses a `YYYY-MM-DD` calendar date within `MIN_YEAR..=MAX_YEAR`.
pub fn parse_date(s: &str) -> Result<Date> {
    let date = Date::parse(s.trim(), DATE_FORMAT)
        .map_err(|_| NutritionError::validation(format!("invalid date '{s}', expected YYYY-MM-DD")))?;
    if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
        return Err(NutritionError::validation(format!(
            "date '{s}' is out of range, year must be between {MIN_YEAR} and {MAX_YEAR}"
        )));
    }
    Ok(date)
}

/// Calendar date of an instant as seen from `offset`, or `None` when the shifted
/// instant falls outside the representable range.
pub fn local_date(ts: OffsetDateTime, offset: UtcOffset) -> Option<Date> {
    let shifted = ts.unix_timestamp() + i64::from(offset.whole_seconds());
    OffsetDateTime::from_unix_timestamp(shifted).ok().map(|dt| dt.date())
}

/// Today's calendar date at `offset`.
pub fn today(offset: UtcOffset) -> Date {
    OffsetDateTime::now_utc().to_offset(offset).date()
}

/// Timestamp for an entry logged on `day`: the wall-clock time of `now` at `offset`
/// placed on the selected date.
pub fn stamp_on(day: Date, now: OffsetDateTime, offset: UtcOffset) -> OffsetDateTime {
    let local_now = now.to_offset(offset);
    PrimitiveDateTime::new(day, local_now.time()).assume_offset(offset)
}

/// serde helpers for `YYYY-MM-DD` dates.
pub mod iso_date {
    use serde::{de::Error as _, ser::Error as _, Deserialize, Deserializer, Serializer};
    use time::Date;

    use super::DATE_FORMAT;

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        let s = date.format(DATE_FORMAT).map_err(S::Error::custom)?;
        serializer.serialize_str(&s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let s = String::deserialize(deserializer)?;
        Date::parse(&s, DATE_FORMAT).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod dates_tests {
    use super::*;
    use time::macros::{date, datetime, offset};

    #[test]
    fn test_parse_date_accepts_iso_and_rejects_garbage() {
        assert_eq!(parse_date("2024-03-09").unwrap(), date!(2024 - 03 - 09));
        assert_eq!(parse_date(" 2024-03-09 ").unwrap(), date!(2024 - 03 - 09));
        assert!(matches!(parse_date("09/03/2024"), Err(NutritionError::Validation(_))));
        assert!(parse_date("2024-02-30").is_err());
    }

    #[test]
    fn test_local_date_follows_offset() {
        let ts = datetime!(2024-03-09 23:30 UTC);
        assert_eq!(local_date(ts, offset!(UTC)), Some(date!(2024 - 03 - 09)));
        assert_eq!(local_date(ts, offset!(+2)), Some(date!(2024 - 03 - 10)));
        assert_eq!(local_date(ts, offset!(-5)), Some(date!(2024 - 03 - 09)));
        let stored = datetime!(2024-03-09 23:30 +01:00);
        assert_eq!(local_date(stored, offset!(+2)), Some(date!(2024 - 03 - 10)));
    }

    #[test]
    fn test_local_date_past_the_last_representable_day_is_none() {
        let ts = datetime!(9999-12-31 23:30 +01:00);
        assert_eq!(local_date(ts, offset!(+1)), Some(date!(9999 - 12 - 31)));
        assert_eq!(local_date(ts, offset!(+2)), None);
    }

    #[test]
    fn test_parse_date_rejects_years_outside_timestamp_range() {
        assert!(matches!(parse_date("-0001-06-01"), Err(NutritionError::Validation(_))));
        assert!(matches!(parse_date("0000-01-01"), Err(NutritionError::Validation(_))));
        assert!(matches!(parse_date("9999-12-31"), Err(NutritionError::Validation(_))));
        assert_eq!(parse_date("0001-01-01").unwrap(), date!(0001 - 01 - 01));
        assert_eq!(parse_date("9998-12-31").unwrap(), date!(9998 - 12 - 31));
    }

    #[test]
    fn test_stamp_on_keeps_time_of_day_and_selected_date() {
        let now = datetime!(2024-03-09 10:15:30 UTC);
        let ts = stamp_on(date!(2024 - 02 - 01), now, offset!(+1));
        assert_eq!(ts.offset(), offset!(+1));
        assert_eq!(ts.date(), date!(2024 - 02 - 01));
        assert_eq!(ts.hour(), 11);
        assert_eq!(ts.minute(), 15);
    }
}
