//! Per-kind storage encode/decode helpers.
//!
//! Generated storage codecs call these helpers instead of open-coding the conversions, so
//! every generated type agrees byte-for-byte on how a kind is stored and how precision is
//! bounded.
//!
//! ## Notes
//! - Date: whole days from the Common Era. Exact.
//! - Time of day: nanoseconds since midnight. Exact; a leap-second representation folds
//!   into the following second.
//! - Datetime: milliseconds since the Unix epoch, normalized to UTC. Sub-millisecond
//!   components truncate.
//! - Duration: nanoseconds; saturates beyond the i64 nanosecond range (about ±292 years).
//! - Datetime with offset: composite document holding the UTC instant (milliseconds) and
//!   the offset in whole seconds. The offset round-trips exactly, the instant to the
//!   millisecond.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime, TimeDelta, Timelike, Utc};

use crate::stored::{StoreError, StoredValue};

const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// Document field holding the UTC instant of an offset-carrying datetime.
pub const FIELD_INSTANT: &str = "instant";
/// Document field holding the offset, in whole seconds east of UTC.
pub const FIELD_OFFSET_SECONDS: &str = "offset_seconds";

/// Encode a date as a whole-day count from the Common Era.
pub fn encode_date(value: NaiveDate) -> i64 {
    i64::from(value.num_days_from_ce())
}

/// Decode a whole-day count back into a date.
pub fn decode_date(days: i64) -> Result<NaiveDate, StoreError> {
    let days = i32::try_from(days).map_err(|_| StoreError::OutOfRange {
        what: "date day number",
        value: days,
    })?;
    NaiveDate::from_num_days_from_ce_opt(days).ok_or(StoreError::OutOfRange {
        what: "date day number",
        value: i64::from(days),
    })
}

/// Encode a time of day as nanoseconds since midnight.
pub fn encode_time_of_day(value: NaiveTime) -> i64 {
    i64::from(value.num_seconds_from_midnight()) * NANOS_PER_SECOND + i64::from(value.nanosecond())
}

/// Decode a nanoseconds-since-midnight count back into a time of day.
pub fn decode_time_of_day(nanos: i64) -> Result<NaiveTime, StoreError> {
    let out_of_range = StoreError::OutOfRange {
        what: "time-of-day nanosecond count",
        value: nanos,
    };
    if nanos < 0 {
        return Err(out_of_range);
    }
    let secs = u32::try_from(nanos / NANOS_PER_SECOND).map_err(|_| out_of_range.clone())?;
    let frac = u32::try_from(nanos % NANOS_PER_SECOND).map_err(|_| out_of_range.clone())?;
    NaiveTime::from_num_seconds_from_midnight_opt(secs, frac).ok_or(out_of_range)
}

/// Encode a UTC instant as milliseconds since the Unix epoch. Sub-millisecond truncates.
pub fn encode_date_time(value: DateTime<Utc>) -> i64 {
    value.timestamp_millis()
}

/// Decode an epoch-millisecond count back into a UTC instant.
pub fn decode_date_time(millis: i64) -> Result<DateTime<Utc>, StoreError> {
    DateTime::from_timestamp_millis(millis).ok_or(StoreError::OutOfRange {
        what: "datetime epoch milliseconds",
        value: millis,
    })
}

/// Encode a duration as nanoseconds, saturating beyond the representable range.
pub fn encode_duration(value: TimeDelta) -> i64 {
    value.num_nanoseconds().unwrap_or(if value < TimeDelta::zero() {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Decode a nanosecond count back into a duration.
pub fn decode_duration(nanos: i64) -> TimeDelta {
    TimeDelta::nanoseconds(nanos)
}

/// Encode an offset-carrying instant as a composite document.
pub fn encode_date_time_with_offset(value: DateTime<FixedOffset>) -> StoredValue {
    let mut doc = BTreeMap::new();
    doc.insert(
        FIELD_INSTANT.to_owned(),
        StoredValue::DateTime(value.timestamp_millis()),
    );
    doc.insert(
        FIELD_OFFSET_SECONDS.to_owned(),
        StoredValue::Int64(i64::from(value.offset().local_minus_utc())),
    );
    StoredValue::Document(doc)
}

/// Decode the composite document back into an offset-carrying instant.
///
/// Reconstruction applies the stored offset to the stored UTC instant.
pub fn decode_date_time_with_offset(
    type_name: &'static str,
    doc: &BTreeMap<String, StoredValue>,
) -> Result<DateTime<FixedOffset>, StoreError> {
    let instant = match doc.get(FIELD_INSTANT) {
        Some(StoredValue::DateTime(millis)) => *millis,
        Some(other) => return Err(StoreError::unexpected_shape(type_name, "DateTime", other)),
        None => {
            return Err(StoreError::MissingField {
                type_name,
                field: FIELD_INSTANT,
            });
        }
    };
    let offset_seconds = match doc.get(FIELD_OFFSET_SECONDS) {
        Some(StoredValue::Int64(seconds)) => *seconds,
        Some(other) => return Err(StoreError::unexpected_shape(type_name, "Int64", other)),
        None => {
            return Err(StoreError::MissingField {
                type_name,
                field: FIELD_OFFSET_SECONDS,
            });
        }
    };

    let offset_seconds_i32 = i32::try_from(offset_seconds).map_err(|_| StoreError::OutOfRange {
        what: "datetime offset seconds",
        value: offset_seconds,
    })?;
    let offset = FixedOffset::east_opt(offset_seconds_i32).ok_or(StoreError::OutOfRange {
        what: "datetime offset seconds",
        value: offset_seconds,
    })?;
    Ok(decode_date_time(instant)?.with_timezone(&offset))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_date_round_trips_exactly() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(decode_date(encode_date(date)).unwrap(), date);
    }

    #[test]
    fn test_date_rejects_out_of_range_day_numbers() {
        assert!(matches!(
            decode_date(i64::MAX),
            Err(StoreError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_time_of_day_round_trips_to_the_nanosecond() {
        let time = NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).unwrap();
        assert_eq!(decode_time_of_day(encode_time_of_day(time)).unwrap(), time);
    }

    #[test]
    fn test_time_of_day_rejects_negative_counts() {
        assert!(decode_time_of_day(-1).is_err());
    }

    #[test]
    fn test_date_time_truncates_below_the_millisecond() {
        let instant = DateTime::from_timestamp(1_700_000_000, 123_456_789).unwrap();
        let decoded = decode_date_time(encode_date_time(instant)).unwrap();
        assert_eq!(decoded.timestamp(), instant.timestamp());
        assert_eq!(decoded.timestamp_subsec_millis(), 123);
        assert_eq!(decoded.timestamp_subsec_nanos(), 123_000_000);
    }

    #[test]
    fn test_duration_round_trips_exactly() {
        let duration = TimeDelta::nanoseconds(-5_000_000_123);
        assert_eq!(decode_duration(encode_duration(duration)), duration);
    }

    #[test]
    fn test_duration_saturates_beyond_the_nanosecond_range() {
        let huge = TimeDelta::days(200_000_000);
        assert_eq!(encode_duration(huge), i64::MAX);
        assert_eq!(encode_duration(-huge), i64::MIN);
    }

    #[test]
    fn test_offset_instant_preserves_the_offset_exactly() {
        let offset = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
        let value = DateTime::from_timestamp(1_700_000_000, 250_000_000)
            .unwrap()
            .with_timezone(&offset);

        let encoded = match encode_date_time_with_offset(value) {
            StoredValue::Document(doc) => doc,
            other => panic!("expected a document, got {:?}", other),
        };
        let decoded = decode_date_time_with_offset("Scheduled", &encoded).unwrap();

        assert_eq!(decoded.offset().local_minus_utc(), offset.local_minus_utc());
        assert_eq!(decoded.timestamp_millis(), value.timestamp_millis());
        assert_eq!(decoded, value);
    }

    #[test]
    fn test_offset_document_missing_field_is_reported() {
        let err = decode_date_time_with_offset("Scheduled", &BTreeMap::new()).unwrap_err();
        assert!(matches!(err, StoreError::MissingField { field: "instant", .. }));
    }
}
