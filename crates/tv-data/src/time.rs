//! Conversion between catalog timestamps and date objects
//!
//! Catalog ranges are `i64` milliseconds since the Unix epoch; the UI side
//! works with `DateTime<Utc>`. The two functions are exact inverses for
//! every timestamp chrono can represent.

use chrono::{DateTime, Utc};

/// Interpret a catalog timestamp as a date
///
/// Inputs outside chrono's representable range saturate to the nearest
/// representable extreme.
pub fn parse_timestamp(timestamp: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(timestamp).unwrap_or_else(|| {
        if timestamp < 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        }
    })
}

/// Convert a date back to the catalog's timestamp representation
pub fn date_to_timestamp(date: DateTime<Utc>) -> i64 {
    date.timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_is_exact() {
        for timestamp in [0, 100, 200, -1, 1_600_000_000_000, i32::MAX as i64] {
            assert_eq!(date_to_timestamp(parse_timestamp(timestamp)), timestamp);
        }
    }

    #[test]
    fn test_out_of_range_saturates() {
        assert_eq!(parse_timestamp(i64::MAX), DateTime::<Utc>::MAX_UTC);
        assert_eq!(parse_timestamp(i64::MIN), DateTime::<Utc>::MIN_UTC);
    }
}
