//! Clock-time parsing primitives.
//!
//! Times throughout the engine are `HH:mm` strings on a fixed 24-hour local
//! clock, represented internally as integer minute offsets from midnight.

use crate::error::{EngineError, EngineResult};

/// Parses an `HH:mm` time string into minutes since midnight.
///
/// # Arguments
///
/// * `time` - A 24-hour clock time such as `"09:30"` or `"22:00"`
///
/// # Returns
///
/// The offset in minutes, in `[0, 1439]`, or
/// [`EngineError::InvalidTimeFormat`] when the string is malformed or out
/// of range. This error propagates uncaught through every dependent
/// calculation; there is no recovery path for malformed time data.
///
/// # Examples
///
/// ```
/// use workmate_engine::calculation::minutes_since_midnight;
///
/// assert_eq!(minutes_since_midnight("00:00").unwrap(), 0);
/// assert_eq!(minutes_since_midnight("09:30").unwrap(), 570);
/// assert_eq!(minutes_since_midnight("23:59").unwrap(), 1439);
/// assert!(minutes_since_midnight("24:00").is_err());
/// ```
pub fn minutes_since_midnight(time: &str) -> EngineResult<u32> {
    let (hours_part, minutes_part) = time
        .split_once(':')
        .ok_or_else(|| invalid_time(time))?;

    let hours: u32 = hours_part.parse().map_err(|_| invalid_time(time))?;
    let minutes: u32 = minutes_part.parse().map_err(|_| invalid_time(time))?;

    if hours > 23 || minutes > 59 {
        return Err(invalid_time(time));
    }

    Ok(hours * 60 + minutes)
}

/// Formats a minutes-since-midnight offset back into a zero-padded `HH:mm`
/// string.
///
/// Offsets at or beyond 24:00 wrap around to the following day's clock.
pub fn format_minutes(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60 % 24, minutes % 60)
}

fn invalid_time(value: &str) -> EngineError {
    EngineError::InvalidTimeFormat {
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_valid_times() {
        assert_eq!(minutes_since_midnight("00:00").unwrap(), 0);
        assert_eq!(minutes_since_midnight("05:00").unwrap(), 300);
        assert_eq!(minutes_since_midnight("09:00").unwrap(), 540);
        assert_eq!(minutes_since_midnight("22:00").unwrap(), 1320);
        assert_eq!(minutes_since_midnight("23:59").unwrap(), 1439);
    }

    #[test]
    fn test_rejects_missing_colon() {
        assert!(minutes_since_midnight("0900").is_err());
        assert!(minutes_since_midnight("").is_err());
    }

    #[test]
    fn test_rejects_non_numeric_components() {
        assert!(minutes_since_midnight("ab:cd").is_err());
        assert!(minutes_since_midnight("09:").is_err());
        assert!(minutes_since_midnight(":30").is_err());
        assert!(minutes_since_midnight("9:3 0").is_err());
    }

    #[test]
    fn test_rejects_out_of_range_components() {
        assert!(minutes_since_midnight("24:00").is_err());
        assert!(minutes_since_midnight("12:60").is_err());
        assert!(minutes_since_midnight("99:99").is_err());
    }

    #[test]
    fn test_error_carries_offending_value() {
        match minutes_since_midnight("25:70") {
            Err(crate::error::EngineError::InvalidTimeFormat { value }) => {
                assert_eq!(value, "25:70");
            }
            other => panic!("Expected InvalidTimeFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_format_minutes_zero_pads() {
        assert_eq!(format_minutes(0), "00:00");
        assert_eq!(format_minutes(570), "09:30");
        assert_eq!(format_minutes(1439), "23:59");
    }

    #[test]
    fn test_round_trip() {
        for time in ["00:00", "05:00", "09:30", "18:45", "22:00", "23:59"] {
            let minutes = minutes_since_midnight(time).unwrap();
            assert_eq!(format_minutes(minutes), time);
        }
    }
}
