//! Working-hours calculation.
//!
//! Computes the paid working hours of a shift from its start time, end time,
//! and unpaid break, handling shifts that cross midnight.

use rust_decimal::Decimal;

use crate::error::EngineResult;

use super::MINUTES_PER_DAY;
use super::clock::minutes_since_midnight;

/// Calculates the working hours of a shift, excluding break time.
///
/// When the end time is numerically less than the start time the shift is
/// treated as crossing midnight, extending the end by 24 hours before
/// subtracting. A break longer than the raw span clamps the result to zero;
/// this function never fails on semantically odd input, only on time
/// strings that do not parse.
///
/// # Arguments
///
/// * `start_time` - Shift start (`HH:mm`)
/// * `end_time` - Shift end (`HH:mm`; less than `start_time` for overnight shifts)
/// * `break_minutes` - Unpaid break duration in minutes
///
/// # Returns
///
/// The worked hours as a non-negative `Decimal`, or
/// [`EngineError::InvalidTimeFormat`](crate::error::EngineError::InvalidTimeFormat)
/// when either time string is malformed.
///
/// # Examples
///
/// ```
/// use workmate_engine::calculation::calculate_working_hours;
/// use rust_decimal::Decimal;
///
/// // Ordinary day shift with a one-hour break.
/// let hours = calculate_working_hours("09:00", "17:00", 60).unwrap();
/// assert_eq!(hours, Decimal::new(7, 0));
///
/// // Overnight shift: 22:00 to 05:00 the next morning.
/// let hours = calculate_working_hours("22:00", "05:00", 0).unwrap();
/// assert_eq!(hours, Decimal::new(7, 0));
/// ```
pub fn calculate_working_hours(
    start_time: &str,
    end_time: &str,
    break_minutes: u32,
) -> EngineResult<Decimal> {
    let start_minutes = i64::from(minutes_since_midnight(start_time)?);
    let mut end_minutes = i64::from(minutes_since_midnight(end_time)?);

    // Handle overnight shifts
    if end_minutes < start_minutes {
        end_minutes += MINUTES_PER_DAY;
    }

    let worked_minutes = (end_minutes - start_minutes - i64::from(break_minutes)).max(0);

    Ok(Decimal::from(worked_minutes) / Decimal::from(60))
}
