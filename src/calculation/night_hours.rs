//! Night-hours calculation.
//!
//! Computes the hours of a shift that fall inside the configured
//! night-differential window, which always spans from its start time through
//! midnight into its end time on the following day (22:00-05:00 by default).

use rust_decimal::Decimal;

use crate::error::EngineResult;

use super::MINUTES_PER_DAY;
use super::clock::minutes_since_midnight;

/// Calculates the hours of a shift that overlap the night window.
///
/// The overlap is the sum of two possibly-empty sub-intervals:
///
/// - the overlap with `[night_start, 24:00)`, and
/// - the overlap with `[24:00, 24:00 + night_end)` when the shift extends
///   past midnight, or `[00:00, night_end)` when the shift starts in the
///   early morning without crossing midnight.
///
/// Break time is assumed to be distributed proportionally across day and
/// night rather than concentrated in either, so the raw night minutes are
/// scaled by `1 - break_minutes / total_raw_span`. This is a simplifying
/// modeling assumption, not a labor-law rule. The result is clamped at
/// zero and a zero-length raw span yields zero.
///
/// # Arguments
///
/// * `start_time` - Shift start (`HH:mm`)
/// * `end_time` - Shift end (`HH:mm`; less than `start_time` for overnight shifts)
/// * `break_minutes` - Unpaid break duration in minutes
/// * `night_start` - Start of the night window (`HH:mm`)
/// * `night_end` - End of the night window on the following day (`HH:mm`)
///
/// # Returns
///
/// The night hours as a non-negative `Decimal`, or
/// [`EngineError::InvalidTimeFormat`](crate::error::EngineError::InvalidTimeFormat)
/// when any time string is malformed.
///
/// # Examples
///
/// ```
/// use workmate_engine::calculation::calculate_night_hours;
/// use rust_decimal::Decimal;
///
/// // Only 22:00-23:00 overlaps the default window.
/// let hours = calculate_night_hours("18:00", "23:00", 0, "22:00", "05:00").unwrap();
/// assert_eq!(hours, Decimal::new(1, 0));
///
/// // 22:00-02:00 of a midnight-crossing shift is all night time.
/// let hours = calculate_night_hours("20:00", "02:00", 0, "22:00", "05:00").unwrap();
/// assert_eq!(hours, Decimal::new(4, 0));
/// ```
pub fn calculate_night_hours(
    start_time: &str,
    end_time: &str,
    break_minutes: u32,
    night_start: &str,
    night_end: &str,
) -> EngineResult<Decimal> {
    let start_minutes = i64::from(minutes_since_midnight(start_time)?);
    let mut end_minutes = i64::from(minutes_since_midnight(end_time)?);
    let night_start_minutes = i64::from(minutes_since_midnight(night_start)?);
    let night_end_minutes = i64::from(minutes_since_midnight(night_end)?);

    // Handle overnight shifts
    if end_minutes < start_minutes {
        end_minutes += MINUTES_PER_DAY;
    }

    let total_span_minutes = end_minutes - start_minutes;
    if total_span_minutes == 0 {
        return Ok(Decimal::ZERO);
    }

    let mut night_minutes: i64 = 0;

    // Evening sub-window: [night_start, 24:00)
    if end_minutes > night_start_minutes {
        let overlap_start = start_minutes.max(night_start_minutes);
        let overlap_end = end_minutes.min(MINUTES_PER_DAY);
        night_minutes += (overlap_end - overlap_start).max(0);
    }

    // Morning sub-window: [24:00, 24:00 + night_end) for midnight-crossing
    // shifts, [00:00, night_end) for early-morning shifts.
    if end_minutes > MINUTES_PER_DAY {
        let adjusted_end = end_minutes - MINUTES_PER_DAY;
        night_minutes += adjusted_end.min(night_end_minutes).max(0);
    } else if start_minutes < night_end_minutes {
        let overlap_end = end_minutes.min(night_end_minutes);
        night_minutes += (overlap_end - start_minutes).max(0);
    }

    // Distribute the break proportionally across day and night hours.
    let mut night = Decimal::from(night_minutes);
    if break_minutes > 0 {
        let break_ratio = Decimal::from(break_minutes) / Decimal::from(total_span_minutes);
        night *= Decimal::ONE - break_ratio;
    }

    Ok((night / Decimal::from(60)).max(Decimal::ZERO))
}
