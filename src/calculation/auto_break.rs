//! Automatic break suggestion.
//!
//! Evaluates the configured break rules against a shift's scheduled span to
//! pre-fill the break field on entry forms. Suggestions are never enforced.

use crate::config::BreakRule;
use crate::error::EngineResult;

use super::working_hours::calculate_working_hours;

/// Suggests an unpaid break duration for a scheduled shift.
///
/// Computes the break-free working hours of the span and evaluates the
/// rules ordered by descending `min_hours`, returning the break duration of
/// the first rule whose threshold is at or below the scheduled hours.
///
/// # Returns
///
/// The suggested break in minutes (0 when no rule matches), or
/// [`EngineError::InvalidTimeFormat`](crate::error::EngineError::InvalidTimeFormat)
/// when either time string is malformed.
///
/// # Examples
///
/// ```
/// use workmate_engine::calculation::calculate_auto_break;
/// use workmate_engine::config::Settings;
///
/// let settings = Settings::default();
///
/// // A nine-hour span matches the 8h -> 60min rule.
/// let minutes = calculate_auto_break("09:00", "18:00", &settings.break_rules).unwrap();
/// assert_eq!(minutes, 60);
/// ```
pub fn calculate_auto_break(
    start_time: &str,
    end_time: &str,
    rules: &[BreakRule],
) -> EngineResult<u32> {
    let scheduled_hours = calculate_working_hours(start_time, end_time, 0)?;

    // Apply the highest applicable threshold.
    let mut sorted: Vec<&BreakRule> = rules.iter().collect();
    sorted.sort_by(|a, b| b.min_hours.cmp(&a.min_hours));

    for rule in sorted {
        if scheduled_hours >= rule.min_hours {
            return Ok(rule.break_minutes);
        }
    }

    Ok(0)
}
