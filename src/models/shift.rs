//! Shift model.
//!
//! This module defines the Shift struct representing a single logged work
//! shift in the shift-tracking system.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a single logged work shift.
///
/// Start and end times are plain `HH:mm` strings on a fixed 24-hour local
/// clock with no timezone or DST awareness. An end time numerically less
/// than the start time denotes a shift crossing midnight; the calculation
/// functions account for this by extending the end past 24:00.
///
/// `hourly_rate` is a snapshot of the rate in effect on `date` at the time
/// the shift was last computed, not a live reference into the rate history.
/// Whenever the rate history changes or the shift's date changes, the
/// snapshot must be recomputed via
/// [`RateHistory::resync_shifts`](crate::models::RateHistory::resync_shifts).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// The calendar date the shift starts on.
    pub date: NaiveDate,
    /// The start time of the shift (`HH:mm`, 24-hour).
    pub start_time: String,
    /// The end time of the shift (`HH:mm`, 24-hour; may be numerically
    /// less than `start_time` for shifts crossing midnight).
    pub end_time: String,
    /// Unpaid break duration in minutes.
    pub break_minutes: u32,
    /// The hourly rate in effect on `date`, snapshotted at last computation.
    pub hourly_rate: Decimal,
    /// Optional free-text note.
    #[serde(default)]
    pub note: Option<String>,
}

impl Shift {
    /// Creates a new shift with a generated UUID.
    ///
    /// The caller is expected to have resolved `hourly_rate` from the rate
    /// history for `date` (see
    /// [`RateHistory::rate_on`](crate::models::RateHistory::rate_on)).
    ///
    /// # Examples
    ///
    /// ```
    /// use workmate_engine::models::Shift;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let shift = Shift::new(
    ///     NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
    ///     "09:00",
    ///     "17:00",
    ///     60,
    ///     Decimal::new(1000, 0),
    /// );
    /// assert_eq!(shift.break_minutes, 60);
    /// assert!(shift.note.is_none());
    /// ```
    pub fn new(
        date: NaiveDate,
        start_time: &str,
        end_time: &str,
        break_minutes: u32,
        hourly_rate: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            break_minutes,
            hourly_rate,
            note: None,
        }
    }
}
