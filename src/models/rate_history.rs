//! Pay-rate history model and rate lookup.
//!
//! This module defines the hourly pay-rate history: a set of date-stamped
//! rate periods forming a step function over time, plus the bulk
//! resynchronization that keeps every shift's cached rate snapshot in line
//! with the current history.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::Shift;

/// A single pay-rate period: a rate value effective from a given date until
/// superseded by a later-dated period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatePeriod {
    /// Unique identifier for the period.
    pub id: String,
    /// The hourly rate in yen.
    pub rate: Decimal,
    /// The first date on which this rate applies.
    pub effective_from: NaiveDate,
}

impl RatePeriod {
    /// Creates a new rate period with a generated UUID.
    pub fn new(rate: Decimal, effective_from: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            rate,
            effective_from,
        }
    }
}

/// The complete hourly-rate history, held sorted by effective date.
///
/// The set of periods forms a step function over time: for any date, the
/// applicable rate is the rate of the period with the latest
/// `effective_from` on or before that date.
///
/// # Example
///
/// ```
/// use workmate_engine::models::{RateHistory, RatePeriod};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let history = RateHistory::new(vec![
///     RatePeriod::new(Decimal::new(1000, 0), NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()),
///     RatePeriod::new(Decimal::new(1100, 0), NaiveDate::from_ymd_opt(2026, 4, 1).unwrap()),
/// ]);
///
/// let spring = NaiveDate::from_ymd_opt(2026, 5, 10).unwrap();
/// assert_eq!(history.rate_on(spring), Decimal::new(1100, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateHistory {
    /// Rate periods sorted ascending by `effective_from`.
    periods: Vec<RatePeriod>,
}

impl RateHistory {
    /// Creates a rate history from the given periods.
    ///
    /// Periods are sorted ascending by `effective_from` so that lookups can
    /// scan from the most recent period backwards.
    pub fn new(periods: Vec<RatePeriod>) -> Self {
        let mut sorted = periods;
        sorted.sort_by(|a, b| a.effective_from.cmp(&b.effective_from));
        Self { periods: sorted }
    }

    /// Returns the periods, sorted ascending by effective date.
    pub fn periods(&self) -> &[RatePeriod] {
        &self.periods
    }

    /// Returns the hourly rate applicable on the given date.
    ///
    /// This is the rate of the period with the latest `effective_from` on or
    /// before `date`, or [`Decimal::ZERO`] when no period is in effect yet.
    pub fn rate_on(&self, date: NaiveDate) -> Decimal {
        self.periods
            .iter()
            .rfind(|p| p.effective_from <= date)
            .map(|p| p.rate)
            .unwrap_or(Decimal::ZERO)
    }

    /// Overwrites every shift's cached `hourly_rate` from the current history.
    ///
    /// A shift's stored rate is a cached derived value, not authoritative.
    /// After any mutation of the rate history or of a shift's date, the
    /// external store must run this full resync before the shifts are fed
    /// into aggregation, and must apply it atomically relative to concurrent
    /// reads so that an aggregation call never observes a half-updated
    /// snapshot. Recomputing every shift rather than patching affected date
    /// ranges trades efficiency for correctness; shift volumes are small.
    pub fn resync_shifts(&self, shifts: &mut [Shift]) {
        for shift in shifts.iter_mut() {
            shift.hourly_rate = self.rate_on(shift.date);
        }
        debug!(
            shift_count = shifts.len(),
            period_count = self.periods.len(),
            "resynchronized shift rate snapshots"
        );
    }
}
