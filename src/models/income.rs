//! Derived income aggregate models.
//!
//! `MonthlyIncome` and `YearlyIncomeStats` are computed views over shift
//! data, never stored; they are produced by
//! [`calculate_monthly_income`](crate::calculation::calculate_monthly_income)
//! and [`calculate_yearly_stats`](crate::calculation::calculate_yearly_stats).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Income summary for a single calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyIncome {
    /// The calendar year.
    pub year: i32,
    /// The calendar month (1-12).
    pub month: u32,
    /// Total worked hours across all shifts in the month.
    pub total_hours: Decimal,
    /// Hours worked outside the night window.
    pub regular_hours: Decimal,
    /// Hours worked inside the night window.
    pub night_hours: Decimal,
    /// Gross income for the month including the night differential.
    pub gross_income: Decimal,
    /// Flat monthly transportation allowance (non-taxable, from settings).
    pub transportation_cost: Decimal,
    /// Number of shifts folded into this summary.
    pub shift_count: usize,
}

/// Yearly income statistics with a linear year-end projection and
/// tax-threshold proximity flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyIncomeStats {
    /// The calendar year.
    pub year: i32,
    /// Total gross income across the supplied months.
    pub total_gross_income: Decimal,
    /// Total non-taxable transportation allowance across the supplied months.
    pub total_transportation_cost: Decimal,
    /// Total worked hours across the supplied months.
    pub total_hours: Decimal,
    /// Remaining headroom to the tax threshold, floored at zero.
    pub remaining_to_threshold: Decimal,
    /// Linear projection of year-end income: actual income plus the average
    /// of months with data extrapolated over the remaining months.
    pub projected_year_end_income: Decimal,
    /// Whether gross income has already exceeded the tax threshold.
    pub is_over_threshold: bool,
    /// Whether the projected year-end income exceeds the tax threshold.
    pub will_exceed_threshold: bool,
    /// The per-month breakdown the statistics were computed from.
    pub monthly_breakdown: Vec<MonthlyIncome>,
}
