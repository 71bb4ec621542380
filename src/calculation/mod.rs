//! Calculation logic for the income calculation engine.
//!
//! This module contains all the pure calculation functions: clock-time
//! parsing, working-hour calculation across midnight boundaries, night-hour
//! overlap with proportional break allocation, automatic break suggestion,
//! per-shift income, monthly aggregation, yearly statistics with a linear
//! year-end projection, and tax-threshold status classification.
//!
//! Every function here is a pure function of its arguments: no I/O, no
//! hidden state, identical inputs always yield identical outputs. Callers
//! must supply a consistent snapshot — a settings value and a shift list
//! captured at the same logical instant.

mod auto_break;
mod clock;
mod monthly_income;
mod night_hours;
mod shift_income;
mod tax_status;
mod working_hours;
mod yearly_stats;

pub use auto_break::calculate_auto_break;
pub use clock::{format_minutes, minutes_since_midnight};
pub use monthly_income::calculate_monthly_income;
pub use night_hours::calculate_night_hours;
pub use shift_income::{ShiftIncome, calculate_shift_income};
pub use tax_status::{
    TaxStatus, TaxStatusReport, calculate_monthly_target, calculate_remaining_workable_hours,
    estimate_tax, tax_status,
};
pub use working_hours::calculate_working_hours;
pub use yearly_stats::calculate_yearly_stats;

/// Minutes in a full day, used when extending midnight-crossing shifts.
pub(crate) const MINUTES_PER_DAY: i64 = 24 * 60;
