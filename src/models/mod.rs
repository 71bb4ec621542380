//! Core data models for the income calculation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod income;
mod rate_history;
mod shift;

pub use income::{MonthlyIncome, YearlyIncomeStats};
pub use rate_history::{RateHistory, RatePeriod};
pub use shift::Shift;
