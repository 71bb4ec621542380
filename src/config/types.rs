//! Configuration types for the income calculation engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every field carries a
//! built-in default, so a partial configuration file only needs to name
//! the fields it overrides.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single automatic-break rule: when the scheduled (break-free) hours of
/// a shift reach `min_hours`, suggest `break_minutes` of unpaid break.
///
/// A collection of rules forms a step function from scheduled hours to
/// suggested break duration. Rules only pre-fill forms; they are never
/// enforced against a shift the user entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakRule {
    /// The minimum scheduled hours for this rule to apply.
    pub min_hours: Decimal,
    /// The suggested unpaid break duration in minutes.
    pub break_minutes: u32,
}

/// User settings governing pay calculation and form defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Start of the night-differential window (`HH:mm`).
    pub night_shift_start: String,
    /// End of the night-differential window (`HH:mm`), on the day after
    /// `night_shift_start`.
    pub night_shift_end: String,
    /// Pay multiplier applied to hours inside the night window.
    pub night_shift_multiplier: Decimal,
    /// Automatic-break suggestion rules.
    pub break_rules: Vec<BreakRule>,
    /// Flat monthly transportation allowance in yen (non-taxable).
    pub transportation_cost: Decimal,
    /// Default shift start time for bulk entry (`HH:mm`).
    pub standard_shift_start: String,
    /// Default shift end time for bulk entry (`HH:mm`).
    pub standard_shift_end: String,
    /// Default break duration in minutes for bulk entry.
    pub standard_shift_break: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            night_shift_start: "22:00".to_string(),
            night_shift_end: "05:00".to_string(),
            night_shift_multiplier: Decimal::new(125, 2),
            break_rules: vec![
                BreakRule {
                    min_hours: Decimal::new(6, 0),
                    break_minutes: 45,
                },
                BreakRule {
                    min_hours: Decimal::new(8, 0),
                    break_minutes: 60,
                },
            ],
            transportation_cost: Decimal::ZERO,
            standard_shift_start: "09:00".to_string(),
            standard_shift_end: "18:00".to_string(),
            standard_shift_break: 60,
        }
    }
}

/// Jurisdiction tax constants, kept as configuration so they can be updated
/// without touching the algorithms.
///
/// The defaults encode the Japanese dependent-income rules the tool was
/// built around: the ¥1,030,000 annual threshold (基礎控除 ¥480,000 plus
/// 給与所得控除 ¥550,000) and a simplified flat 5% rate on taxable income
/// above it. The estimate is a rough reference figure, not a compliant tax
/// computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxPolicy {
    /// Annual gross-income threshold in yen.
    pub threshold: Decimal,
    /// Basic deduction in yen.
    pub basic_deduction: Decimal,
    /// Employment income deduction in yen.
    pub employment_income_deduction: Decimal,
    /// Flat tax rate applied to taxable income above the threshold.
    pub tax_rate: Decimal,
    /// Fraction of the threshold at which the status classification starts
    /// warning even without a projected overrun.
    pub warning_ratio: Decimal,
}

impl Default for TaxPolicy {
    fn default() -> Self {
        Self {
            threshold: Decimal::new(1_030_000, 0),
            basic_deduction: Decimal::new(480_000, 0),
            employment_income_deduction: Decimal::new(550_000, 0),
            tax_rate: Decimal::new(5, 2),
            warning_ratio: Decimal::new(8, 1),
        }
    }
}

/// The complete engine configuration.
///
/// Aggregates the user [`Settings`] and the jurisdiction [`TaxPolicy`].
/// Calculations take a consistent snapshot of this value; callers must not
/// mix settings from different snapshots within one aggregation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// User settings.
    settings: Settings,
    /// Jurisdiction tax constants.
    tax: TaxPolicy,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(settings: Settings, tax: TaxPolicy) -> Self {
        Self { settings, tax }
    }

    /// Returns the user settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the jurisdiction tax constants.
    pub fn tax(&self) -> &TaxPolicy {
        &self.tax
    }
}
