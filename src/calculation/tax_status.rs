//! Tax-threshold status classification and planning helpers.
//!
//! Classifies a year's statistics against the configured income threshold
//! and provides the planning arithmetic around it: remaining workable
//! hours, a monthly income target, and a simplified tax estimate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::TaxPolicy;
use crate::models::YearlyIncomeStats;

/// Proximity classification against the income threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxStatus {
    /// Comfortably within the threshold.
    Safe,
    /// Approaching the threshold, or projected to exceed it.
    Warning,
    /// Already over the threshold.
    Danger,
}

impl std::fmt::Display for TaxStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaxStatus::Safe => write!(f, "safe"),
            TaxStatus::Warning => write!(f, "warning"),
            TaxStatus::Danger => write!(f, "danger"),
        }
    }
}

/// A status classification with its human-readable headline and detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxStatusReport {
    /// The classification.
    pub status: TaxStatus,
    /// A one-line headline.
    pub message: String,
    /// Detail reporting remaining headroom and/or overage.
    pub detail: String,
}

/// Classifies yearly statistics against the income threshold.
///
/// Evaluated in priority order:
///
/// 1. already over the threshold → [`TaxStatus::Danger`]
/// 2. projected to exceed it by year end → [`TaxStatus::Warning`]
/// 3. gross income at or beyond `warning_ratio` of the threshold →
///    [`TaxStatus::Warning`]
/// 4. otherwise → [`TaxStatus::Safe`]
///
/// # Examples
///
/// ```
/// use workmate_engine::calculation::{calculate_yearly_stats, tax_status, TaxStatus};
/// use workmate_engine::config::TaxPolicy;
///
/// let tax = TaxPolicy::default();
/// let stats = calculate_yearly_stats(&[], 6, &tax);
/// let report = tax_status(&stats, &tax);
/// assert_eq!(report.status, TaxStatus::Safe);
/// ```
pub fn tax_status(stats: &YearlyIncomeStats, tax: &TaxPolicy) -> TaxStatusReport {
    if stats.is_over_threshold {
        return TaxStatusReport {
            status: TaxStatus::Danger,
            message: format!(
                "Annual income has exceeded the {} threshold",
                format_yen(tax.threshold)
            ),
            detail: format!(
                "Current annual income: {}\nOver by: {}",
                format_yen(stats.total_gross_income),
                format_yen(stats.total_gross_income - tax.threshold)
            ),
        };
    }

    if stats.will_exceed_threshold {
        return TaxStatusReport {
            status: TaxStatus::Warning,
            message: format!(
                "On pace to exceed the {} threshold by year end",
                format_yen(tax.threshold)
            ),
            detail: format!(
                "Projected year-end income: {}\nRemaining headroom: {}",
                format_yen(stats.projected_year_end_income),
                format_yen(stats.remaining_to_threshold)
            ),
        };
    }

    let used_ratio = if tax.threshold > Decimal::ZERO {
        stats.total_gross_income / tax.threshold
    } else {
        Decimal::ZERO
    };
    let remaining_percent = ((Decimal::ONE - used_ratio) * Decimal::ONE_HUNDRED).round_dp(1);
    let detail = format!(
        "Remaining headroom: {} ({}%)",
        format_yen(stats.remaining_to_threshold),
        remaining_percent
    );

    if used_ratio >= tax.warning_ratio {
        return TaxStatusReport {
            status: TaxStatus::Warning,
            message: format!("Approaching the {} threshold", format_yen(tax.threshold)),
            detail,
        };
    }

    TaxStatusReport {
        status: TaxStatus::Safe,
        message: format!("Within the {} threshold", format_yen(tax.threshold)),
        detail,
    }
}

/// Calculates how many more hours can be worked before reaching the
/// threshold at the given hourly rate.
///
/// Returns zero when the rate is non-positive or the threshold is already
/// reached.
pub fn calculate_remaining_workable_hours(
    current_income: Decimal,
    hourly_rate: Decimal,
    tax: &TaxPolicy,
) -> Decimal {
    if hourly_rate <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let remaining = tax.threshold - current_income;
    if remaining <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    remaining / hourly_rate
}

/// Calculates the monthly income target that stays under the threshold.
///
/// The remaining headroom is divided across the remaining months of the
/// year including the current one. Returns zero when no months remain or
/// the headroom is exhausted.
pub fn calculate_monthly_target(
    current_income: Decimal,
    current_month: u32,
    tax: &TaxPolicy,
) -> Decimal {
    let remaining_months = 13i64 - i64::from(current_month);
    if remaining_months <= 0 {
        return Decimal::ZERO;
    }

    let remaining = tax.threshold - current_income;
    if remaining <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    remaining / Decimal::from(remaining_months)
}

/// Estimates the income tax owed on a year's gross income.
///
/// Zero at or below the threshold; otherwise the configured flat rate
/// applied to gross income minus both deductions, floored to whole yen and
/// to zero for a negative taxable base. This is a rough reference figure,
/// not a compliant tax computation.
///
/// # Examples
///
/// ```
/// use workmate_engine::calculation::estimate_tax;
/// use workmate_engine::config::TaxPolicy;
/// use rust_decimal::Decimal;
///
/// let tax = TaxPolicy::default();
/// assert_eq!(estimate_tax(Decimal::new(1_000_000, 0), &tax), Decimal::ZERO);
/// assert_eq!(estimate_tax(Decimal::new(1_040_000, 0), &tax), Decimal::new(500, 0));
/// ```
pub fn estimate_tax(gross_income: Decimal, tax: &TaxPolicy) -> Decimal {
    if gross_income <= tax.threshold {
        return Decimal::ZERO;
    }

    let taxable_income = gross_income - tax.basic_deduction - tax.employment_income_deduction;
    if taxable_income <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    (taxable_income * tax.tax_rate).floor()
}

/// Formats a yen amount floored to whole yen with thousands grouping.
fn format_yen(amount: Decimal) -> String {
    let value = amount.floor().normalize().to_string();
    let (sign, digits) = match value.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", value.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("¥{sign}{grouped}")
}
