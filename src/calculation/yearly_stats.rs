//! Yearly statistics and year-end projection.
//!
//! Folds monthly summaries into a [`YearlyIncomeStats`] record with a flat
//! linear extrapolation of year-end income and the threshold flags the tax
//! status classification builds on.

use rust_decimal::Decimal;

use crate::config::TaxPolicy;
use crate::models::{MonthlyIncome, YearlyIncomeStats};

/// Calculates yearly income statistics from monthly summaries.
///
/// Sums gross income, transportation allowance, and hours across the
/// supplied months (twelve or fewer). The year-end projection is a flat
/// linear extrapolation: the average gross of months that actually contain
/// shifts, applied to each month after `current_month`. With no months of
/// data the average is zero rather than a division error, so an empty year
/// projects to zero and reports full headroom.
///
/// The reported `year` is taken from the first supplied month (zero when
/// the input is empty).
///
/// # Arguments
///
/// * `monthly_incomes` - Monthly summaries, ordered by month
/// * `current_month` - The current calendar month (1-12), bounding the projection
/// * `tax` - The tax constants supplying the threshold
///
/// # Examples
///
/// ```
/// use workmate_engine::calculation::calculate_yearly_stats;
/// use workmate_engine::config::TaxPolicy;
///
/// let tax = TaxPolicy::default();
/// let stats = calculate_yearly_stats(&[], 6, &tax);
///
/// assert!(!stats.is_over_threshold);
/// assert_eq!(stats.remaining_to_threshold, tax.threshold);
/// ```
pub fn calculate_yearly_stats(
    monthly_incomes: &[MonthlyIncome],
    current_month: u32,
    tax: &TaxPolicy,
) -> YearlyIncomeStats {
    let year = monthly_incomes.first().map(|m| m.year).unwrap_or_default();

    let mut total_gross_income = Decimal::ZERO;
    let mut total_transportation_cost = Decimal::ZERO;
    let mut total_hours = Decimal::ZERO;

    for income in monthly_incomes {
        total_gross_income += income.gross_income;
        total_transportation_cost += income.transportation_cost;
        total_hours += income.total_hours;
    }

    let months_with_data = monthly_incomes.iter().filter(|m| m.shift_count > 0).count();
    let average_monthly_income = if months_with_data > 0 {
        total_gross_income / Decimal::from(months_with_data)
    } else {
        Decimal::ZERO
    };

    let remaining_months = Decimal::from(12u32.saturating_sub(current_month));
    let projected_year_end_income = total_gross_income + average_monthly_income * remaining_months;

    let remaining_to_threshold = (tax.threshold - total_gross_income).max(Decimal::ZERO);

    YearlyIncomeStats {
        year,
        total_gross_income,
        total_transportation_cost,
        total_hours,
        remaining_to_threshold,
        projected_year_end_income,
        is_over_threshold: total_gross_income > tax.threshold,
        will_exceed_threshold: projected_year_end_income > tax.threshold,
        monthly_breakdown: monthly_incomes.to_vec(),
    }
}
