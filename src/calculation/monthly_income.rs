//! Monthly income aggregation.
//!
//! Folds per-shift income results into a [`MonthlyIncome`] summary for a
//! given calendar month.

use chrono::Datelike;
use rust_decimal::Decimal;

use crate::config::Settings;
use crate::error::EngineResult;
use crate::models::{MonthlyIncome, Shift};

use super::shift_income::calculate_shift_income;

/// Calculates the income summary for a calendar month.
///
/// Shifts outside the given year/month are ignored, so callers may pass
/// either a pre-filtered list or a larger range. `transportation_cost` is
/// reported flat from `settings`; it is a monthly allowance, not computed
/// per shift.
///
/// A shift with a malformed time string fails the whole calculation rather
/// than silently contributing zero income, since a hidden failure would
/// misrepresent the user's proximity to the tax threshold.
///
/// # Arguments
///
/// * `shifts` - The shift records to fold
/// * `settings` - The active settings snapshot
/// * `year` - The calendar year
/// * `month` - The calendar month (1-12)
///
/// # Examples
///
/// ```
/// use workmate_engine::calculation::calculate_monthly_income;
/// use workmate_engine::config::Settings;
/// use workmate_engine::models::Shift;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let settings = Settings::default();
/// let shifts = vec![Shift::new(
///     NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     "09:00",
///     "17:00",
///     60,
///     Decimal::new(1000, 0),
/// )];
///
/// let income = calculate_monthly_income(&shifts, &settings, 2026, 3).unwrap();
/// assert_eq!(income.gross_income, Decimal::new(7000, 0));
/// assert_eq!(income.shift_count, 1);
/// ```
pub fn calculate_monthly_income(
    shifts: &[Shift],
    settings: &Settings,
    year: i32,
    month: u32,
) -> EngineResult<MonthlyIncome> {
    let mut total_hours = Decimal::ZERO;
    let mut regular_hours = Decimal::ZERO;
    let mut night_hours = Decimal::ZERO;
    let mut gross_income = Decimal::ZERO;
    let mut shift_count = 0;

    for shift in shifts
        .iter()
        .filter(|s| s.date.year() == year && s.date.month() == month)
    {
        let income = calculate_shift_income(shift, settings)?;
        total_hours += income.hours;
        regular_hours += income.hours - income.night_hours;
        night_hours += income.night_hours;
        gross_income += income.total_amount;
        shift_count += 1;
    }

    Ok(MonthlyIncome {
        year,
        month,
        total_hours,
        regular_hours,
        night_hours,
        gross_income,
        transportation_cost: settings.transportation_cost,
        shift_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_shift(date: &str, start: &str, end: &str, break_minutes: u32, rate: &str) -> Shift {
        Shift::new(
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            start,
            end,
            break_minutes,
            dec(rate),
        )
    }

    /// MI-001: folds several day shifts
    #[test]
    fn test_folds_day_shifts() {
        let shifts = vec![
            make_shift("2026-03-02", "09:00", "17:00", 60, "1000"),
            make_shift("2026-03-09", "09:00", "17:00", 60, "1000"),
            make_shift("2026-03-16", "10:00", "15:00", 0, "1000"),
        ];

        let income =
            calculate_monthly_income(&shifts, &Settings::default(), 2026, 3).unwrap();

        assert_eq!(income.year, 2026);
        assert_eq!(income.month, 3);
        assert_eq!(income.shift_count, 3);
        assert_eq!(income.total_hours, dec("19"));
        assert_eq!(income.regular_hours, dec("19"));
        assert_eq!(income.night_hours, dec("0"));
        assert_eq!(income.gross_income, dec("19000"));
    }

    /// MI-002: night differential flows into the monthly gross
    #[test]
    fn test_night_differential_in_gross() {
        let shifts = vec![
            make_shift("2026-03-06", "22:00", "05:00", 0, "1000"),
            make_shift("2026-03-07", "09:00", "17:00", 60, "1000"),
        ];

        let income =
            calculate_monthly_income(&shifts, &Settings::default(), 2026, 3).unwrap();

        assert_eq!(income.total_hours, dec("14"));
        assert_eq!(income.night_hours, dec("7"));
        assert_eq!(income.regular_hours, dec("7"));
        // 8750 night + 7000 day
        assert_eq!(income.gross_income, dec("15750"));
    }

    /// MI-003: shifts from other months are ignored
    #[test]
    fn test_filters_to_requested_month() {
        let shifts = vec![
            make_shift("2026-02-27", "09:00", "17:00", 60, "1000"),
            make_shift("2026-03-02", "09:00", "17:00", 60, "1000"),
            make_shift("2027-03-02", "09:00", "17:00", 60, "1000"),
        ];

        let income =
            calculate_monthly_income(&shifts, &Settings::default(), 2026, 3).unwrap();

        assert_eq!(income.shift_count, 1);
        assert_eq!(income.gross_income, dec("7000"));
    }

    /// MI-004: transportation cost is flat from settings, even with no shifts
    #[test]
    fn test_transportation_cost_is_flat() {
        let settings = Settings {
            transportation_cost: dec("5000"),
            ..Settings::default()
        };

        let income = calculate_monthly_income(&[], &settings, 2026, 3).unwrap();

        assert_eq!(income.shift_count, 0);
        assert_eq!(income.gross_income, dec("0"));
        assert_eq!(income.transportation_cost, dec("5000"));
    }

    /// MI-005: a malformed shift fails the whole month loudly
    #[test]
    fn test_malformed_shift_fails_month() {
        let shifts = vec![
            make_shift("2026-03-02", "09:00", "17:00", 60, "1000"),
            make_shift("2026-03-03", "nine", "17:00", 60, "1000"),
        ];

        let result = calculate_monthly_income(&shifts, &Settings::default(), 2026, 3);
        assert!(result.is_err());
    }

    /// MI-006: per-shift rate snapshots are honored, not a single live rate
    #[test]
    fn test_uses_per_shift_rate_snapshots() {
        let shifts = vec![
            make_shift("2026-03-02", "09:00", "17:00", 60, "1000"),
            make_shift("2026-03-30", "09:00", "17:00", 60, "1100"),
        ];

        let income =
            calculate_monthly_income(&shifts, &Settings::default(), 2026, 3).unwrap();

        assert_eq!(income.gross_income, dec("14700"));
    }
}
