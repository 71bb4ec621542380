//! Per-shift income calculation.
//!
//! Combines the working-hours and night-hours calculations with the shift's
//! snapshotted hourly rate and the configured night-differential multiplier
//! to produce the monetary breakdown for a single shift.

use rust_decimal::Decimal;

use crate::config::Settings;
use crate::error::EngineResult;
use crate::models::Shift;

use super::night_hours::calculate_night_hours;
use super::working_hours::calculate_working_hours;

/// The income breakdown for a single shift.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftIncome {
    /// Pay for the hours outside the night window, at the base rate.
    pub regular_amount: Decimal,
    /// Pay for the hours inside the night window, at the base rate times
    /// the night-differential multiplier.
    pub night_amount: Decimal,
    /// Total gross pay (`regular_amount + night_amount`).
    pub total_amount: Decimal,
    /// Total worked hours.
    pub hours: Decimal,
    /// Worked hours inside the night window.
    pub night_hours: Decimal,
}

/// Calculates the gross income for a single shift.
///
/// Working hours and night hours come from
/// [`calculate_working_hours`](super::calculate_working_hours) and
/// [`calculate_night_hours`](super::calculate_night_hours) using the night
/// window from `settings`; regular hours are the difference. The shift's
/// own `hourly_rate` snapshot is used, so the caller must have resynced the
/// snapshot against the rate history beforehand.
///
/// # Returns
///
/// The [`ShiftIncome`] breakdown, or
/// [`EngineError::InvalidTimeFormat`](crate::error::EngineError::InvalidTimeFormat)
/// when any time string involved is malformed.
///
/// # Examples
///
/// ```
/// use workmate_engine::calculation::calculate_shift_income;
/// use workmate_engine::config::Settings;
/// use workmate_engine::models::Shift;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let settings = Settings::default();
/// let shift = Shift::new(
///     NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     "09:00",
///     "17:00",
///     60,
///     Decimal::new(1000, 0),
/// );
///
/// let income = calculate_shift_income(&shift, &settings).unwrap();
/// assert_eq!(income.total_amount, Decimal::new(7000, 0));
/// assert_eq!(income.night_hours, Decimal::ZERO);
/// ```
pub fn calculate_shift_income(shift: &Shift, settings: &Settings) -> EngineResult<ShiftIncome> {
    let hours = calculate_working_hours(&shift.start_time, &shift.end_time, shift.break_minutes)?;
    let night_hours = calculate_night_hours(
        &shift.start_time,
        &shift.end_time,
        shift.break_minutes,
        &settings.night_shift_start,
        &settings.night_shift_end,
    )?;
    let regular_hours = hours - night_hours;

    let regular_amount = regular_hours * shift.hourly_rate;
    let night_amount = night_hours * shift.hourly_rate * settings.night_shift_multiplier;

    Ok(ShiftIncome {
        regular_amount,
        night_amount,
        total_amount: regular_amount + night_amount,
        hours,
        night_hours,
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

    fn make_shift(start: &str, end: &str, break_minutes: u32, rate: &str) -> Shift {
        Shift::new(
            NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            start,
            end,
            break_minutes,
            dec(rate),
        )
    }

    /// SI-001: day shift, no night hours
    #[test]
    fn test_day_shift_income() {
        let income =
            calculate_shift_income(&make_shift("09:00", "17:00", 60, "1000"), &Settings::default())
                .unwrap();

        assert_eq!(income.hours, dec("7"));
        assert_eq!(income.night_hours, dec("0"));
        assert_eq!(income.regular_amount, dec("7000"));
        assert_eq!(income.night_amount, dec("0"));
        assert_eq!(income.total_amount, dec("7000"));
    }

    /// SI-002: full night shift at the 1.25 multiplier
    #[test]
    fn test_full_night_shift_income() {
        let income =
            calculate_shift_income(&make_shift("22:00", "05:00", 0, "1000"), &Settings::default())
                .unwrap();

        assert_eq!(income.hours, dec("7"));
        assert_eq!(income.night_hours, dec("7"));
        assert_eq!(income.regular_amount, dec("0"));
        // 7h x 1000 x 1.25
        assert_eq!(income.night_amount, dec("8750"));
        assert_eq!(income.total_amount, dec("8750"));
    }

    /// SI-003: evening shift splits into regular and night pay
    #[test]
    fn test_mixed_shift_income() {
        let income =
            calculate_shift_income(&make_shift("18:00", "23:00", 0, "1200"), &Settings::default())
                .unwrap();

        assert_eq!(income.hours, dec("5"));
        assert_eq!(income.night_hours, dec("1"));
        // 4h x 1200 + 1h x 1200 x 1.25
        assert_eq!(income.regular_amount, dec("4800"));
        assert_eq!(income.night_amount, dec("1500"));
        assert_eq!(income.total_amount, dec("6300"));
    }

    /// SI-004: totals are exactly additive
    #[test]
    fn test_totals_additive() {
        let income =
            calculate_shift_income(&make_shift("20:00", "02:00", 30, "1050"), &Settings::default())
                .unwrap();

        assert_eq!(income.total_amount, income.regular_amount + income.night_amount);
        assert!(income.night_hours <= income.hours);
    }

    /// SI-005: zero-rate shift earns nothing but still reports hours
    #[test]
    fn test_zero_rate_shift() {
        let income =
            calculate_shift_income(&make_shift("09:00", "17:00", 60, "0"), &Settings::default())
                .unwrap();

        assert_eq!(income.hours, dec("7"));
        assert_eq!(income.total_amount, dec("0"));
    }

    #[test]
    fn test_custom_multiplier() {
        let settings = Settings {
            night_shift_multiplier: dec("1.5"),
            ..Settings::default()
        };
        let income =
            calculate_shift_income(&make_shift("22:00", "05:00", 0, "1000"), &settings).unwrap();

        assert_eq!(income.total_amount, dec("10500"));
    }

    #[test]
    fn test_malformed_shift_fails_loudly() {
        let shift = make_shift("9am", "17:00", 0, "1000");
        assert!(calculate_shift_income(&shift, &Settings::default()).is_err());
    }
}
