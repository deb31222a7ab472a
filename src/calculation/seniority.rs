//! Seniority and benefit entitlement calculation.
//!
//! Years of service drive three entitlements: the statutory vacation-day
//! schedule, and the scheme-specific year-end bonus days and vacation
//! premium.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::BenefitScheme;

/// The average length of a service year in days, accounting for leap
/// years.
pub fn days_per_service_year() -> Decimal {
    Decimal::new(36_525, 2)
}

/// The seniority-dependent entitlements of one employee at one date.
#[derive(Debug, Clone, PartialEq)]
pub struct SeniorityProfile {
    /// Fractional years of service; negative when the hire date lies
    /// after the calculation date.
    pub years_of_service: Decimal,
    /// Statutory vacation-day entitlement.
    pub vacation_days: u32,
    /// Year-end bonus days under the selected scheme.
    pub year_end_bonus_days: u32,
    /// Vacation premium under the selected scheme, as a fraction.
    pub vacation_premium: Decimal,
}

/// Fractional years of service between hire date and calculation date.
pub fn years_of_service(hire_date: NaiveDate, calculation_date: NaiveDate) -> Decimal {
    let elapsed_days = calculation_date.signed_duration_since(hire_date).num_days();
    Decimal::from(elapsed_days) / days_per_service_year()
}

/// Statutory vacation-day entitlement for the given years of service.
///
/// The current year of service is `floor(years) + 1`. The schedule grants
/// 12, 14, 16, 18 and 20 days over the first five years, then two more
/// days for every further five-year block.
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::vacation_days_for_seniority;
/// use rust_decimal::Decimal;
///
/// assert_eq!(vacation_days_for_seniority(Decimal::ZERO), 12);
/// assert_eq!(vacation_days_for_seniority(Decimal::from(4)), 20);
/// assert_eq!(vacation_days_for_seniority(Decimal::from(5)), 22);
/// assert_eq!(vacation_days_for_seniority(Decimal::from(11)), 24);
/// ```
pub fn vacation_days_for_seniority(years_of_service: Decimal) -> u32 {
    if years_of_service < Decimal::ZERO {
        return 0;
    }
    let current_year = years_of_service.floor().to_i64().unwrap_or(0) + 1;
    if current_year <= 5 {
        (10 + current_year * 2) as u32
    } else {
        (20 + ((current_year - 1) / 5) * 2) as u32
    }
}

/// Computes the full seniority profile for an employee.
pub fn assess_seniority(
    hire_date: NaiveDate,
    calculation_date: NaiveDate,
    scheme: BenefitScheme,
) -> SeniorityProfile {
    let years = years_of_service(hire_date, calculation_date);
    SeniorityProfile {
        years_of_service: years,
        vacation_days: vacation_days_for_seniority(years),
        year_end_bonus_days: scheme.year_end_bonus_days(years),
        vacation_premium: scheme.vacation_premium(years),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_zero_years_on_hire_day() {
        assert_eq!(years_of_service(date(2026, 2, 1), date(2026, 2, 1)), Decimal::ZERO);
    }

    #[test]
    fn test_years_of_service_uses_average_year_length() {
        // Exactly 365.25 elapsed days is not representable with whole
        // dates; 1461 days (four years including one leap day) is.
        let years = years_of_service(date(2022, 2, 1), date(2026, 2, 1));
        assert_eq!(years, Decimal::from(1461) / dec("365.25"));
        assert_eq!(years.round_dp(6), dec("4.000000"));
    }

    #[test]
    fn test_future_hire_date_gives_negative_years() {
        let years = years_of_service(date(2027, 1, 1), date(2026, 1, 1));
        assert!(years < Decimal::ZERO);
    }

    /// First five years of service earn 12, 14, 16, 18 and 20 days.
    #[test]
    fn test_vacation_schedule_first_five_years() {
        assert_eq!(vacation_days_for_seniority(dec("0")), 12);
        assert_eq!(vacation_days_for_seniority(dec("0.99")), 12);
        assert_eq!(vacation_days_for_seniority(dec("1")), 14);
        assert_eq!(vacation_days_for_seniority(dec("2.5")), 16);
        assert_eq!(vacation_days_for_seniority(dec("3")), 18);
        assert_eq!(vacation_days_for_seniority(dec("4.9")), 20);
    }

    /// After year five the entitlement grows two days per five-year block.
    #[test]
    fn test_vacation_schedule_five_year_blocks() {
        assert_eq!(vacation_days_for_seniority(dec("5")), 22);
        assert_eq!(vacation_days_for_seniority(dec("9.9")), 22);
        assert_eq!(vacation_days_for_seniority(dec("10")), 24);
        assert_eq!(vacation_days_for_seniority(dec("14.5")), 24);
        assert_eq!(vacation_days_for_seniority(dec("15")), 26);
        assert_eq!(vacation_days_for_seniority(dec("24.9")), 28);
    }

    #[test]
    fn test_negative_years_earn_no_vacation() {
        assert_eq!(vacation_days_for_seniority(dec("-0.5")), 0);
    }

    #[test]
    fn test_assess_seniority_statutory_scheme() {
        let profile = assess_seniority(date(2026, 2, 1), date(2026, 2, 1), BenefitScheme::Statutory);

        assert_eq!(profile.years_of_service, Decimal::ZERO);
        assert_eq!(profile.vacation_days, 12);
        assert_eq!(profile.year_end_bonus_days, 15);
        assert_eq!(profile.vacation_premium, dec("0.25"));
    }

    #[test]
    fn test_assess_seniority_managers_scheme_ramps() {
        let profile = assess_seniority(date(2020, 1, 1), date(2026, 2, 1), BenefitScheme::Managers);

        assert!(profile.years_of_service > Decimal::from(6));
        assert_eq!(profile.vacation_days, 22);
        assert_eq!(profile.year_end_bonus_days, 32);
        assert_eq!(profile.vacation_premium, dec("0.40"));
    }
}
