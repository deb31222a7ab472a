//! Employer-side cost calculation.
//!
//! Applies the employer contribution lines (IMSS, retirement, CEAV,
//! INFONAVIT), the monthly benefit provisions and the state payroll tax
//! to produce the total monthly cost of employment and the cost factor.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::config::{CalculationConfig, StatutoryTables};
use crate::models::EmployerSocialSecurityDetail;

use super::integrated_salary::{average_month_days, IntegratedSalary};
use super::seniority::SeniorityProfile;

/// The employer cost lines for one employee.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployerCost {
    /// Total employer IMSS contributions.
    pub social_security: Decimal,
    /// The individual IMSS lines.
    pub social_security_detail: EmployerSocialSecurityDetail,
    /// Retirement contribution.
    pub retirement: Decimal,
    /// CEAV contribution at the bracketed rate.
    pub old_age: Decimal,
    /// The CEAV rate that was selected, as a percentage.
    pub old_age_rate_pct: Decimal,
    /// Housing fund (INFONAVIT) contribution.
    pub housing_fund: Decimal,
    /// Monthly provision for the year-end bonus.
    pub year_end_bonus_provision: Decimal,
    /// Monthly provision for the vacation premium.
    pub vacation_premium_provision: Decimal,
    /// State payroll tax over perceptions plus provisions.
    pub payroll_tax: Decimal,
    /// Total monthly cost of employment.
    pub total_cost: Decimal,
    /// Total cost over the monthly base salary; zero when the base is
    /// zero.
    pub cost_factor: Decimal,
}

/// Computes every employer-side cost line.
///
/// Contribution lines are `rate% × base × 30.4` where the base is the
/// reference unit (fixed quota), the excess of the capped integrated
/// salary over three reference units (excess line), or the capped
/// integrated salary itself (all remaining lines). The CEAV bracket is
/// selected with the *uncapped* integrated salary; the resulting rate is
/// applied to the capped one.
#[allow(clippy::too_many_arguments)]
pub fn calculate_employer_cost(
    tables: &StatutoryTables,
    config: &CalculationConfig,
    salary: &IntegratedSalary,
    profile: &SeniorityProfile,
    daily_base_salary: Decimal,
    monthly_base_salary: Decimal,
    total_perceptions: Decimal,
    calculation_date: NaiveDate,
) -> EmployerCost {
    let hundred = Decimal::ONE_HUNDRED;
    let month = average_month_days();
    let reference_unit = config.reference_unit;
    let contribution_base = salary.capped;
    let rates = &tables.social_security.employer;

    let fixed_quota = reference_unit * (rates.fixed_quota_pct / hundred) * month;
    let excess_threshold = reference_unit * Decimal::from(3);
    let excess = if contribution_base > excess_threshold {
        (contribution_base - excess_threshold) * (rates.excess_pct / hundred) * month
    } else {
        Decimal::ZERO
    };
    let cash_benefits = contribution_base * (rates.cash_benefits_pct / hundred) * month;
    let medical_pensioners = contribution_base * (rates.medical_pensioners_pct / hundred) * month;
    let disability_life = contribution_base * (rates.disability_life_pct / hundred) * month;
    let nursery = contribution_base * (rates.nursery_pct / hundred) * month;
    let work_risk = contribution_base * (config.work_risk_rate_pct / hundred) * month;

    let social_security = fixed_quota
        + excess
        + cash_benefits
        + medical_pensioners
        + disability_life
        + nursery
        + work_risk;

    let retirement = contribution_base * (rates.retirement_pct / hundred) * month;

    let old_age_rate_pct =
        tables.old_age_rate_pct(salary.uncapped / reference_unit, calculation_date.year());
    let old_age = contribution_base * (old_age_rate_pct / hundred) * month;

    let housing_fund = contribution_base * (tables.housing_fund_rate_pct / hundred) * month;

    let twelve = Decimal::from(12);
    let year_end_bonus_provision =
        Decimal::from(profile.year_end_bonus_days) * daily_base_salary / twelve;
    let vacation_premium_provision =
        daily_base_salary * Decimal::from(profile.vacation_days) / twelve
            * profile.vacation_premium;

    let payroll_tax = (total_perceptions + year_end_bonus_provision + vacation_premium_provision)
        * (config.payroll_tax_rate_pct / hundred);

    let total_cost = total_perceptions
        + social_security
        + retirement
        + old_age
        + housing_fund
        + payroll_tax
        + year_end_bonus_provision
        + vacation_premium_provision;

    let cost_factor = if monthly_base_salary > Decimal::ZERO {
        total_cost / monthly_base_salary
    } else {
        Decimal::ZERO
    };

    EmployerCost {
        social_security,
        social_security_detail: EmployerSocialSecurityDetail {
            fixed_quota,
            excess,
            cash_benefits,
            medical_pensioners,
            disability_life,
            nursery,
            work_risk,
        },
        retirement,
        old_age,
        old_age_rate_pct,
        housing_fund,
        year_end_bonus_provision,
        vacation_premium_provision,
        payroll_tax,
        total_cost,
        cost_factor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate_integrated_salary;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn statutory_profile() -> SeniorityProfile {
        SeniorityProfile {
            years_of_service: Decimal::ZERO,
            vacation_days: 12,
            year_end_bonus_days: 15,
            vacation_premium: dec("0.25"),
        }
    }

    fn config() -> CalculationConfig {
        CalculationConfig::mexico_2026_defaults()
    }

    fn cost_for_daily_base(daily_base: Decimal) -> EmployerCost {
        let tables = StatutoryTables::mexico_2026();
        let config = config();
        let profile = statutory_profile();
        let salary = calculate_integrated_salary(
            daily_base,
            &[],
            &profile,
            tables.sdi_cap(config.reference_unit),
        );
        let monthly_base = daily_base * Decimal::from(30);

        calculate_employer_cost(
            &tables,
            &config,
            &salary,
            &profile,
            daily_base,
            monthly_base,
            monthly_base,
            date(2026, 6, 15),
        )
    }

    #[test]
    fn test_fixed_quota_is_independent_of_salary() {
        let low = cost_for_daily_base(dec("300"));
        let high = cost_for_daily_base(dec("900"));

        // 117.31 * 20.40% * 30.4
        let expected = dec("117.31") * dec("0.2040") * dec("30.4");
        assert_eq!(low.social_security_detail.fixed_quota, expected);
        assert_eq!(high.social_security_detail.fixed_quota, expected);
    }

    #[test]
    fn test_excess_line_zero_at_or_below_three_units() {
        // Daily base chosen so the integrated salary lands under 3 UMA
        // (351.93).
        let cost = cost_for_daily_base(dec("300"));
        assert_eq!(cost.social_security_detail.excess, Decimal::ZERO);
    }

    #[test]
    fn test_excess_line_positive_above_three_units() {
        let cost = cost_for_daily_base(dec("900"));
        assert!(cost.social_security_detail.excess > Decimal::ZERO);
    }

    #[test]
    fn test_percentage_lines_use_capped_salary() {
        let tables = StatutoryTables::mexico_2026();
        let cfg = config();
        let profile = statutory_profile();
        // Far above the cap.
        let salary = calculate_integrated_salary(
            dec("50000"),
            &[],
            &profile,
            tables.sdi_cap(cfg.reference_unit),
        );
        let cost = calculate_employer_cost(
            &tables,
            &cfg,
            &salary,
            &profile,
            dec("50000"),
            dec("1500000"),
            dec("1500000"),
            date(2026, 6, 15),
        );

        let cap = dec("2932.75");
        assert_eq!(
            cost.social_security_detail.cash_benefits,
            cap * dec("0.0070") * dec("30.4")
        );
        assert_eq!(cost.retirement, cap * dec("0.02") * dec("30.4"));
        assert_eq!(cost.housing_fund, cap * dec("0.05") * dec("30.4"));
    }

    #[test]
    fn test_old_age_bracket_selected_with_uncapped_salary() {
        let tables = StatutoryTables::mexico_2026();
        let cfg = config();
        let profile = statutory_profile();
        let salary = calculate_integrated_salary(
            dec("50000"),
            &[],
            &profile,
            tables.sdi_cap(cfg.reference_unit),
        );

        // Uncapped salary sits far above 4.01 UMA, so the top bracket's
        // 2026 rate applies even though the contribution base is capped.
        let cost = calculate_employer_cost(
            &tables,
            &cfg,
            &salary,
            &profile,
            dec("50000"),
            dec("1500000"),
            dec("1500000"),
            date(2026, 6, 15),
        );
        assert_eq!(cost.old_age_rate_pct, dec("7.51"));
        assert_eq!(cost.old_age, dec("2932.75") * dec("0.0751") * dec("30.4"));
    }

    #[test]
    fn test_old_age_year_clamped_outside_table_range() {
        let tables = StatutoryTables::mexico_2026();
        let cfg = config();
        let profile = statutory_profile();
        let salary = calculate_integrated_salary(
            dec("500"),
            &[],
            &profile,
            tables.sdi_cap(cfg.reference_unit),
        );

        let before = calculate_employer_cost(
            &tables, &cfg, &salary, &profile, dec("500"), dec("15000"), dec("15000"),
            date(2021, 6, 15),
        );
        let after = calculate_employer_cost(
            &tables, &cfg, &salary, &profile, dec("500"), dec("15000"), dec("15000"),
            date(2035, 6, 15),
        );

        // 524.66 daily ≈ 4.47 UMA: top bracket, clamped to 2023 and 2030.
        assert_eq!(before.old_age_rate_pct, dec("4.24"));
        assert_eq!(after.old_age_rate_pct, dec("11.88"));
    }

    #[test]
    fn test_provisions() {
        let cost = cost_for_daily_base(dec("500"));

        // (15 × 500) / 12 and ((500 × 12) / 12) × 0.25
        assert_eq!(cost.year_end_bonus_provision, dec("625"));
        assert_eq!(cost.vacation_premium_provision, dec("125"));
    }

    #[test]
    fn test_payroll_tax_covers_perceptions_and_provisions() {
        let cost = cost_for_daily_base(dec("500"));

        let expected = (dec("15000") + dec("625") + dec("125")) * dec("0.04");
        assert_eq!(cost.payroll_tax, expected);
    }

    #[test]
    fn test_total_cost_sums_every_line() {
        let cost = cost_for_daily_base(dec("500"));

        let expected = dec("15000")
            + cost.social_security
            + cost.retirement
            + cost.old_age
            + cost.housing_fund
            + cost.payroll_tax
            + cost.year_end_bonus_provision
            + cost.vacation_premium_provision;
        assert_eq!(cost.total_cost, expected);
    }

    #[test]
    fn test_cost_factor_zero_for_zero_base() {
        let tables = StatutoryTables::mexico_2026();
        let cfg = config();
        let profile = statutory_profile();
        let salary = calculate_integrated_salary(
            Decimal::ZERO,
            &[],
            &profile,
            tables.sdi_cap(cfg.reference_unit),
        );

        let cost = calculate_employer_cost(
            &tables,
            &cfg,
            &salary,
            &profile,
            Decimal::ZERO,
            Decimal::ZERO,
            dec("2000"),
            date(2026, 6, 15),
        );
        assert_eq!(cost.cost_factor, Decimal::ZERO);
    }

    #[test]
    fn test_cost_factor_above_one_for_plain_salary() {
        let cost = cost_for_daily_base(dec("500"));
        assert!(cost.cost_factor > Decimal::ONE);
    }
}
