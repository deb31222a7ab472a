//! Integrated daily salary (SDI) calculation.
//!
//! The SDI is the daily wage figure, inclusive of statutory benefit
//! amortization, that all social security contribution math runs on. It
//! has a fixed component (the daily base salary times the integration
//! factor) and a variable component (variable perceptions spread over the
//! average month), and is capped at a statutory multiple of the reference
//! unit.

use rust_decimal::Decimal;

use crate::models::{classify_perception, PerceptionClass, PerceptionItem};

use super::seniority::SeniorityProfile;

/// The statutory average month length used to monthlyize daily figures.
pub fn average_month_days() -> Decimal {
    Decimal::new(304, 1)
}

/// The statutory month length used to derive the daily base salary from
/// the monthly base.
///
/// Note the asymmetry with [`average_month_days`]: the monthly base is
/// built at 30.4 days but reconverted to a daily wage at 30, as the
/// source rule set prescribes.
pub fn statutory_month_days() -> Decimal {
    Decimal::from(30)
}

/// The year length used to amortize annual benefits into the integration
/// factor.
pub fn benefit_year_days() -> Decimal {
    Decimal::from(365)
}

/// The integrated daily salary and every component behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegratedSalary {
    /// The salary integration factor.
    pub integration_factor: Decimal,
    /// Fixed component: daily base salary times the integration factor.
    pub fixed_component: Decimal,
    /// Variable component: variable perceptions over the average month.
    pub variable_component: Decimal,
    /// Monthly total of variable perceptions.
    pub variable_perceptions_total: Decimal,
    /// The integrated daily salary before the cap.
    pub uncapped: Decimal,
    /// The integrated daily salary after the cap; all contribution math
    /// uses this value.
    pub capped: Decimal,
}

/// Computes the salary integration factor.
///
/// `1 + bonusDays/365 + (vacationDays × premium)/365`.
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::integration_factor;
/// use rust_decimal::Decimal;
///
/// // 15 bonus days and 12 vacation days at a 25% premium: 1 + 18/365.
/// let factor = integration_factor(15, 12, Decimal::new(25, 2));
/// assert_eq!(factor.round_dp(5), Decimal::new(104_932, 5));
/// ```
pub fn integration_factor(
    year_end_bonus_days: u32,
    vacation_days: u32,
    vacation_premium: Decimal,
) -> Decimal {
    Decimal::ONE
        + Decimal::from(year_end_bonus_days) / benefit_year_days()
        + Decimal::from(vacation_days) * vacation_premium / benefit_year_days()
}

/// Computes the integrated daily salary from its parts.
///
/// # Arguments
///
/// * `daily_base_salary` - The daily base wage (monthly base over 30)
/// * `perceptions` - The recorded perception items; only those classified
///   variable enter the variable component
/// * `profile` - The employee's seniority entitlements
/// * `cap` - The statutory cap (25 reference units for the shipped tables)
pub fn calculate_integrated_salary(
    daily_base_salary: Decimal,
    perceptions: &[PerceptionItem],
    profile: &SeniorityProfile,
    cap: Decimal,
) -> IntegratedSalary {
    let factor = integration_factor(
        profile.year_end_bonus_days,
        profile.vacation_days,
        profile.vacation_premium,
    );

    let variable_perceptions_total: Decimal = perceptions
        .iter()
        .filter(|item| classify_perception(&item.name) == PerceptionClass::Variable)
        .map(|item| item.value)
        .sum();

    let fixed_component = daily_base_salary * factor;
    let variable_component = variable_perceptions_total / average_month_days();
    let uncapped = fixed_component + variable_component;

    IntegratedSalary {
        integration_factor: factor,
        fixed_component,
        variable_component,
        variable_perceptions_total,
        uncapped,
        capped: uncapped.min(cap),
    }
}
