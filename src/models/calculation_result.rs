//! Calculation result models for the payroll cost engine.
//!
//! This module contains the [`CalculationResult`] type and the nested
//! detail structures that capture every intermediate of a calculation,
//! so downstream consumers (exports, tooltips, audits) never need to
//! recompute anything.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{BenefitScheme, PerceptionItem};

/// Employer-side IMSS contribution lines, one field per line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployerSocialSecurityDetail {
    /// Fixed quota over one reference unit.
    pub fixed_quota: Decimal,
    /// Excess quota over the part of the salary above three reference
    /// units.
    pub excess: Decimal,
    /// Cash benefits line.
    pub cash_benefits: Decimal,
    /// Medical expenses for pensioners line.
    pub medical_pensioners: Decimal,
    /// Disability and life insurance line.
    pub disability_life: Decimal,
    /// Nursery and social benefits line.
    pub nursery: Decimal,
    /// Work-risk premium line.
    pub work_risk: Decimal,
}

/// Employee-side IMSS withholding lines, one field per line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeWithholdingDetail {
    /// Excess quota over the part of the salary above three reference
    /// units.
    pub excess: Decimal,
    /// Cash benefits line.
    pub cash_benefits: Decimal,
    /// Medical expenses for pensioners line.
    pub medical_pensioners: Decimal,
    /// Disability and life insurance line.
    pub disability_life: Decimal,
    /// CEAV line at the fixed employee rate.
    pub old_age: Decimal,
}

/// Every intermediate value behind a [`CalculationResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationDetails {
    /// The integrated daily salary after the statutory cap.
    pub capped_daily_salary: Decimal,
    /// Employer IMSS lines.
    pub employer_social_security: EmployerSocialSecurityDetail,
    /// The CEAV rate selected for the employer, as a percentage.
    pub old_age_rate_pct: Decimal,
    /// Years of service at the calculation date (fractional, negative
    /// when the hire date lies in the future).
    pub years_of_service: Decimal,
    /// Statutory vacation-day entitlement.
    pub vacation_days: u32,
    /// Year-end bonus days under the selected scheme.
    pub year_end_bonus_days: u32,
    /// Vacation premium under the selected scheme, as a fraction.
    pub vacation_premium: Decimal,
    /// The salary integration factor.
    pub integration_factor: Decimal,
    /// Fixed component of the integrated daily salary.
    pub fixed_sdi_component: Decimal,
    /// Variable component of the integrated daily salary.
    pub variable_sdi_component: Decimal,
    /// Monthly total of variable perceptions.
    pub variable_perceptions_total: Decimal,
    /// Withheld income tax after the employment subsidy.
    pub income_tax: Decimal,
    /// The employment subsidy applied against the income tax.
    pub employment_subsidy: Decimal,
    /// Total employee-side IMSS withholding.
    pub employee_withholding: Decimal,
    /// Employee withholding lines.
    pub employee_withholding_detail: EmployeeWithholdingDetail,
}

/// The complete result of one employee's cost and net pay calculation.
///
/// Created fresh per call and never mutated afterwards; all monetary
/// fields are monthly amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The employee identifier from the input row (or a generated
    /// `row-<uuid>` placeholder when the cell was empty).
    pub employee_id: String,
    /// The employee name from the input row, or `"N/A"`.
    pub employee_name: String,
    /// The benefit scheme the calculation used.
    pub benefit_scheme: BenefitScheme,
    /// Monthly base salary plus all other perceptions.
    pub total_perceptions: Decimal,
    /// The monthly base salary the calculation resolved or was given.
    pub monthly_base_salary: Decimal,
    /// Daily base salary (monthly base over the statutory 30 days).
    pub daily_base_salary: Decimal,
    /// The perception items recorded from the row.
    pub perceptions: Vec<PerceptionItem>,
    /// The integrated daily salary before the statutory cap.
    pub integrated_daily_salary: Decimal,
    /// Total employer IMSS contributions.
    pub social_security: Decimal,
    /// Employer retirement contribution.
    pub retirement: Decimal,
    /// Employer CEAV contribution.
    pub old_age: Decimal,
    /// Employer housing fund (INFONAVIT) contribution.
    pub housing_fund: Decimal,
    /// Monthly provision for the year-end bonus.
    pub year_end_bonus_provision: Decimal,
    /// Monthly provision for the vacation premium.
    pub vacation_premium_provision: Decimal,
    /// State payroll tax (ISN).
    pub payroll_tax: Decimal,
    /// Total monthly cost of employment.
    pub total_cost: Decimal,
    /// Total cost divided by the monthly base salary (zero when the base
    /// salary is zero).
    pub cost_factor: Decimal,
    /// Net take-home pay.
    pub net_salary: Decimal,
    /// Every intermediate used to derive the figures above.
    pub details: CalculationDetails,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_result() -> CalculationResult {
        CalculationResult {
            employee_id: "emp_001".to_string(),
            employee_name: "Ana Torres".to_string(),
            benefit_scheme: BenefitScheme::Statutory,
            total_perceptions: dec("15200"),
            monthly_base_salary: dec("15200"),
            daily_base_salary: dec("506.67"),
            perceptions: vec![PerceptionItem {
                name: "Comisiones".to_string(),
                value: dec("1000"),
            }],
            integrated_daily_salary: dec("531.65"),
            social_security: dec("2200.12"),
            retirement: dec("323.24"),
            old_age: dec("606.98"),
            housing_fund: dec("808.11"),
            year_end_bonus_provision: dec("633.33"),
            vacation_premium_provision: dec("126.67"),
            payroll_tax: dec("638.40"),
            total_cost: dec("20536.85"),
            cost_factor: dec("1.3511"),
            net_salary: dec("13002.40"),
            details: CalculationDetails {
                capped_daily_salary: dec("531.65"),
                employer_social_security: EmployerSocialSecurityDetail {
                    fixed_quota: dec("727.48"),
                    excess: dec("60.29"),
                    cash_benefits: dec("113.13"),
                    medical_pensioners: dec("169.70"),
                    disability_life: dec("282.83"),
                    nursery: dec("161.62"),
                    work_risk: dec("685.07"),
                },
                old_age_rate_pct: dec("7.51"),
                years_of_service: Decimal::ZERO,
                vacation_days: 12,
                year_end_bonus_days: 15,
                vacation_premium: dec("0.25"),
                integration_factor: dec("1.0493"),
                fixed_sdi_component: dec("531.65"),
                variable_sdi_component: Decimal::ZERO,
                variable_perceptions_total: Decimal::ZERO,
                income_tax: dec("1294.83"),
                employment_subsidy: Decimal::ZERO,
                employee_withholding: dec("902.77"),
                employee_withholding_detail: EmployeeWithholdingDetail {
                    excess: dec("21.92"),
                    cash_benefits: dec("40.40"),
                    medical_pensioners: dec("60.61"),
                    disability_life: dec("101.01"),
                    old_age: dec("181.83"),
                },
            },
        }
    }

    #[test]
    fn test_result_serialization_round_trip() {
        let result = sample_result();
        let json = serde_json::to_string(&result).unwrap();
        let back: CalculationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }

    #[test]
    fn test_result_serializes_scheme_wire_name() {
        let json = serde_json::to_string(&sample_result()).unwrap();
        assert!(json.contains("\"benefit_scheme\":\"ley\""));
    }

    #[test]
    fn test_decimal_fields_serialize_as_strings() {
        let json = serde_json::to_string(&sample_result()).unwrap();
        assert!(json.contains("\"total_perceptions\":\"15200\""));
        assert!(json.contains("\"cost_factor\":\"1.3511\""));
    }
}
