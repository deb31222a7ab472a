//! Employee-side social security withholding.
//!
//! The employee's five IMSS lines mirror the employer's excess and
//! percentage lines but at the fixed employee rates; the CEAV line in
//! particular is a flat rate rather than the employer's bracketed one.

use rust_decimal::Decimal;

use crate::config::StatutoryTables;
use crate::models::EmployeeWithholdingDetail;

use super::integrated_salary::average_month_days;

/// The employee IMSS withholding and its line detail.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeWithholding {
    /// Total withheld.
    pub total: Decimal,
    /// The individual withholding lines.
    pub detail: EmployeeWithholdingDetail,
}

/// Computes the employee-side IMSS withholding over the capped
/// integrated salary.
pub fn calculate_employee_withholding(
    tables: &StatutoryTables,
    reference_unit: Decimal,
    capped_daily_salary: Decimal,
) -> EmployeeWithholding {
    let hundred = Decimal::ONE_HUNDRED;
    let month = average_month_days();
    let rates = &tables.social_security.employee;

    let excess_threshold = reference_unit * Decimal::from(3);
    let excess = if capped_daily_salary > excess_threshold {
        (capped_daily_salary - excess_threshold) * (rates.excess_pct / hundred) * month
    } else {
        Decimal::ZERO
    };
    let cash_benefits = capped_daily_salary * (rates.cash_benefits_pct / hundred) * month;
    let medical_pensioners =
        capped_daily_salary * (rates.medical_pensioners_pct / hundred) * month;
    let disability_life = capped_daily_salary * (rates.disability_life_pct / hundred) * month;
    let old_age = capped_daily_salary * (rates.old_age_pct / hundred) * month;

    EmployeeWithholding {
        total: excess + cash_benefits + medical_pensioners + disability_life + old_age,
        detail: EmployeeWithholdingDetail {
            excess,
            cash_benefits,
            medical_pensioners,
            disability_life,
            old_age,
        },
    }
}
