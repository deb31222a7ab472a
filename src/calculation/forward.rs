//! The forward calculation orchestrator.
//!
//! Resolves the input row into a base salary and perception set, composes
//! the seniority, integrated salary, employer cost and net pay modules,
//! and assembles one [`CalculationResult`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::{CalculationConfig, StatutoryTables};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    classify_perception, BenefitScheme, CalculationDetails, CalculationResult, ColumnMapping,
    EmployeeRow, PerceptionClass, PerceptionItem,
};

use super::employee_net::calculate_employee_withholding;
use super::employer_cost::calculate_employer_cost;
use super::income_tax::calculate_income_tax;
use super::integrated_salary::{average_month_days, calculate_integrated_salary, statutory_month_days};
use super::parsing::{parse_amount, parse_hire_date};
use super::seniority::assess_seniority;

/// Everything one calculation needs, borrowed from the caller.
///
/// The row, mapping, headers, configuration and statutory tables are all
/// read-only; a calculation never mutates shared state, so callers may
/// run many rows concurrently against the same tables.
#[derive(Debug, Clone, Copy)]
pub struct CalculationInput<'a> {
    /// The employee's input row.
    pub row: &'a EmployeeRow,
    /// Column indices into the row.
    pub mapping: &'a ColumnMapping,
    /// Column headers, aligned with the row's cells.
    pub headers: &'a [String],
    /// Caller configuration (reference unit, work risk, payroll tax).
    pub config: &'a CalculationConfig,
    /// The benefit scheme to apply.
    pub scheme: BenefitScheme,
    /// The date the calculation is run for.
    pub calculation_date: NaiveDate,
}

/// Runs the forward calculation for one row.
///
/// # Errors
///
/// Returns an error when the hire date cannot be parsed under any
/// heuristic, when the resolved monthly base salary is negative, or when
/// the row carries no positive earnings at all. Callers processing many
/// rows are expected to filter failed rows out; every other input defect
/// degrades to zero instead of failing.
pub fn calculate_forward(
    input: &CalculationInput<'_>,
    tables: &StatutoryTables,
) -> EngineResult<CalculationResult> {
    calculate_with_base_override(input, tables, None)
}

/// The forward calculation with an optional gross-base override.
///
/// The override replaces the row's own base salary (whether that came
/// from salary-like perception columns or the daily salary cell); the
/// inverse solver drives this entry with trial values.
pub(crate) fn calculate_with_base_override(
    input: &CalculationInput<'_>,
    tables: &StatutoryTables,
    base_override: Option<Decimal>,
) -> EngineResult<CalculationResult> {
    let row = input.row;
    let mapping = input.mapping;
    let config = input.config;

    let employee_id = match row.cell(mapping.employee_id_col) {
        Some(cell) if !cell.is_empty() => cell.as_text(),
        _ => format!("row-{}", Uuid::new_v4()),
    };
    let employee_name = match row.cell(mapping.employee_name_col) {
        Some(cell) if !cell.is_empty() => cell.as_text(),
        _ => "N/A".to_string(),
    };

    let hire_date_raw = row
        .cell(mapping.hire_date_col)
        .map(|cell| cell.as_text())
        .unwrap_or_default();
    let hire_date = parse_hire_date(&hire_date_raw)
        .ok_or(EngineError::InvalidHireDate { raw: hire_date_raw })?;

    let raw_daily_salary = row
        .cell(mapping.daily_salary_col)
        .map(parse_amount)
        .unwrap_or(Decimal::ZERO);
    let monthly_base_from_daily = raw_daily_salary * average_month_days();

    let mut perceptions: Vec<PerceptionItem> = Vec::new();
    let mut salary_column_total = Decimal::ZERO;
    let mut other_perceptions_total = Decimal::ZERO;
    for &column in &mapping.perception_columns {
        let Some(cell) = row.cell(column) else {
            continue;
        };
        let value = parse_amount(cell);
        if value <= Decimal::ZERO {
            continue;
        }
        let name = input.headers.get(column).cloned().unwrap_or_default();
        if classify_perception(&name) == PerceptionClass::SalaryLike {
            salary_column_total += value;
        } else {
            other_perceptions_total += value;
        }
        perceptions.push(PerceptionItem { name, value });
    }

    // Salary-like perception columns, when present, define the monthly
    // base; the daily salary cell only matters without them.
    let has_salary_column = salary_column_total > Decimal::ZERO;
    let monthly_base_salary = base_override.unwrap_or(if has_salary_column {
        salary_column_total
    } else {
        monthly_base_from_daily
    });

    if monthly_base_salary < Decimal::ZERO {
        return Err(EngineError::NegativeBaseSalary {
            amount: monthly_base_salary,
        });
    }

    let daily_base_salary = monthly_base_salary / statutory_month_days();
    let total_perceptions = monthly_base_salary + other_perceptions_total;

    // Under an override the salary-like items are superseded by the
    // override value; drop them from the reported detail.
    if base_override.is_some() {
        perceptions.retain(|item| classify_perception(&item.name) != PerceptionClass::SalaryLike);
    }

    if total_perceptions <= Decimal::ZERO && monthly_base_salary <= Decimal::ZERO {
        return Err(EngineError::NoEarnings);
    }

    let profile = assess_seniority(hire_date, input.calculation_date, input.scheme);
    let salary = calculate_integrated_salary(
        daily_base_salary,
        &perceptions,
        &profile,
        tables.sdi_cap(config.reference_unit),
    );
    let employer = calculate_employer_cost(
        tables,
        config,
        &salary,
        &profile,
        daily_base_salary,
        monthly_base_salary,
        total_perceptions,
        input.calculation_date,
    );
    let income_tax = calculate_income_tax(
        tables,
        config.reference_unit,
        total_perceptions,
        input.calculation_date,
    );
    let withholding =
        calculate_employee_withholding(tables, config.reference_unit, salary.capped);
    let net_salary = total_perceptions - income_tax.withheld - withholding.total;

    Ok(CalculationResult {
        employee_id,
        employee_name,
        benefit_scheme: input.scheme,
        total_perceptions,
        monthly_base_salary,
        daily_base_salary,
        perceptions,
        integrated_daily_salary: salary.uncapped,
        social_security: employer.social_security,
        retirement: employer.retirement,
        old_age: employer.old_age,
        housing_fund: employer.housing_fund,
        year_end_bonus_provision: employer.year_end_bonus_provision,
        vacation_premium_provision: employer.vacation_premium_provision,
        payroll_tax: employer.payroll_tax,
        total_cost: employer.total_cost,
        cost_factor: employer.cost_factor,
        net_salary,
        details: CalculationDetails {
            capped_daily_salary: salary.capped,
            employer_social_security: employer.social_security_detail,
            old_age_rate_pct: employer.old_age_rate_pct,
            years_of_service: profile.years_of_service,
            vacation_days: profile.vacation_days,
            year_end_bonus_days: profile.year_end_bonus_days,
            vacation_premium: profile.vacation_premium,
            integration_factor: salary.integration_factor,
            fixed_sdi_component: salary.fixed_component,
            variable_sdi_component: salary.variable_component,
            variable_perceptions_total: salary.variable_perceptions_total,
            income_tax: income_tax.withheld,
            employment_subsidy: income_tax.subsidy,
            employee_withholding: withholding.total,
            employee_withholding_detail: withholding.detail,
        },
    })
}
