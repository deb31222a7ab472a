//! Request types for the payroll cost engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::CalculationConfig;
use crate::models::{BenefitScheme, Cell, ColumnMapping, EmployeeRow};

/// Request body for the `/calculate` endpoint.
///
/// Carries one employee row plus everything needed to interpret it. When
/// `desired_net_salary` is present the engine runs in inverse mode and
/// solves for the gross base salary; otherwise it runs the forward
/// calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The ordered cell values of the row.
    pub row: Vec<Cell>,
    /// Column headers, aligned with the row.
    pub headers: Vec<String>,
    /// Column indices locating each field in the row.
    pub column_mapping: ColumnMappingRequest,
    /// Calculation configuration values.
    pub config: CalculationConfigRequest,
    /// The benefit scheme to apply.
    pub benefit_scheme: BenefitScheme,
    /// The date to run the calculation for.
    pub calculation_date: NaiveDate,
    /// Optional desired net salary; selects inverse mode.
    #[serde(default)]
    pub desired_net_salary: Option<Decimal>,
}

/// Column mapping in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnMappingRequest {
    /// Index of the employee identifier column.
    pub employee_id_col: usize,
    /// Index of the employee name column.
    pub employee_name_col: usize,
    /// Index of the hire date column.
    pub hire_date_col: usize,
    /// Index of the daily salary column.
    pub daily_salary_col: usize,
    /// Indices of the perception columns.
    #[serde(default)]
    pub perception_columns: Vec<usize>,
}

/// Calculation configuration in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationConfigRequest {
    /// The daily value of the reference unit (UMA).
    pub reference_unit: Decimal,
    /// The employer's work-risk premium, as a percentage.
    pub work_risk_rate_pct: Decimal,
    /// The state payroll tax (ISN) rate, as a percentage.
    pub payroll_tax_rate_pct: Decimal,
}

impl From<ColumnMappingRequest> for ColumnMapping {
    fn from(req: ColumnMappingRequest) -> Self {
        ColumnMapping {
            employee_id_col: req.employee_id_col,
            employee_name_col: req.employee_name_col,
            hire_date_col: req.hire_date_col,
            daily_salary_col: req.daily_salary_col,
            perception_columns: req.perception_columns,
        }
    }
}

impl From<CalculationConfigRequest> for CalculationConfig {
    fn from(req: CalculationConfigRequest) -> Self {
        CalculationConfig {
            reference_unit: req.reference_unit,
            work_risk_rate_pct: req.work_risk_rate_pct,
            payroll_tax_rate_pct: req.payroll_tax_rate_pct,
        }
    }
}

impl CalculationRequest {
    /// Builds the row model from the request cells.
    pub fn row(&self) -> EmployeeRow {
        EmployeeRow::new(self.row.clone())
    }
}
