//! Perception items and their classification.
//!
//! A perception is any recurring payment column in the input row. Its
//! header name decides how it participates in the calculation: salary-like
//! perceptions form the monthly base salary, non-variable perceptions are
//! excluded from the integrated salary's variable component, and anything
//! else counts as variable compensation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Header names recognized as base-salary columns (case-insensitive).
const SALARY_LIKE_NAMES: [&str; 6] = [
    "sueldo",
    "salario",
    "sueldo mensual",
    "sueldo base",
    "sueldo ordinario",
    "vacaciones a tiempo",
];

/// Header names of fixed perceptions that never enter the variable
/// component of the integrated salary (case-insensitive).
const NON_VARIABLE_NAMES: [&str; 6] = [
    "seguro gmm",
    "seguro de vida",
    "seguro vida",
    "despensa",
    "horas extras",
    "pasivo laboral",
];

/// A named perception amount taken from the input row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerceptionItem {
    /// The column header this perception came from.
    pub name: String,
    /// The perception amount; only strictly positive amounts are recorded.
    pub value: Decimal,
}

/// How a perception participates in the calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerceptionClass {
    /// Contributes to the monthly base salary.
    SalaryLike,
    /// Fixed compensation, excluded from the variable SDI component.
    NonVariable,
    /// Variable compensation, included in the variable SDI component.
    Variable,
}

/// Classifies a perception by its header name.
///
/// Matching is case-insensitive against two fixed name sets; an unknown
/// or missing header classifies as [`PerceptionClass::Variable`].
///
/// # Examples
///
/// ```
/// use nomina_engine::models::{classify_perception, PerceptionClass};
///
/// assert_eq!(classify_perception("Sueldo Base"), PerceptionClass::SalaryLike);
/// assert_eq!(classify_perception("Despensa"), PerceptionClass::NonVariable);
/// assert_eq!(classify_perception("Comisiones"), PerceptionClass::Variable);
/// ```
pub fn classify_perception(name: &str) -> PerceptionClass {
    let normalized = name.trim().to_lowercase();
    if SALARY_LIKE_NAMES.contains(&normalized.as_str()) {
        PerceptionClass::SalaryLike
    } else if NON_VARIABLE_NAMES.contains(&normalized.as_str()) {
        PerceptionClass::NonVariable
    } else {
        PerceptionClass::Variable
    }
}
