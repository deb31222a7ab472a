//! Core data models for the payroll cost engine.
//!
//! This module contains all the domain models used throughout the engine.

mod benefit_scheme;
mod calculation_result;
mod perception;
mod row;

pub use benefit_scheme::BenefitScheme;
pub use calculation_result::{
    CalculationDetails, CalculationResult, EmployeeWithholdingDetail, EmployerSocialSecurityDetail,
};
pub use perception::{classify_perception, PerceptionClass, PerceptionItem};
pub use row::{Cell, ColumnMapping, EmployeeRow};
