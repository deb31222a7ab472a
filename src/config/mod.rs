//! Statutory tables and calculation configuration.
//!
//! The engine never reads ambient global state: every statutory value it
//! uses (tax brackets, contribution rates, caps, subsidy rules) lives in a
//! [`StatutoryTables`] value that callers inject into each calculation.
//! Tables can come from the built-in data set, from YAML files via
//! [`TablesLoader`], or be constructed programmatically.

mod defaults;
mod loader;
mod types;

pub use loader::TablesLoader;
pub use types::{
    CalculationConfig, EmployeeRates, EmployerRates, IncomeTaxBracket, OldAgeBracket,
    SocialSecurityRates, StatutoryTables, SubsidyRule,
};
