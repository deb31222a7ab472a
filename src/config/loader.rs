//! Statutory table loading functionality.
//!
//! This module provides the [`TablesLoader`] type for loading the
//! statutory tables from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

use super::types::{IncomeTaxBracket, OldAgeBracket, SocialSecurityRates, StatutoryTables, SubsidyRule};

/// Top-level structure of `income_tax.yaml`.
#[derive(Debug, Deserialize)]
struct IncomeTaxFile {
    brackets: Vec<IncomeTaxBracket>,
}

/// Top-level structure of `old_age.yaml`.
#[derive(Debug, Deserialize)]
struct OldAgeFile {
    brackets: Vec<OldAgeBracket>,
}

/// Top-level structure of `social_security.yaml`.
#[derive(Debug, Deserialize)]
struct SocialSecurityFile {
    #[serde(flatten)]
    rates: SocialSecurityRates,
    housing_fund_rate_pct: Decimal,
    sdi_cap_multiplier: Decimal,
}

/// Loads and provides access to the statutory tables.
///
/// The `TablesLoader` reads YAML table files from a directory and
/// assembles them into a [`StatutoryTables`] value.
///
/// # Directory Structure
///
/// The table directory should have the following structure:
/// ```text
/// config/mexico-2026/
/// ├── income_tax.yaml       # Monthly ISR bracket table
/// ├── old_age.yaml          # CEAV rate brackets by year
/// ├── social_security.yaml  # IMSS rates, INFONAVIT rate, SDI cap
/// └── subsidy.yaml          # Employment subsidy rule
/// ```
///
/// # Example
///
/// ```no_run
/// use nomina_engine::config::TablesLoader;
///
/// let loader = TablesLoader::load("./config/mexico-2026").unwrap();
/// let tables = loader.tables();
/// assert_eq!(tables.income_tax.len(), 11);
/// ```
#[derive(Debug, Clone)]
pub struct TablesLoader {
    tables: StatutoryTables,
}

impl TablesLoader {
    /// Loads the statutory tables from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the table directory (e.g., "./config/mexico-2026")
    ///
    /// # Returns
    ///
    /// Returns a `TablesLoader` instance on success, or an error if any
    /// required file is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let income_tax: IncomeTaxFile = Self::load_yaml(&path.join("income_tax.yaml"))?;
        let old_age: OldAgeFile = Self::load_yaml(&path.join("old_age.yaml"))?;
        let social_security: SocialSecurityFile =
            Self::load_yaml(&path.join("social_security.yaml"))?;
        let subsidy: SubsidyRule = Self::load_yaml(&path.join("subsidy.yaml"))?;

        Ok(Self {
            tables: StatutoryTables {
                income_tax: income_tax.brackets,
                old_age: old_age.brackets,
                social_security: social_security.rates,
                housing_fund_rate_pct: social_security.housing_fund_rate_pct,
                sdi_cap_multiplier: social_security.sdi_cap_multiplier,
                subsidy,
            },
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::TablesNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::TablesParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded tables.
    pub fn tables(&self) -> &StatutoryTables {
        &self.tables
    }

    /// Consumes the loader and returns the tables.
    pub fn into_tables(self) -> StatutoryTables {
        self.tables
    }
}
