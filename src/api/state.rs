//! Application state for the payroll cost engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::StatutoryTables;

/// Shared application state.
///
/// Contains the loaded statutory tables, shared read-only across all
/// request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The statutory tables used by every calculation.
    tables: Arc<StatutoryTables>,
}

impl AppState {
    /// Creates a new application state with the given tables.
    pub fn new(tables: StatutoryTables) -> Self {
        Self {
            tables: Arc::new(tables),
        }
    }

    /// Returns a reference to the statutory tables.
    pub fn tables(&self) -> &StatutoryTables {
        &self.tables
    }
}
