//! HTTP API module for the payroll cost engine.
//!
//! This module provides the REST API endpoint for calculating employer
//! cost and net pay, in both forward and inverse (desired net) mode.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationConfigRequest, CalculationRequest, ColumnMappingRequest};
pub use response::ApiError;
pub use state::AppState;
