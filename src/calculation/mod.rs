//! Calculation logic for the payroll cost engine.
//!
//! This module contains all the calculation functions: lenient cell and
//! hire-date parsing, seniority and benefit entitlements, integrated
//! salary (SDI) with its statutory cap, employer contribution lines and
//! provisions, income tax and employee withholding, the forward
//! orchestrator that composes them into one result, and the iterative
//! inverse solver that finds the gross base salary for a desired net.

mod employee_net;
mod employer_cost;
mod forward;
mod income_tax;
mod integrated_salary;
mod inverse;
mod parsing;
mod seniority;

pub use employee_net::{calculate_employee_withholding, EmployeeWithholding};
pub use employer_cost::{calculate_employer_cost, EmployerCost};
pub use forward::{calculate_forward, CalculationInput};
pub use income_tax::{calculate_income_tax, IncomeTax};
pub use integrated_salary::{
    average_month_days, benefit_year_days, calculate_integrated_salary, integration_factor,
    statutory_month_days, IntegratedSalary,
};
pub use inverse::{calculate_backward, convergence_tolerance, MAX_ITERATIONS};
pub use parsing::{parse_amount, parse_hire_date};
pub use seniority::{
    assess_seniority, days_per_service_year, vacation_days_for_seniority, years_of_service,
    SeniorityProfile,
};
