//! The inverse solver: desired net salary → gross base salary.
//!
//! An explicit bounded loop drives the forward calculation with trial
//! gross-base values. Proportional scaling handles the common case; a
//! halving backoff keeps the estimate non-negative when the target net is
//! below what a zero base would yield, and an additive correction covers
//! the degenerate near-zero-net case. The solver never reports
//! non-convergence: after the loop it runs one final forward calculation
//! at the last estimate and returns that result, so an unreachable target
//! comes back as the closest attainable approximation.

use rust_decimal::Decimal;

use crate::config::StatutoryTables;
use crate::error::EngineResult;
use crate::models::CalculationResult;

use super::forward::{calculate_with_base_override, CalculationInput};

/// Upper bound on solver iterations.
pub const MAX_ITERATIONS: u32 = 35;

/// Convergence tolerance on the net salary, in pesos.
pub fn convergence_tolerance() -> Decimal {
    Decimal::new(1, 3)
}

/// Average deduction share assumed for the initial guess: a net salary is
/// taken to be roughly 75% of gross.
fn assumed_net_share() -> Decimal {
    Decimal::new(75, 2)
}

/// Finds the gross base salary whose forward calculation yields the
/// desired net salary, within [`convergence_tolerance`].
///
/// # Errors
///
/// Fails only for rows the forward calculation itself rejects (invalid
/// hire date, no earnings even at the solved base). An unreachable
/// target — including any negative target — is not an error; the result
/// then carries the nearest attainable net at a non-negative base.
pub fn calculate_backward(
    input: &CalculationInput<'_>,
    tables: &StatutoryTables,
    desired_net: Decimal,
) -> EngineResult<CalculationResult> {
    // One unmodified pass discovers the row's non-base perceptions.
    let other_perceptions = calculate_with_base_override(input, tables, None)
        .map(|result| result.total_perceptions - result.monthly_base_salary)
        .unwrap_or(Decimal::ZERO);

    let initial_gross_guess = desired_net / assumed_net_share();
    let mut estimate = (initial_gross_guess - other_perceptions).max(Decimal::ZERO);

    for iteration in 0..MAX_ITERATIONS {
        let (net, total_gross) = match calculate_with_base_override(input, tables, Some(estimate))
        {
            Ok(result) => (result.net_salary, result.total_perceptions),
            Err(_) => (Decimal::ZERO, Decimal::ZERO),
        };

        let difference = desired_net - net;
        if difference.abs() <= convergence_tolerance() {
            break;
        }

        if net > Decimal::ONE {
            let other = total_gross - estimate;
            let scaled_total = total_gross * (desired_net / net);
            let mut next = scaled_total - other;
            if next < Decimal::ZERO && difference < Decimal::ZERO {
                // The target sits below the floor set by the other
                // perceptions; back off geometrically instead of going
                // negative.
                next = estimate / Decimal::TWO;
            }
            estimate = next;
        } else {
            estimate += difference;
        }

        if estimate < Decimal::ZERO {
            estimate = Decimal::ZERO;
            if iteration > 0 {
                break;
            }
        }
    }

    calculate_with_base_override(input, tables, Some(estimate))
}
