//! Monthly income tax (ISR) withholding and the employment subsidy.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::config::StatutoryTables;

use super::integrated_salary::average_month_days;

/// The income tax figures for one employee.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomeTax {
    /// Tax before the employment subsidy.
    pub gross_tax: Decimal,
    /// The employment subsidy, zero above the income cap.
    pub subsidy: Decimal,
    /// Tax actually withheld: `max(0, gross − subsidy)`.
    pub withheld: Decimal,
}

/// Computes the withheld monthly income tax.
///
/// The bracket containing the taxable income (inclusive at both bounds)
/// supplies a fixed quota plus a marginal rate over the bracket's lower
/// limit; income matching no bracket is untaxed. The employment subsidy
/// applies only at or below the statutory income cap and is worth
/// `reference unit × 30.4 × multiplier`, with the higher multiplier in
/// January.
pub fn calculate_income_tax(
    tables: &StatutoryTables,
    reference_unit: Decimal,
    taxable_income: Decimal,
    calculation_date: NaiveDate,
) -> IncomeTax {
    let gross_tax = match tables.income_tax_bracket(taxable_income) {
        Some(bracket) => {
            let excess = taxable_income - bracket.lower_limit;
            bracket.fixed_quota + excess * (bracket.percent_over_excess / Decimal::ONE_HUNDRED)
        }
        None => Decimal::ZERO,
    };

    let subsidy = if taxable_income <= tables.subsidy.income_cap {
        let monthly_reference = reference_unit * average_month_days();
        let multiplier = if calculation_date.month() == 1 {
            tables.subsidy.january_multiplier
        } else {
            tables.subsidy.multiplier
        };
        monthly_reference * multiplier
    } else {
        Decimal::ZERO
    };

    IncomeTax {
        gross_tax,
        subsidy,
        withheld: (gross_tax - subsidy).max(Decimal::ZERO),
    }
}
