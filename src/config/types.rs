//! Statutory table types for payroll cost calculation.
//!
//! This module contains the strongly-typed table structures that are
//! deserialized from YAML table files or built from the embedded data set.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Per-calculation configuration supplied by the caller.
///
/// Holds the values that are company- or period-specific rather than
/// statutory: the daily reference unit (UMA), the employer's work-risk
/// premium, and the state payroll tax (ISN) rate.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CalculationConfig {
    /// The daily value of the reference unit (UMA).
    pub reference_unit: Decimal,
    /// The employer's work-risk premium, as a percentage of the
    /// contribution base salary.
    pub work_risk_rate_pct: Decimal,
    /// The state payroll tax (ISN) rate, as a percentage of total
    /// perceptions plus provisions.
    pub payroll_tax_rate_pct: Decimal,
}

/// A row of the monthly income tax (ISR) bracket table.
///
/// Bracket bounds are inclusive at both ends; the last bracket has no
/// upper limit.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IncomeTaxBracket {
    /// The lower bound of the bracket (inclusive).
    pub lower_limit: Decimal,
    /// The upper bound of the bracket (inclusive), or `None` for the
    /// unbounded top bracket.
    #[serde(default)]
    pub upper_limit: Option<Decimal>,
    /// The fixed tax quota owed at the lower bound.
    pub fixed_quota: Decimal,
    /// The marginal rate applied to income over the lower bound, as a
    /// percentage.
    pub percent_over_excess: Decimal,
}

impl IncomeTaxBracket {
    /// Returns true if the given monthly income falls inside this bracket.
    pub fn contains(&self, income: Decimal) -> bool {
        income >= self.lower_limit && self.upper_limit.is_none_or(|upper| income <= upper)
    }
}

/// A row of the CEAV (unemployment-at-old-age and old-age) rate table.
///
/// The employer rate for this contribution varies both by the employee's
/// integrated salary expressed in reference-unit multiples and by the
/// calendar year of the calculation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OldAgeBracket {
    /// The lower bound of the salary range, in reference-unit multiples
    /// (inclusive).
    pub min_units: Decimal,
    /// The upper bound of the salary range, in reference-unit multiples
    /// (inclusive), or `None` for the unbounded top bracket.
    #[serde(default)]
    pub max_units: Option<Decimal>,
    /// Contribution rate per calendar year, as a percentage.
    pub rates: BTreeMap<i32, Decimal>,
}

impl OldAgeBracket {
    /// Returns true if the given salary (in reference-unit multiples)
    /// falls inside this bracket.
    pub fn contains(&self, salary_in_units: Decimal) -> bool {
        salary_in_units >= self.min_units
            && self.max_units.is_none_or(|upper| salary_in_units <= upper)
    }

    /// Returns the rate for the given year, clamping the year to the
    /// range this bracket carries rates for.
    pub fn rate_for_year(&self, year: i32) -> Decimal {
        let (Some((&first, _)), Some((&last, _))) =
            (self.rates.first_key_value(), self.rates.last_key_value())
        else {
            return Decimal::ZERO;
        };
        let clamped = year.clamp(first, last);
        self.rates.get(&clamped).copied().unwrap_or(Decimal::ZERO)
    }
}

/// Employer-side social security (IMSS) contribution rates.
///
/// All values are percentages. Each line applies to a monthly base of
/// `rate% × base × 30.4` where the base is the reference unit (fixed
/// quota), the excess of the capped integrated salary over three
/// reference units (excess line), or the capped integrated salary itself.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EmployerRates {
    /// Fixed quota, applied to one reference unit.
    pub fixed_quota_pct: Decimal,
    /// Excess quota, applied to the part of the salary above three
    /// reference units.
    pub excess_pct: Decimal,
    /// Cash benefits line.
    pub cash_benefits_pct: Decimal,
    /// Medical expenses for pensioners line.
    pub medical_pensioners_pct: Decimal,
    /// Disability and life insurance line.
    pub disability_life_pct: Decimal,
    /// Retirement line.
    pub retirement_pct: Decimal,
    /// Nursery and social benefits line.
    pub nursery_pct: Decimal,
}

/// Employee-side social security (IMSS) withholding rates.
///
/// All values are percentages over the capped integrated salary (or its
/// excess over three reference units for the excess line).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EmployeeRates {
    /// Excess quota, applied to the part of the salary above three
    /// reference units.
    pub excess_pct: Decimal,
    /// Cash benefits line.
    pub cash_benefits_pct: Decimal,
    /// Medical expenses for pensioners line.
    pub medical_pensioners_pct: Decimal,
    /// Disability and life insurance line.
    pub disability_life_pct: Decimal,
    /// CEAV line (fixed for the employee, unlike the employer's
    /// bracketed rate).
    pub old_age_pct: Decimal,
}

/// The complete set of social security contribution rates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialSecurityRates {
    /// Employer-side rates.
    pub employer: EmployerRates,
    /// Employee-side withholding rates.
    pub employee: EmployeeRates,
}

/// The employment subsidy rule.
///
/// The subsidy reduces withheld income tax for earners at or below the
/// income cap. Its amount is `reference unit × 30.4 × multiplier`, with a
/// distinct multiplier for January.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubsidyRule {
    /// Monthly income at or below which the subsidy applies (inclusive).
    pub income_cap: Decimal,
    /// Subsidy multiplier for February through December, as a fraction.
    pub multiplier: Decimal,
    /// Subsidy multiplier for January, as a fraction.
    pub january_multiplier: Decimal,
}

/// The full statutory data set used by a calculation.
///
/// Immutable once constructed; injected by reference into every
/// calculation call so the engine stays referentially transparent.
#[derive(Debug, Clone, PartialEq)]
pub struct StatutoryTables {
    /// Monthly income tax (ISR) brackets, ordered by lower limit.
    pub income_tax: Vec<IncomeTaxBracket>,
    /// CEAV rate brackets, ordered by salary range.
    pub old_age: Vec<OldAgeBracket>,
    /// IMSS contribution rates, employer and employee side.
    pub social_security: SocialSecurityRates,
    /// Housing fund (INFONAVIT) employer rate, as a percentage.
    pub housing_fund_rate_pct: Decimal,
    /// The integrated salary cap, in reference-unit multiples.
    pub sdi_cap_multiplier: Decimal,
    /// The employment subsidy rule.
    pub subsidy: SubsidyRule,
}

impl StatutoryTables {
    /// Finds the income tax bracket containing the given monthly income.
    ///
    /// Bounds are inclusive at both ends: an income exactly equal to a
    /// bracket's upper limit uses that bracket, not the next one. Returns
    /// `None` when no bracket matches (for the shipped table, income
    /// below one centavo).
    pub fn income_tax_bracket(&self, income: Decimal) -> Option<&IncomeTaxBracket> {
        self.income_tax.iter().find(|bracket| bracket.contains(income))
    }

    /// Returns the employer CEAV rate for the given salary (expressed in
    /// reference-unit multiples) and calendar year.
    ///
    /// The year is clamped to the range the matched bracket carries rates
    /// for. When no bracket matches, the highest bracket's rate is used.
    pub fn old_age_rate_pct(&self, salary_in_units: Decimal, year: i32) -> Decimal {
        self.old_age
            .iter()
            .find(|bracket| bracket.contains(salary_in_units))
            .or_else(|| self.old_age.last())
            .map(|bracket| bracket.rate_for_year(year))
            .unwrap_or(Decimal::ZERO)
    }

    /// Returns the integrated-salary cap for the given reference unit.
    pub fn sdi_cap(&self, reference_unit: Decimal) -> Decimal {
        reference_unit * self.sdi_cap_multiplier
    }
}
