//! Benefit scheme variants and their seniority schedules.
//!
//! A benefit scheme decides how many year-end bonus (aguinaldo) days and
//! what vacation-premium percentage an employee gets for a given length of
//! service. The three schemes are a closed set; each carries two pure step
//! functions keyed on completed years of service.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The benefit scheme an employee is covered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BenefitScheme {
    /// The statutory minimum: 15 bonus days and a 25% vacation premium,
    /// regardless of seniority.
    #[serde(rename = "ley")]
    Statutory,
    /// Legacy plan for staff hired before 1991; ramps up at 1, 2, 4 and
    /// 5 years of service.
    #[serde(rename = "antes1991")]
    Pre1991,
    /// Management plan; richer day counts with the same breakpoints.
    #[serde(rename = "gerentes")]
    Managers,
}

impl BenefitScheme {
    /// Human-readable scheme name.
    pub fn display_name(&self) -> &'static str {
        match self {
            BenefitScheme::Statutory => "Ley",
            BenefitScheme::Pre1991 => "Antes de 1991",
            BenefitScheme::Managers => "Gerentes",
        }
    }

    /// Year-end bonus days for the given years of service.
    ///
    /// Step function on completed years; employees with less than one
    /// completed year get nothing under the non-statutory schemes.
    pub fn year_end_bonus_days(&self, years_of_service: Decimal) -> u32 {
        let completed = completed_years(years_of_service);
        match self {
            BenefitScheme::Statutory => 15,
            BenefitScheme::Pre1991 => match completed {
                i64::MIN..=0 => 0,
                1 => 16,
                2..=3 => 21,
                4 => 26,
                _ => 31,
            },
            BenefitScheme::Managers => match completed {
                i64::MIN..=0 => 0,
                1..=3 => 22,
                4 => 27,
                _ => 32,
            },
        }
    }

    /// Vacation premium for the given years of service, as a fraction.
    pub fn vacation_premium(&self, years_of_service: Decimal) -> Decimal {
        let completed = completed_years(years_of_service);
        match self {
            BenefitScheme::Statutory => Decimal::new(25, 2),
            BenefitScheme::Pre1991 => match completed {
                i64::MIN..=0 => Decimal::ZERO,
                1..=4 => Decimal::new(30, 2),
                _ => Decimal::new(35, 2),
            },
            BenefitScheme::Managers => match completed {
                i64::MIN..=0 => Decimal::ZERO,
                1..=4 => Decimal::new(35, 2),
                _ => Decimal::new(40, 2),
            },
        }
    }
}

/// Whole years of service, rounded toward negative infinity.
fn completed_years(years_of_service: Decimal) -> i64 {
    years_of_service.floor().to_i64().unwrap_or(0)
}
