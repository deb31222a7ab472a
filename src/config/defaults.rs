//! Embedded statutory data set for calendar year 2026.
//!
//! The same tables are shipped as YAML under `config/mexico-2026/` for
//! deployments that load them from disk; the embedded copy keeps the
//! engine usable with no files present.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::types::{
    CalculationConfig, EmployeeRates, EmployerRates, IncomeTaxBracket, OldAgeBracket,
    SocialSecurityRates, StatutoryTables, SubsidyRule,
};

/// Years covered by the CEAV rate table, in order.
const OLD_AGE_YEARS: [i32; 8] = [2023, 2024, 2025, 2026, 2027, 2028, 2029, 2030];

/// Builds an ISR bracket from centavo-scaled mantissas.
fn isr(lower: i64, upper: Option<i64>, quota: i64, pct: i64) -> IncomeTaxBracket {
    IncomeTaxBracket {
        lower_limit: Decimal::new(lower, 2),
        upper_limit: upper.map(|value| Decimal::new(value, 2)),
        fixed_quota: Decimal::new(quota, 2),
        percent_over_excess: Decimal::new(pct, 2),
    }
}

/// Builds a CEAV bracket from centesimal mantissas, one rate per year of
/// [`OLD_AGE_YEARS`].
fn ceav(min: i64, max: Option<i64>, rates: [i64; 8]) -> OldAgeBracket {
    OldAgeBracket {
        min_units: Decimal::new(min, 2),
        max_units: max.map(|value| Decimal::new(value, 2)),
        rates: BTreeMap::from_iter(
            OLD_AGE_YEARS
                .iter()
                .zip(rates)
                .map(|(&year, rate)| (year, Decimal::new(rate, 2))),
        ),
    }
}

impl StatutoryTables {
    /// The statutory data set in force for 2026.
    ///
    /// Monthly ISR table, CEAV transition rates for 2023 through 2030,
    /// IMSS percentage lines, the 5% INFONAVIT rate, the 25-unit
    /// integrated-salary cap and the 2026 employment subsidy rule.
    pub fn mexico_2026() -> Self {
        StatutoryTables {
            income_tax: vec![
                isr(1, Some(84_459), 0, 192),
                isr(84_460, Some(716_851), 1_622, 640),
                isr(716_852, Some(1_259_802), 42_095, 1_088),
                isr(1_259_803, Some(1_464_464), 101_168, 1_600),
                isr(1_464_465, Some(1_753_364), 133_914, 1_792),
                isr(1_753_365, Some(3_536_283), 185_684, 2_136),
                isr(3_536_284, Some(5_573_668), 566_516, 2_352),
                isr(5_573_669, Some(10_641_050), 1_045_709, 3_000),
                isr(10_641_051, Some(14_188_066), 2_565_923, 3_200),
                isr(14_188_067, Some(42_564_199), 3_700_969, 3_400),
                isr(42_564_200, None, 13_348_854, 3_500),
            ],
            old_age: vec![
                ceav(0, Some(100), [315, 315, 315, 315, 315, 315, 315, 315]),
                ceav(101, Some(150), [328, 341, 354, 367, 380, 393, 407, 420]),
                ceav(151, Some(200), [358, 400, 443, 485, 528, 570, 613, 655]),
                ceav(201, Some(250), [375, 435, 495, 556, 616, 676, 736, 796]),
                ceav(251, Some(300), [387, 459, 531, 603, 675, 746, 818, 890]),
                ceav(301, Some(350), [395, 476, 556, 636, 716, 797, 877, 957]),
                ceav(351, Some(400), [402, 488, 575, 661, 748, 835, 921, 1_008]),
                ceav(401, None, [424, 533, 642, 751, 860, 969, 1_078, 1_188]),
            ],
            social_security: SocialSecurityRates {
                employer: EmployerRates {
                    fixed_quota_pct: Decimal::new(2_040, 2),
                    excess_pct: Decimal::new(110, 2),
                    cash_benefits_pct: Decimal::new(70, 2),
                    medical_pensioners_pct: Decimal::new(105, 2),
                    disability_life_pct: Decimal::new(175, 2),
                    retirement_pct: Decimal::new(200, 2),
                    nursery_pct: Decimal::new(100, 2),
                },
                employee: EmployeeRates {
                    excess_pct: Decimal::new(40, 2),
                    cash_benefits_pct: Decimal::new(25, 2),
                    medical_pensioners_pct: Decimal::new(375, 3),
                    disability_life_pct: Decimal::new(625, 3),
                    old_age_pct: Decimal::new(1_125, 3),
                },
            },
            housing_fund_rate_pct: Decimal::new(500, 2),
            sdi_cap_multiplier: Decimal::new(25, 0),
            subsidy: SubsidyRule {
                income_cap: Decimal::new(1_149_266, 2),
                multiplier: Decimal::new(1_502, 4),
                january_multiplier: Decimal::new(1_559, 4),
            },
        }
    }
}

impl CalculationConfig {
    /// Default configuration values for 2026: the UMA in force from
    /// February 2026, a sample work-risk premium and a 4% payroll tax.
    pub fn mexico_2026_defaults() -> Self {
        CalculationConfig {
            reference_unit: Decimal::new(11_731, 2),
            work_risk_rate_pct: Decimal::new(758_875, 5),
            payroll_tax_rate_pct: Decimal::new(400, 2),
        }
    }
}
