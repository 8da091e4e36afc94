//! Pay policy types.
//!
//! This module contains the strongly-typed policy structures that are
//! deserialized from the YAML policy file. Every section has a built-in
//! default so a partial file only overrides what it names.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A bonus or allowance: either a fixed sum or a share of base pay.
///
/// In YAML a bare number is a fixed amount; `{ percent: 5 }` is five per
/// cent of the base pay the rule computed, and `{ amount: 100 }` spells the
/// fixed form out.
///
/// # Examples
///
/// ```
/// use staff_payroll::config::Bonus;
/// use rust_decimal::Decimal;
///
/// let base = Decimal::new(60000, 0);
/// assert_eq!(Bonus::Amount(Decimal::new(1000, 0)).on(base), Some(Decimal::new(1000, 0)));
/// assert_eq!(Bonus::Percent(Decimal::new(5, 0)).on(base), Some(Decimal::new(3000, 0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BonusRepr", into = "BonusRepr")]
pub enum Bonus {
    /// A fixed sum.
    Amount(Decimal),
    /// A percentage of base pay.
    Percent(Decimal),
}

impl Bonus {
    /// Resolves the bonus against `base`. Returns `None` on overflow.
    pub fn on(self, base: Decimal) -> Option<Decimal> {
        match self {
            Self::Amount(amount) => Some(amount),
            Self::Percent(percent) => base
                .checked_mul(percent)?
                .checked_div(Decimal::ONE_HUNDRED),
        }
    }
}

impl fmt::Display for Bonus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Amount(amount) => write!(f, "${}", amount.normalize()),
            Self::Percent(percent) => write!(f, "{}%", percent.normalize()),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum BonusRepr {
    Flat(Decimal),
    Percent { percent: Decimal },
    Amount { amount: Decimal },
}

impl From<BonusRepr> for Bonus {
    fn from(repr: BonusRepr) -> Self {
        match repr {
            BonusRepr::Flat(amount) | BonusRepr::Amount { amount } => Self::Amount(amount),
            BonusRepr::Percent { percent } => Self::Percent(percent),
        }
    }
}

impl From<Bonus> for BonusRepr {
    fn from(bonus: Bonus) -> Self {
        match bonus {
            Bonus::Amount(amount) => Self::Flat(amount),
            Bonus::Percent(percent) => Self::Percent { percent },
        }
    }
}

/// A tenure bonus breakpoint for full-time employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenureTier {
    /// Minimum completed years of service for this tier to apply.
    pub min_years: u32,
    /// The annual bonus paid at this tier.
    pub bonus: Bonus,
}

impl TenureTier {
    /// A tier paying a fixed sum.
    pub fn amount(min_years: u32, amount: Decimal) -> Self {
        Self {
            min_years,
            bonus: Bonus::Amount(amount),
        }
    }

    /// A tier paying a percentage of annual base pay.
    pub fn percent(min_years: u32, percent: Decimal) -> Self {
        Self {
            min_years,
            bonus: Bonus::Percent(percent),
        }
    }
}

/// Bonus rules for full-time employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullTimePolicy {
    /// Tenure breakpoints; the highest tier reached is paid.
    pub tenure_tiers: Vec<TenureTier>,
}

impl FullTimePolicy {
    /// Returns the highest tier whose `min_years` is within `years_of_service`.
    ///
    /// Tier order in the list does not matter.
    pub fn tier_for(&self, years_of_service: u32) -> Option<&TenureTier> {
        self.tenure_tiers
            .iter()
            .filter(|tier| tier.min_years <= years_of_service)
            .max_by_key(|tier| tier.min_years)
    }
}

impl Default for FullTimePolicy {
    fn default() -> Self {
        Self {
            tenure_tiers: vec![
                TenureTier::amount(2, Decimal::new(500, 0)),
                TenureTier::amount(5, Decimal::new(1000, 0)),
                TenureTier::amount(10, Decimal::new(2000, 0)),
            ],
        }
    }
}

/// Bonus rules for part-time employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartTimePolicy {
    /// Hours that must be exceeded (strictly) to earn the bonus.
    pub threshold_hours: Decimal,
    /// Paid above the threshold; percentages apply to earned pay.
    pub bonus: Bonus,
}

impl Default for PartTimePolicy {
    fn default() -> Self {
        Self {
            threshold_hours: Decimal::new(150, 0),
            bonus: Bonus::Amount(Decimal::new(100, 0)),
        }
    }
}

/// Allowance rules for interns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternPolicy {
    /// Paid on top of the stipend once the internship is completed;
    /// percentages apply to the stipend.
    pub completion_allowance: Bonus,
}

impl Default for InternPolicy {
    fn default() -> Self {
        Self {
            completion_allowance: Bonus::Amount(Decimal::new(200, 0)),
        }
    }
}

/// The complete pay policy applied by the salary rules.
///
/// # Example
///
/// ```
/// use staff_payroll::config::{Bonus, PayPolicy};
/// use rust_decimal::Decimal;
///
/// let policy = PayPolicy::default();
/// assert_eq!(policy.part_time.threshold_hours, Decimal::new(150, 0));
/// assert_eq!(policy.full_time.tier_for(6).unwrap().bonus, Bonus::Amount(Decimal::new(1000, 0)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPolicy {
    /// Full-time tenure bonus tiers.
    #[serde(default)]
    pub full_time: FullTimePolicy,
    /// Part-time hours bonus.
    #[serde(default)]
    pub part_time: PartTimePolicy,
    /// Intern completion allowance.
    #[serde(default)]
    pub intern: InternPolicy,
}

impl PayPolicy {
    /// Sorts tenure tiers by `min_years` so listings read in ascending order.
    pub fn normalized(mut self) -> Self {
        self.full_time
            .tenure_tiers
            .sort_by(|a, b| a.min_years.cmp(&b.min_years));
        self
    }
}
