//! The salary rule capability shared by every employee variant.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::config::{Bonus, PayPolicy};
use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, EmployeeKind};

/// The result of applying a salary rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Pay before any bonus or allowance, rounded to cents.
    pub base: Decimal,
    /// The bonus or allowance earned, rounded to cents (zero when none).
    pub bonus: Decimal,
    /// `base + bonus`.
    pub total: Decimal,
    /// Whether a non-zero bonus or allowance was earned.
    pub bonus_applied: bool,
    /// Human-readable explanation of the calculation.
    pub reasoning: String,
}

impl SalaryBreakdown {
    /// Builds a breakdown, rounding both parts to cents.
    ///
    /// A bonus that rounds to zero does not count as applied.
    pub fn new(base: Decimal, bonus: Option<Decimal>, reasoning: String) -> PayrollResult<Self> {
        let base = round_to_cents(base);
        let bonus = round_to_cents(bonus.unwrap_or(Decimal::ZERO));
        let total = base
            .checked_add(bonus)
            .ok_or_else(|| overflow("salary total"))?;
        Ok(Self {
            base,
            bonus,
            total,
            bonus_applied: bonus > Decimal::ZERO,
            reasoning,
        })
    }
}

/// Rounds a money amount to 2 decimal places, halves away from zero.
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Adds up money amounts, failing instead of overflowing.
///
/// `what` names the total in the error message.
pub fn checked_sum<I>(amounts: I, what: &str) -> PayrollResult<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount))
        .ok_or_else(|| overflow(what))
}

pub(crate) fn overflow(what: &str) -> PayrollError {
    PayrollError::Calculation {
        message: format!("{what} overflows"),
    }
}

/// Describes an earned bonus for reasoning strings.
pub(crate) fn describe_bonus(bonus: Bonus, of: Decimal, earned: Decimal) -> String {
    match bonus {
        Bonus::Amount(_) => format!("${}", earned.normalize()),
        Bonus::Percent(percent) => format!(
            "{}% of ${} = ${}",
            percent.normalize(),
            of.normalize(),
            round_to_cents(earned).normalize()
        ),
    }
}

/// Computes pay for one kind of employee.
///
/// Implementations are pure: the result depends only on the variant's own
/// fields, the years of service and the policy. They fail with
/// [`PayrollError::Calculation`] when an amount does not fit a `Decimal`.
pub trait SalaryRule {
    /// Applies the rule and explains the result.
    fn salary_breakdown(
        &self,
        years_of_service: u32,
        policy: &PayPolicy,
    ) -> PayrollResult<SalaryBreakdown>;

    /// Returns just the total salary.
    fn calculate_salary(&self, years_of_service: u32, policy: &PayPolicy) -> PayrollResult<Decimal> {
        Ok(self.salary_breakdown(years_of_service, policy)?.total)
    }
}

impl SalaryRule for EmployeeKind {
    fn salary_breakdown(
        &self,
        years_of_service: u32,
        policy: &PayPolicy,
    ) -> PayrollResult<SalaryBreakdown> {
        match self {
            Self::FullTime(rule) => rule.salary_breakdown(years_of_service, policy),
            Self::PartTime(rule) => rule.salary_breakdown(years_of_service, policy),
            Self::Intern(rule) => rule.salary_breakdown(years_of_service, policy),
        }
    }
}

impl Employee {
    /// Applies this employee's salary rule and explains the result.
    ///
    /// Calculation errors name the employee.
    pub fn salary_breakdown(&self, policy: &PayPolicy) -> PayrollResult<SalaryBreakdown> {
        self.kind
            .salary_breakdown(self.years_of_service, policy)
            .map_err(|e| match e {
                PayrollError::Calculation { message } => PayrollError::Calculation {
                    message: format!("employee '{}': {}", self.employee_id, message),
                },
                other => other,
            })
    }

    /// Computes this employee's salary under `policy`.
    ///
    /// # Examples
    ///
    /// ```
    /// use staff_payroll::config::PayPolicy;
    /// use staff_payroll::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let intern = Employee::intern("IN900", "Charu Rai", 0, Decimal::new(1000, 0), true);
    /// assert_eq!(intern.calculate_salary(&PayPolicy::default()).unwrap(), Decimal::new(1200, 0));
    /// ```
    pub fn calculate_salary(&self, policy: &PayPolicy) -> PayrollResult<Decimal> {
        Ok(self.salary_breakdown(policy)?.total)
    }
}
