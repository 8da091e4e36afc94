//! Full-time salary calculation.
//!
//! A full-time employee earns twelve months of their monthly salary plus a
//! tenure bonus taken from the highest policy tier they have reached. A tier
//! pays either a flat sum or a percentage of the annual base.

use rust_decimal::Decimal;

use crate::config::PayPolicy;
use crate::error::PayrollResult;
use crate::models::FullTime;

use super::salary_rule::{SalaryBreakdown, SalaryRule, describe_bonus, overflow};

/// Number of monthly payments in a year.
pub const MONTHS_PER_YEAR: u32 = 12;

impl SalaryRule for FullTime {
    /// Computes `monthly_salary * 12 + tenure_bonus(years_of_service)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use staff_payroll::calculation::SalaryRule;
    /// use staff_payroll::config::PayPolicy;
    /// use staff_payroll::models::FullTime;
    /// use rust_decimal::Decimal;
    ///
    /// let rule = FullTime { monthly_salary: Decimal::new(5000, 0) };
    /// let result = rule.salary_breakdown(6, &PayPolicy::default()).unwrap();
    /// assert_eq!(result.total, Decimal::new(61000, 0));
    /// ```
    fn salary_breakdown(
        &self,
        years_of_service: u32,
        policy: &PayPolicy,
    ) -> PayrollResult<SalaryBreakdown> {
        let base = self
            .monthly_salary
            .checked_mul(Decimal::from(MONTHS_PER_YEAR))
            .ok_or_else(|| overflow("annual base pay"))?;
        let annual = format!(
            "${} x {} = ${}",
            self.monthly_salary.normalize(),
            MONTHS_PER_YEAR,
            base.normalize()
        );

        let Some(tier) = policy.full_time.tier_for(years_of_service) else {
            let reasoning = format!("{annual}; no tenure bonus at {years_of_service} years");
            return SalaryBreakdown::new(base, None, reasoning);
        };

        let bonus = tier
            .bonus
            .on(base)
            .ok_or_else(|| overflow("tenure bonus"))?;
        let reasoning = format!(
            "{}; tenure bonus ({} years >= {}) {}",
            annual,
            years_of_service,
            tier.min_years,
            describe_bonus(tier.bonus, base, bonus)
        );

        SalaryBreakdown::new(base, Some(bonus), reasoning)
    }
}
