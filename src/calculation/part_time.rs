//! Part-time pay calculation.
//!
//! Part-time employees are paid for the hours they worked. Working strictly
//! more than the policy threshold earns a bonus, either flat or a percentage
//! of the hours pay.

use crate::config::PayPolicy;
use crate::error::PayrollResult;
use crate::models::PartTime;

use super::salary_rule::{SalaryBreakdown, SalaryRule, describe_bonus, overflow};

impl SalaryRule for PartTime {
    fn salary_breakdown(
        &self,
        _years_of_service: u32,
        policy: &PayPolicy,
    ) -> PayrollResult<SalaryBreakdown> {
        let base = self
            .hourly_rate
            .checked_mul(self.hours_worked)
            .ok_or_else(|| overflow("hours pay"))?;
        let threshold = policy.part_time.threshold_hours;
        let hours_pay = format!(
            "{} hours x ${} = ${}",
            self.hours_worked.normalize(),
            self.hourly_rate.normalize(),
            base.normalize()
        );

        if self.hours_worked <= threshold {
            let reasoning = format!(
                "{}; threshold of {} hours not exceeded",
                hours_pay,
                threshold.normalize()
            );
            return SalaryBreakdown::new(base, None, reasoning);
        }

        let rule = policy.part_time.bonus;
        let bonus = rule.on(base).ok_or_else(|| overflow("hours bonus"))?;
        let reasoning = format!(
            "{}; hours bonus (> {} hours) {}",
            hours_pay,
            threshold.normalize(),
            describe_bonus(rule, base, bonus)
        );

        SalaryBreakdown::new(base, Some(bonus), reasoning)
    }
}
