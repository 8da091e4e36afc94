//! Intern stipend calculation.

use crate::config::PayPolicy;
use crate::error::PayrollResult;
use crate::models::Intern;

use super::salary_rule::{SalaryBreakdown, SalaryRule, describe_bonus, overflow};

impl SalaryRule for Intern {
    /// Pays the stipend, plus the completion allowance once `completed` is set.
    fn salary_breakdown(
        &self,
        _years_of_service: u32,
        policy: &PayPolicy,
    ) -> PayrollResult<SalaryBreakdown> {
        if !self.completed {
            let reasoning = format!(
                "stipend ${}; internship not completed",
                self.stipend.normalize()
            );
            return SalaryBreakdown::new(self.stipend, None, reasoning);
        }

        let rule = policy.intern.completion_allowance;
        let allowance = rule
            .on(self.stipend)
            .ok_or_else(|| overflow("completion allowance"))?;
        let reasoning = format!(
            "stipend ${}; completion allowance {}",
            self.stipend.normalize(),
            describe_bonus(rule, self.stipend, allowance)
        );

        SalaryBreakdown::new(self.stipend, Some(allowance), reasoning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Bonus, InternPolicy};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn intern(stipend: &str, completed: bool) -> Intern {
        Intern {
            stipend: dec(stipend),
            completed,
        }
    }

    #[test]
    fn test_completed_intern_gets_allowance() {
        let result = intern("1000", true)
            .salary_breakdown(0, &PayPolicy::default())
            .unwrap();

        assert_eq!(result.base, dec("1000"));
        assert_eq!(result.bonus, dec("200"));
        assert_eq!(result.total, dec("1200"));
        assert!(result.reasoning.contains("completion allowance $200"));
    }

    #[test]
    fn test_incomplete_intern_gets_stipend_only() {
        let result = intern("1000", false)
            .salary_breakdown(0, &PayPolicy::default())
            .unwrap();

        assert_eq!(result.total, dec("1000"));
        assert!(!result.bonus_applied);
        assert!(result.reasoning.contains("not completed"));
    }

    #[test]
    fn test_percentage_allowance_on_stipend() {
        let policy = PayPolicy {
            intern: InternPolicy {
                completion_allowance: Bonus::Percent(dec("10")),
            },
            ..PayPolicy::default()
        };
        let result = intern("15000", true).salary_breakdown(0, &policy).unwrap();

        assert_eq!(result.bonus, dec("1500"));
        assert_eq!(result.total, dec("16500"));
        assert!(result.reasoning.contains("10% of $15000 = $1500"));
    }
}
