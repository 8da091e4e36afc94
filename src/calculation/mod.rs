//! Salary calculation for the staff payroll registry.
//!
//! Each employee variant implements [`SalaryRule`]: full-time employees earn
//! an annual salary plus a tenure bonus, part-time employees are paid for
//! their hours plus a bonus above a threshold, and interns receive a stipend
//! plus an allowance once their internship is completed. Bonuses are flat
//! sums or percentages of base pay, and all arithmetic is checked.

mod full_time;
mod intern;
mod part_time;
mod salary_rule;

pub use full_time::MONTHS_PER_YEAR;
pub use salary_rule::{SalaryBreakdown, SalaryRule, checked_sum, round_to_cents};
