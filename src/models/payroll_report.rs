//! Payroll report models.
//!
//! This module contains the [`PayrollReport`] type and its associated
//! structures that capture the salary of every registered employee along
//! with the aggregated totals.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::VariantType;
use crate::calculation::checked_sum;
use crate::error::PayrollResult;

/// One employee's pay within a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollLine {
    /// The employee's ID.
    pub employee_id: String,
    /// The employee's name.
    pub name: String,
    /// The employee's variant.
    pub variant_type: VariantType,
    /// Pay before bonuses and allowances.
    pub base: Decimal,
    /// Tenure bonus, hours bonus or completion allowance.
    pub bonus: Decimal,
    /// The total salary (base + bonus).
    pub salary: Decimal,
    /// Human-readable explanation of the figure.
    pub reasoning: String,
}

/// Aggregated totals for a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// Number of employees covered.
    pub headcount: usize,
    /// Sum of all base amounts.
    pub base_total: Decimal,
    /// Sum of all bonuses and allowances.
    pub bonus_total: Decimal,
    /// Sum of all salaries.
    pub gross_payroll: Decimal,
}

impl PayrollTotals {
    /// Sums the given lines.
    ///
    /// # Errors
    ///
    /// Returns `Calculation` if any total does not fit a `Decimal`.
    pub fn from_lines(lines: &[PayrollLine]) -> PayrollResult<Self> {
        Ok(Self {
            headcount: lines.len(),
            base_total: checked_sum(lines.iter().map(|l| l.base), "base total")?,
            bonus_total: checked_sum(lines.iter().map(|l| l.bonus), "bonus total")?,
            gross_payroll: checked_sum(lines.iter().map(|l| l.salary), "gross payroll")?,
        })
    }
}

/// A payroll snapshot of the whole registry.
///
/// # Example
///
/// ```
/// use staff_payroll::models::{PayrollReport, PayrollTotals};
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let report = PayrollReport {
///     report_id: Uuid::new_v4(),
///     generated_at: Utc::now(),
///     lines: vec![],
///     totals: PayrollTotals::from_lines(&[])?,
/// };
/// assert_eq!(report.totals.headcount, 0);
/// # Ok::<(), staff_payroll::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was produced.
    pub generated_at: DateTime<Utc>,
    /// One line per employee, in registry order.
    pub lines: Vec<PayrollLine>,
    /// Aggregated totals.
    pub totals: PayrollTotals,
}
