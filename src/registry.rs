//! The in-memory employee registry.
//!
//! The registry owns the employees in insertion order, enforces unique IDs,
//! computes pay under its [`PayPolicy`] and hands its records to the
//! persistence layer for saving and loading.

use std::path::Path;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, info};
use uuid::Uuid;

use crate::calculation::checked_sum;
use crate::config::PayPolicy;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, PayrollLine, PayrollReport, PayrollTotals};
use crate::persistence::{read_employees, write_employees};

/// Employees keyed by ID, listed in insertion order.
///
/// Not synchronized; callers that share a registry across threads must
/// serialize access themselves.
///
/// # Example
///
/// ```
/// use staff_payroll::models::Employee;
/// use staff_payroll::registry::Registry;
/// use rust_decimal::Decimal;
///
/// let mut registry = Registry::default();
/// registry.add(Employee::full_time("FT001", "Alice", 6, Decimal::new(5000, 0)))?;
/// registry.add(Employee::intern("IN900", "Charu", 0, Decimal::new(1000, 0), true))?;
///
/// assert_eq!(registry.total_payroll()?, Decimal::new(62200, 0));
/// # Ok::<(), staff_payroll::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    employees: Vec<Employee>,
    policy: PayPolicy,
}

impl Registry {
    /// Creates an empty registry that pays under `policy`.
    pub fn new(policy: PayPolicy) -> Self {
        Self {
            employees: Vec::new(),
            policy,
        }
    }

    /// Loads a registry from the backing file at `path`.
    ///
    /// A missing file yields an empty registry. Anything else that goes
    /// wrong is returned and no registry is built.
    pub fn load<P: AsRef<Path>>(path: P, policy: PayPolicy) -> PayrollResult<Self> {
        let path = path.as_ref();
        let employees = match read_employees(path)? {
            Some(employees) => employees,
            None => {
                info!(path = %path.display(), "Backing file not found, starting empty");
                Vec::new()
            }
        };
        Ok(Self { employees, policy })
    }

    /// Replaces the current employees with the contents of `path`.
    ///
    /// The policy is kept. On error the registry is left untouched.
    pub fn reload<P: AsRef<Path>>(&mut self, path: P) -> PayrollResult<()> {
        let fresh = Self::load(path, self.policy.clone())?;
        self.employees = fresh.employees;
        Ok(())
    }

    /// Writes every employee to `path`, replacing the file atomically.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> PayrollResult<()> {
        write_employees(&self.employees, path.as_ref())
    }

    /// Returns the policy used for salary calculations.
    pub fn policy(&self) -> &PayPolicy {
        &self.policy
    }

    /// Registers `employee` after the existing ones.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` and leaves the registry unchanged if an
    /// employee with the same ID is already present.
    pub fn add(&mut self, employee: Employee) -> PayrollResult<()> {
        if self.contains(&employee.employee_id) {
            return Err(PayrollError::DuplicateId {
                employee_id: employee.employee_id,
            });
        }

        debug!(
            employee_id = %employee.employee_id,
            variant = %employee.variant_type(),
            "Registered employee"
        );
        self.employees.push(employee);
        Ok(())
    }

    /// Removes and returns the employee with `employee_id`.
    ///
    /// The remaining employees keep their relative order.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` and leaves the registry unchanged if no such
    /// employee exists.
    pub fn remove(&mut self, employee_id: &str) -> PayrollResult<Employee> {
        let index = self.position(employee_id)?;
        let removed = self.employees.remove(index);
        debug!(employee_id, "Removed employee");
        Ok(removed)
    }

    /// Looks up an employee by ID.
    pub fn get(&self, employee_id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.employee_id == employee_id)
    }

    /// Returns true if an employee with `employee_id` is registered.
    pub fn contains(&self, employee_id: &str) -> bool {
        self.get(employee_id).is_some()
    }

    /// Returns all employees in insertion order.
    pub fn list(&self) -> &[Employee] {
        &self.employees
    }

    /// Number of registered employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if no employees are registered.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Computes the salary of a single employee.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown ID and `Calculation` if the
    /// salary does not fit a `Decimal`.
    pub fn salary_of(&self, employee_id: &str) -> PayrollResult<Decimal> {
        let index = self.position(employee_id)?;
        self.employees[index].calculate_salary(&self.policy)
    }

    /// Sums the salaries of every registered employee.
    ///
    /// # Errors
    ///
    /// Returns `Calculation` if any salary or the sum does not fit a
    /// `Decimal`.
    pub fn total_payroll(&self) -> PayrollResult<Decimal> {
        let salaries = self
            .employees
            .iter()
            .map(|e| e.calculate_salary(&self.policy))
            .collect::<PayrollResult<Vec<_>>>()?;
        checked_sum(salaries, "total payroll")
    }

    /// Builds a payroll report covering every employee in registry order.
    ///
    /// # Errors
    ///
    /// Fails like [`Registry::total_payroll`].
    pub fn payroll_report(&self) -> PayrollResult<PayrollReport> {
        let lines = self
            .employees
            .iter()
            .map(|employee| {
                let breakdown = employee.salary_breakdown(&self.policy)?;
                Ok(PayrollLine {
                    employee_id: employee.employee_id.clone(),
                    name: employee.name.clone(),
                    variant_type: employee.variant_type(),
                    base: breakdown.base,
                    bonus: breakdown.bonus,
                    salary: breakdown.total,
                    reasoning: breakdown.reasoning,
                })
            })
            .collect::<PayrollResult<Vec<_>>>()?;

        Ok(PayrollReport {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            totals: PayrollTotals::from_lines(&lines)?,
            lines,
        })
    }

    fn position(&self, employee_id: &str) -> PayrollResult<usize> {
        self.employees
            .iter()
            .position(|e| e.employee_id == employee_id)
            .ok_or_else(|| PayrollError::NotFound {
                employee_id: employee_id.to_string(),
            })
    }
}
