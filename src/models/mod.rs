//! Core data models for the staff payroll registry.
//!
//! This module contains the employee records and the payroll report types.

mod employee;
mod payroll_report;

pub use employee::{Employee, EmployeeKind, FullTime, Intern, PartTime, VariantType};
pub use payroll_report::{PayrollLine, PayrollReport, PayrollTotals};
