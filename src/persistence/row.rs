//! Mapping between employees and flat backing-file rows.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Employee, EmployeeKind, FullTime, Intern, PartTime, VariantType};

/// Column names of the backing file, in write order.
pub const HEADER: [&str; 7] = [
    "employee_id",
    "name",
    "years_of_service",
    "variant_type",
    "field1",
    "field2",
    "field3",
];

/// Columns every file must carry; `field1..3` may be absent.
pub const REQUIRED_COLUMNS: [&str; 4] = ["employee_id", "name", "years_of_service", "variant_type"];

/// One row of the backing file, exactly as stored.
///
/// Field meaning depends on `variant_type`:
///
/// | variant_type | field1           | field2          | field3 |
/// |--------------|------------------|-----------------|--------|
/// | `fulltime`   | `monthly_salary` |                 |        |
/// | `parttime`   | `hourly_rate`    | `hours_worked`  |        |
/// | `intern`     | `stipend`        | `completed`     |        |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRow {
    /// Employee ID.
    pub employee_id: String,
    /// Employee name.
    pub name: String,
    /// Years of service, unparsed.
    pub years_of_service: String,
    /// Variant tag, unparsed.
    pub variant_type: String,
    /// First variant field; empty cells read as `None`.
    #[serde(default)]
    pub field1: Option<String>,
    /// Second variant field.
    #[serde(default)]
    pub field2: Option<String>,
    /// Reserved; always written empty.
    #[serde(default)]
    pub field3: Option<String>,
}

impl From<&Employee> for EmployeeRow {
    fn from(employee: &Employee) -> Self {
        let (field1, field2) = match &employee.kind {
            EmployeeKind::FullTime(ft) => (ft.monthly_salary.to_string(), None),
            EmployeeKind::PartTime(pt) => (
                pt.hourly_rate.to_string(),
                Some(pt.hours_worked.to_string()),
            ),
            EmployeeKind::Intern(intern) => {
                (intern.stipend.to_string(), Some(intern.completed.to_string()))
            }
        };

        Self {
            employee_id: employee.employee_id.clone(),
            name: employee.name.clone(),
            years_of_service: employee.years_of_service.to_string(),
            variant_type: employee.variant_type().as_str().to_string(),
            field1: Some(field1),
            field2,
            field3: None,
        }
    }
}

impl EmployeeRow {
    /// Reconstructs the employee this row describes.
    ///
    /// Returns a description of the first problem found when the row is
    /// malformed: a missing required value, an unknown variant tag, a
    /// non-numeric amount or an unreadable flag.
    pub fn into_employee(self) -> Result<Employee, String> {
        if self.employee_id.trim().is_empty() {
            return Err("missing required field 'employee_id'".to_string());
        }

        let years_of_service = parse_years(&self.years_of_service)?;

        let variant = VariantType::from_tag(&self.variant_type)
            .ok_or_else(|| format!("unknown variant_type '{}'", self.variant_type))?;

        let kind = match variant {
            VariantType::FullTime => EmployeeKind::FullTime(FullTime {
                monthly_salary: parse_amount(self.field1.as_deref(), "field1", "monthly_salary")?,
            }),
            VariantType::PartTime => EmployeeKind::PartTime(PartTime {
                hourly_rate: parse_amount(self.field1.as_deref(), "field1", "hourly_rate")?,
                hours_worked: parse_amount(self.field2.as_deref(), "field2", "hours_worked")?,
            }),
            VariantType::Intern => EmployeeKind::Intern(Intern {
                stipend: parse_amount(self.field1.as_deref(), "field1", "stipend")?,
                completed: parse_flag(self.field2.as_deref())?,
            }),
        };

        Ok(Employee {
            employee_id: self.employee_id,
            name: self.name,
            years_of_service,
            kind,
        })
    }
}

fn parse_years(value: &str) -> Result<u32, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("missing required field 'years_of_service'".to_string());
    }
    value
        .parse()
        .map_err(|_| format!("years_of_service '{value}' is not a non-negative integer"))
}

fn parse_amount(value: Option<&str>, column: &str, meaning: &str) -> Result<Decimal, String> {
    let value = value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| format!("missing required field '{column}' ({meaning})"))?;

    Decimal::from_str(value).map_err(|_| format!("{meaning} '{value}' is not a number"))
}

/// Intern rows written by hand or by older tools may say `True`, `1` or `yes`.
fn parse_flag(value: Option<&str>) -> Result<bool, String> {
    let value = value.map(str::trim).unwrap_or_default();
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        "" => Err("missing required field 'field2' (completed)".to_string()),
        _ => Err(format!("completed '{value}' is not true or false")),
    }
}
