//! Employee model and its variants.
//!
//! This module defines the Employee struct, the per-variant field holders
//! and the VariantType discriminator used by the backing file.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Discriminates the three kinds of employment.
///
/// The lowercase tag (`fulltime`, `parttime`, `intern`) is what the backing
/// file stores in its `variant_type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantType {
    /// Salaried full-time employment.
    FullTime,
    /// Hourly part-time employment.
    PartTime,
    /// Internship on a fixed stipend.
    Intern,
}

impl VariantType {
    /// All variants, in display order.
    pub const ALL: [VariantType; 3] = [Self::FullTime, Self::PartTime, Self::Intern];

    /// Returns the tag stored in the backing file.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FullTime => "fulltime",
            Self::PartTime => "parttime",
            Self::Intern => "intern",
        }
    }

    /// Returns the human-readable role label.
    pub fn label(self) -> &'static str {
        match self {
            Self::FullTime => "Full-Time",
            Self::PartTime => "Part-Time",
            Self::Intern => "Intern",
        }
    }

    /// Parses a stored tag, ignoring surrounding whitespace and case.
    ///
    /// # Examples
    ///
    /// ```
    /// use staff_payroll::models::VariantType;
    ///
    /// assert_eq!(VariantType::from_tag(" PartTime "), Some(VariantType::PartTime));
    /// assert_eq!(VariantType::from_tag("contractor"), None);
    /// ```
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        Self::ALL
            .into_iter()
            .find(|variant| variant.as_str().eq_ignore_ascii_case(tag))
    }
}

impl fmt::Display for VariantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields of a full-time employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullTime {
    /// Fixed salary paid every month.
    pub monthly_salary: Decimal,
}

/// Fields of a part-time employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartTime {
    /// Pay per hour worked.
    pub hourly_rate: Decimal,
    /// Hours worked in the pay period.
    pub hours_worked: Decimal,
}

/// Fields of an intern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intern {
    /// Fixed stipend for the period.
    pub stipend: Decimal,
    /// Whether the internship has been completed.
    pub completed: bool,
}

/// The variant-specific part of an employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "variant_type", rename_all = "lowercase")]
pub enum EmployeeKind {
    /// A full-time employee.
    FullTime(FullTime),
    /// A part-time employee.
    PartTime(PartTime),
    /// An intern.
    Intern(Intern),
}

impl EmployeeKind {
    /// Returns the discriminator for this variant.
    pub fn variant_type(&self) -> VariantType {
        match self {
            Self::FullTime(_) => VariantType::FullTime,
            Self::PartTime(_) => VariantType::PartTime,
            Self::Intern(_) => VariantType::Intern,
        }
    }
}

/// An employee held by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Identifier, unique within a registry.
    pub employee_id: String,
    /// Display name.
    pub name: String,
    /// Completed years of service.
    pub years_of_service: u32,
    /// Variant-specific fields.
    #[serde(flatten)]
    pub kind: EmployeeKind,
}

impl Employee {
    /// Creates a full-time employee.
    ///
    /// # Examples
    ///
    /// ```
    /// use staff_payroll::models::{Employee, VariantType};
    /// use rust_decimal::Decimal;
    ///
    /// let alice = Employee::full_time("FT001", "Alice Kumar", 6, Decimal::new(5000, 0));
    /// assert_eq!(alice.variant_type(), VariantType::FullTime);
    /// ```
    pub fn full_time(
        employee_id: impl Into<String>,
        name: impl Into<String>,
        years_of_service: u32,
        monthly_salary: Decimal,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            name: name.into(),
            years_of_service,
            kind: EmployeeKind::FullTime(FullTime { monthly_salary }),
        }
    }

    /// Creates a part-time employee.
    pub fn part_time(
        employee_id: impl Into<String>,
        name: impl Into<String>,
        years_of_service: u32,
        hourly_rate: Decimal,
        hours_worked: Decimal,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            name: name.into(),
            years_of_service,
            kind: EmployeeKind::PartTime(PartTime {
                hourly_rate,
                hours_worked,
            }),
        }
    }

    /// Creates an intern.
    pub fn intern(
        employee_id: impl Into<String>,
        name: impl Into<String>,
        years_of_service: u32,
        stipend: Decimal,
        completed: bool,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            name: name.into(),
            years_of_service,
            kind: EmployeeKind::Intern(Intern { stipend, completed }),
        }
    }

    /// Returns the discriminator for this employee's variant.
    pub fn variant_type(&self) -> VariantType {
        self.kind.variant_type()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_constructors_set_variant() {
        let ft = Employee::full_time("FT001", "Alice", 6, dec("5000"));
        let pt = Employee::part_time("PT101", "Bikash", 1, dec("20"), dec("160"));
        let intern = Employee::intern("IN900", "Charu", 0, dec("1000"), true);

        assert_eq!(ft.variant_type(), VariantType::FullTime);
        assert_eq!(pt.variant_type(), VariantType::PartTime);
        assert_eq!(intern.variant_type(), VariantType::Intern);
        assert_eq!(
            intern.kind,
            EmployeeKind::Intern(Intern {
                stipend: dec("1000"),
                completed: true
            })
        );
    }

    #[test]
    fn test_variant_tags_and_labels() {
        assert_eq!(VariantType::FullTime.as_str(), "fulltime");
        assert_eq!(VariantType::PartTime.as_str(), "parttime");
        assert_eq!(VariantType::Intern.as_str(), "intern");
        assert_eq!(VariantType::FullTime.label(), "Full-Time");
        assert_eq!(VariantType::PartTime.to_string(), "parttime");
    }

    #[test]
    fn test_from_tag_is_case_insensitive() {
        assert_eq!(VariantType::from_tag("FULLTIME"), Some(VariantType::FullTime));
        assert_eq!(VariantType::from_tag("intern\t"), Some(VariantType::Intern));
        assert_eq!(VariantType::from_tag("full-time"), None);
        assert_eq!(VariantType::from_tag(""), None);
    }

    #[test]
    fn test_serialize_employee_flattens_variant() {
        let employee = Employee::part_time("PT101", "Bikash Singh", 2, dec("20.50"), dec("90"));
        let json = serde_json::to_value(&employee).unwrap();

        assert_eq!(json["variant_type"], "parttime");
        assert_eq!(json["hourly_rate"], "20.50");
        assert_eq!(json["employee_id"], "PT101");

        let back: Employee = serde_json::from_value(json).unwrap();
        assert_eq!(back, employee);
    }
}
