//! Flat-file persistence for the registry.
//!
//! Each employee maps to one CSV row
//! (`employee_id,name,years_of_service,variant_type,field1,field2,field3`)
//! with the `variant_type` column recording which variant to rebuild on
//! load. Writes are atomic; reads abort on the first malformed row.

mod csv_store;
mod row;

pub use csv_store::{read_employees, write_employees};
pub use row::{EmployeeRow, HEADER, REQUIRED_COLUMNS};
