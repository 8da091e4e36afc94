//! Reading and writing the CSV backing file.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use tempfile::NamedTempFile;
use tracing::{info, warn};

use crate::error::{PayrollError, PayrollResult};
use crate::models::Employee;

use super::row::{EmployeeRow, HEADER, REQUIRED_COLUMNS};

/// Writes `employees` to `path`, replacing any existing file.
///
/// The rows go to a temporary file in the same directory which is renamed
/// over `path` only once fully written, so a failure never leaves a
/// half-written backing file. The temporary file is removed on every error
/// path.
///
/// # Errors
///
/// Returns `Io` if the directory is not writable or the rename fails.
///
/// # Example
///
/// ```no_run
/// use staff_payroll::models::Employee;
/// use staff_payroll::persistence::write_employees;
/// use rust_decimal::Decimal;
///
/// let staff = vec![Employee::full_time("FT001", "Alice", 6, Decimal::new(5000, 0))];
/// write_employees(&staff, "employees.csv".as_ref())?;
/// # Ok::<(), staff_payroll::error::PayrollError>(())
/// ```
pub fn write_employees(employees: &[Employee], path: &Path) -> PayrollResult<()> {
    let io_error = |source: io::Error| PayrollError::Io {
        path: path.display().to_string(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(io_error)?;
    write_rows(employees, temp.as_file_mut()).map_err(io_error)?;
    temp.as_file().sync_all().map_err(io_error)?;
    temp.persist(path).map_err(|e| io_error(e.error))?;

    info!(path = %path.display(), count = employees.len(), "Saved employee records");
    Ok(())
}

fn write_rows<W: Write>(employees: &[Employee], out: W) -> io::Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(out);
    writer.write_record(HEADER)?;
    for employee in employees {
        writer.serialize(EmployeeRow::from(employee))?;
    }
    writer.flush()
}

/// Reads every employee from `path`.
///
/// Column positions come from the header row, so column order does not
/// matter and the `field1..3` columns may be omitted. Returns `Ok(None)`
/// when the file does not exist.
///
/// Loading aborts on the first malformed row: a missing required value,
/// an unknown `variant_type`, a non-numeric amount or a repeated
/// `employee_id` all fail with `Parse` naming the line.
pub fn read_employees(path: &Path) -> PayrollResult<Option<Vec<Employee>>> {
    let path_str = path.display().to_string();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(PayrollError::Io {
                path: path_str,
                source,
            });
        }
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(BufReader::new(file));

    let headers = reader
        .headers()
        .map_err(|e| csv_error(&path_str, e))?
        .clone();

    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|column| !headers.iter().any(|h| h == **column))
    {
        return Err(parse_error(
            &path_str,
            1,
            format!("header is missing column '{missing}'"),
        ));
    }

    let mut employees = Vec::new();
    let mut seen = HashSet::new();

    for result in reader.records() {
        let record = result.map_err(|e| csv_error(&path_str, e))?;
        let line = record.position().map_or(0, |p| p.line());

        let row: EmployeeRow = record
            .deserialize(Some(&headers))
            .map_err(|e| parse_error(&path_str, line, e.to_string()))?;
        let employee = row
            .into_employee()
            .map_err(|message| parse_error(&path_str, line, message))?;

        if !seen.insert(employee.employee_id.clone()) {
            return Err(parse_error(
                &path_str,
                line,
                format!("duplicate employee_id '{}'", employee.employee_id),
            ));
        }
        employees.push(employee);
    }

    info!(path = %path_str, count = employees.len(), "Loaded employee records");
    Ok(Some(employees))
}

fn parse_error(path: &str, line: u64, message: String) -> PayrollError {
    warn!(path, line, error = %message, "Aborting load on malformed row");
    PayrollError::Parse {
        path: path.to_string(),
        line,
        message,
    }
}

fn csv_error(path: &str, err: csv::Error) -> PayrollError {
    let line = err.position().map_or(0, |p| p.line());
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => PayrollError::Io {
            path: path.to_string(),
            source,
        },
        _ => parse_error(path, line, message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::fs;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_staff() -> Vec<Employee> {
        vec![
            Employee::full_time("FT001", "Alice Kumar", 6, dec("5000")),
            Employee::part_time("PT101", "Bikash Singh", 1, dec("20.50"), dec("160")),
            Employee::intern("IN900", "Charu Rai", 0, dec("1000"), true),
        ]
    }

    #[test]
    fn test_write_emits_header_and_rows_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.csv");

        write_employees(&sample_staff(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            vec![
                "employee_id,name,years_of_service,variant_type,field1,field2,field3",
                "FT001,Alice Kumar,6,fulltime,5000,,",
                "PT101,Bikash Singh,1,parttime,20.50,160,",
                "IN900,Charu Rai,0,intern,1000,true,",
            ]
        );
    }

    #[test]
    fn test_write_empty_registry_still_writes_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.csv");

        write_employees(&[], &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content.trim_end(),
            "employee_id,name,years_of_service,variant_type,field1,field2,field3"
        );
        assert_eq!(read_employees(&path).unwrap(), Some(vec![]));
    }

    #[test]
    fn test_write_then_read_preserves_everything() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.csv");
        let staff = sample_staff();

        write_employees(&staff, &path).unwrap();
        let loaded = read_employees(&path).unwrap().unwrap();

        assert_eq!(loaded, staff);
    }

    #[test]
    fn test_names_with_commas_and_quotes_survive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.csv");
        let staff = vec![Employee::full_time(
            "FT002",
            "Kumar, \"Al\" Alice",
            3,
            dec("4200.10"),
        )];

        write_employees(&staff, &path).unwrap();
        assert_eq!(read_employees(&path).unwrap().unwrap(), staff);
    }

    #[test]
    fn test_write_replaces_previous_content_and_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.csv");

        write_employees(&sample_staff(), &path).unwrap();
        write_employees(&sample_staff()[..1], &path).unwrap();

        assert_eq!(read_employees(&path).unwrap().unwrap().len(), 1);
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_write_to_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("employees.csv");

        let result = write_employees(&sample_staff(), &path);
        match result {
            Err(PayrollError::Io { path: p, .. }) => assert!(p.ends_with("employees.csv")),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_employees(&dir.path().join("absent.csv")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_read_uses_header_positions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.csv");
        fs::write(
            &path,
            "variant_type,field2,field1,name,employee_id,years_of_service\n\
             parttime,90,12.5,Dana,PT7,2\n\
             fulltime,,3000,Eli,FT8,11\n",
        )
        .unwrap();

        let loaded = read_employees(&path).unwrap().unwrap();
        assert_eq!(
            loaded,
            vec![
                Employee::part_time("PT7", "Dana", 2, dec("12.5"), dec("90")),
                Employee::full_time("FT8", "Eli", 11, dec("3000")),
            ]
        );
    }

    #[test]
    fn test_read_aborts_on_unknown_variant_with_line_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.csv");
        fs::write(
            &path,
            "employee_id,name,years_of_service,variant_type,field1,field2,field3\n\
             FT001,Alice,6,fulltime,5000,,\n\
             CT001,Zed,1,contractor,10,,\n",
        )
        .unwrap();

        match read_employees(&path) {
            Err(PayrollError::Parse { line, message, .. }) => {
                assert_eq!(line, 3);
                assert!(message.contains("contractor"));
            }
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_aborts_on_non_numeric_amount() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.csv");
        fs::write(
            &path,
            "employee_id,name,years_of_service,variant_type,field1,field2,field3\n\
             IN1,Ivy,0,intern,lots,true,\n",
        )
        .unwrap();

        match read_employees(&path) {
            Err(PayrollError::Parse { line, message, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(message, "stipend 'lots' is not a number");
            }
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_rejects_missing_header_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.csv");
        fs::write(&path, "employee_id,name,variant_type,field1\nFT1,A,fulltime,1\n").unwrap();

        match read_employees(&path) {
            Err(PayrollError::Parse { line, message, .. }) => {
                assert_eq!(line, 1);
                assert!(message.contains("years_of_service"));
            }
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_rejects_short_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.csv");
        fs::write(
            &path,
            "employee_id,name,years_of_service,variant_type,field1,field2,field3\n\
             FT1,A,1\n",
        )
        .unwrap();

        assert!(matches!(
            read_employees(&path),
            Err(PayrollError::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn test_read_rejects_duplicate_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.csv");
        fs::write(
            &path,
            "employee_id,name,years_of_service,variant_type,field1,field2,field3\n\
             FT1,A,1,fulltime,10,,\n\
             FT1,B,2,fulltime,20,,\n",
        )
        .unwrap();

        match read_employees(&path) {
            Err(PayrollError::Parse { line, message, .. }) => {
                assert_eq!(line, 3);
                assert!(message.contains("duplicate employee_id 'FT1'"));
            }
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_rejects_invalid_utf8_with_line_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.csv");
        fs::write(
            &path,
            b"employee_id,name,years_of_service,variant_type,field1,field2,field3\n\
              FT1,\xff\xfe,1,fulltime,10,,\n",
        )
        .unwrap();

        assert!(matches!(
            read_employees(&path),
            Err(PayrollError::Parse { line: 2, .. })
        ));
    }
}
