mod logging;

use std::error::Error;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use rust_decimal::Decimal;
use tracing::info;

use staff_payroll::config::PolicyLoader;
use staff_payroll::error::PayrollResult;
use staff_payroll::models::{Employee, PayrollReport};
use staff_payroll::registry::Registry;

const DEFAULT_STORE_PATH: &str = "employees.csv";

/// Show the payroll of the organization's employees.
///
/// Seeds one sample employee of each kind when the backing file does not
/// exist yet.
#[derive(Debug, Parser)]
#[command(name = "staff-payroll", version)]
struct Cli {
    /// Backing CSV file.
    #[arg(default_value = DEFAULT_STORE_PATH)]
    file: PathBuf,

    /// YAML pay policy; built-in defaults are used when omitted.
    #[arg(long, value_name = "FILE")]
    policy: Option<PathBuf>,

    /// Print the payroll report as JSON.
    #[arg(long)]
    json: bool,
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let policy = PolicyLoader::load_or_default(cli.policy.as_deref())?;
    let mut registry = Registry::load(&cli.file, policy)?;

    if registry.is_empty() && !cli.file.exists() {
        info!(path = %cli.file.display(), "Seeding sample employees");
        seed_sample_employees(&mut registry)?;
        registry.save(&cli.file)?;
    }

    let report = registry.payroll_report()?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
        println!("\nEmployee records stored in {}", cli.file.display());
    }
    Ok(())
}

fn seed_sample_employees(registry: &mut Registry) -> PayrollResult<()> {
    registry.add(Employee::full_time(
        "FT001",
        "Alice Kumar",
        7,
        Decimal::new(80000, 0),
    ))?;
    registry.add(Employee::part_time(
        "PT101",
        "Bikash Singh",
        4,
        Decimal::new(500, 0),
        Decimal::new(160, 0),
    ))?;
    registry.add(Employee::intern(
        "IN900",
        "Charu Rai",
        2,
        Decimal::new(15000, 0),
        true,
    ))?;
    Ok(())
}

fn print_report(report: &PayrollReport) {
    println!("Employee Salaries");
    for line in &report.lines {
        println!("{}", "-".repeat(40));
        println!(
            "ID: {} | Name: {} | Role: {}",
            line.employee_id,
            line.name,
            line.variant_type.label()
        );
        println!("Salary: {} ({})", line.salary, line.reasoning);
    }
    println!("{}", "=".repeat(40));
    println!(
        "Employees: {} | Total payroll: {}",
        report.totals.headcount, report.totals.gross_payroll
    );
}
