//! Pay policy configuration.
//!
//! This module provides functionality to load the organization's pay policy
//! (tenure bonus tiers, the part-time hours bonus and the intern completion
//! allowance) from a YAML file, falling back to built-in defaults.
//!
//! # Example
//!
//! ```no_run
//! use staff_payroll::config::PolicyLoader;
//!
//! let policy = PolicyLoader::load("./config/policy.yaml").unwrap();
//! println!("Intern allowance: {}", policy.intern.completion_allowance);
//! ```

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{Bonus, FullTimePolicy, InternPolicy, PartTimePolicy, PayPolicy, TenureTier};
