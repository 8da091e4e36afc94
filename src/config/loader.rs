//! Policy loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading the pay
//! policy from a YAML file.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{PayrollError, PayrollResult};

use super::types::PayPolicy;

/// Loads the pay policy applied by the salary rules.
///
/// # File Layout
///
/// ```text
/// full_time:
///   tenure_tiers:
///     - { min_years: 5, bonus: "1000" }
///     - { min_years: 10, bonus: { percent: 3 } }
/// part_time:
///   threshold_hours: "150"
///   bonus: "100"
/// intern:
///   completion_allowance: { percent: 10 }
/// ```
///
/// A bare number is a flat amount; `{ percent: N }` pays N per cent of the
/// variant's base pay. Sections left out of the file keep their built-in
/// defaults.
///
/// # Example
///
/// ```no_run
/// use staff_payroll::config::PolicyLoader;
///
/// let policy = PolicyLoader::load("./config/policy.yaml")?;
/// println!("Part-time threshold: {} hours", policy.part_time.threshold_hours);
/// # Ok::<(), staff_payroll::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PolicyLoader;

impl PolicyLoader {
    /// Loads the policy from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns the policy with tenure tiers sorted, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML or wrong field types (`ConfigParse`)
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<PayPolicy> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let policy: PayPolicy =
            serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParse {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        info!(path = %path_str, "Loaded pay policy");
        Ok(policy.normalized())
    }

    /// Loads the policy from `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> PayrollResult<PayPolicy> {
        match path {
            Some(path) => Self::load(path),
            None => {
                debug!("No policy file given, using built-in pay policy");
                Ok(PayPolicy::default())
            }
        }
    }
}
