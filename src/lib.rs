//! Staff payroll registry
//!
//! This crate keeps a registry of full-time, part-time and intern employees,
//! computes each one's pay under a configurable pay policy and persists the
//! registry to a flat CSV file.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod persistence;
pub mod registry;
