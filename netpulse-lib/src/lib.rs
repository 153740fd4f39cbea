#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for netpulse
//!
//! This library holds the derived-metric and health-scoring engine behind the
//! netpulse network-operations tooling, plus the command-line front end that
//! drives it.
//!
//! # Module Organization
//!
//! - [`counters`]: Registry of atomic counters and the fixed category taxonomy
//! - [`formula`]: Expression trees over counters, their evaluation and formatting
//! - [`kpis`]: KPI catalog with multi-dimensional filtering and facet derivation
//! - [`health`]: Composite health scoring with status and trend classification
//! - `commands`: Command-line interface and orchestration
//! - `reports`: Console and JSON output
//!
//! Everything in the engine modules is synchronous and side-effect free. Registries
//! and catalogs are plain values built once and passed explicitly to the functions
//! that need them.

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod counters;
pub mod formula;
pub mod health;
pub mod kpis;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

#[cfg(any(debug_assertions, test))]
pub mod reports;
#[cfg(not(any(debug_assertions, test)))]
mod reports;

pub use crate::commands::{Host, run};
