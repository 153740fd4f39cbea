//! Command-line interface and orchestration for netpulse
//!
//! This module implements the CLI commands on top of the engine modules. It handles
//! argument parsing, configuration management, and writing reports to the host.
//!
//! # Implementation Model
//!
//! ## Commands
//!
//! - **counters**: List the counter registry, optionally narrowed by category or search text
//! - **kpis**: Browse the KPI catalog with multi-dimensional filters, or show the
//!   facet values that remain selectable under those filters
//! - **eval**: Evaluate derived metrics against counter values read from a JSON file
//! - **health**: Compute the four health score cards and the overall score
//! - **init**: Generate a default configuration file
//! - **validate**: Check that the configuration parses and that every derived metric
//!   formula resolves against the counter registry
//!
//! ## Execution Flow
//!
//! The `run` function parses command-line arguments using clap and routes
//! to the appropriate command handler. The reporting commands follow the same pattern:
//!
//! 1. Initialize logging and load configuration (`common`)
//! 2. Build the counter registry and derived metric catalog from built-ins plus configuration
//! 3. Run the engine operation
//! 4. Render the result as console text or JSON and write it to the host
//!
//! Configuration is a TOML file holding the status bands, the stable trend band, and
//! any extra counters and derived metrics.

mod common;
mod config;
mod counters;
mod eval;
mod health;
mod host;
mod init;
mod kpis;
mod run;
mod validate;

#[cfg(debug_assertions)]
pub use config::Config;

pub use counters::{CountersArgs, list_counters};
pub use eval::{EvalArgs, eval_metrics};
pub use health::{HealthArgs, compute_health};
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use kpis::{KpisArgs, list_kpis};
pub use run::run;
pub use validate::{ValidateArgs, validate_config};
