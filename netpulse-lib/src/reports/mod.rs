//! Console and JSON output for netpulse commands
//!
//! Each command renders its result through one of two generators:
//! - **console**: aligned plain text, optionally colored with ANSI escapes
//! - **json**: pretty-printed JSON for scripts and dashboards
//!
//! Both modules expose one function per kind of result (counters, KPIs, filter
//! options, metric evaluations and health summaries) and write into any
//! [`core::fmt::Write`], leaving it to the caller to decide where the text goes.
//!
//! Number, status and trend formatting shared by both lives in `common`.

mod common;
pub mod console;
pub mod json;
mod metric_evaluation;

pub use metric_evaluation::MetricEvaluation;
