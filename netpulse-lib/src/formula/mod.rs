//! Derived-metric formulas over counters
//!
//! This module implements the small expression language used to define derived
//! KPIs such as "call drop rate" in terms of raw counters.
//!
//! # Implementation Model
//!
//! A formula is a [`FormulaNode`] tree. Every node is exactly one of:
//! - an operator applied to two children,
//! - a reference to a counter by id (with a cached display name), or
//! - a literal number.
//!
//! Trees are finite and acyclic by construction. They serialize to the tagged
//! shape `{type, operator?, children?, counterId?, counterName?, value?}` so they
//! can be stored in configuration files and API payloads.
//!
//! [`evaluate`] walks a tree post-order against a [`CounterValues`] provider. A
//! division by zero does not fail: it yields [`Evaluation::Indeterminate`], which
//! then propagates through every enclosing operator so that a dashboard can show
//! "no data" for one metric instead of failing as a whole. Only structural
//! problems and unresolvable counter references are reported as [`FormulaError`].
//!
//! [`format`] turns a tree back into a fully parenthesized formula string. It is
//! independent of the evaluator and never looks at counter values.
//!
//! [`DerivedMetric`] wraps a formula with its metadata and caches the formatted
//! text. The built-in catalog is returned by [`builtin_derived_metrics`].

mod derived_def;
mod derived_metric;
mod error;
mod evaluation;
mod evaluator;
mod formatter;
mod formula_node;
mod operator;

pub use derived_def::builtin_derived_metrics;
pub use derived_metric::DerivedMetric;
pub use error::FormulaError;
pub use evaluation::Evaluation;
pub use evaluator::{CounterValues, evaluate};
pub use formatter::format;
pub use formula_node::{FormulaNode, StaleCounterName};
pub use operator::Operator;
