//! Registry of atomic network counters
//!
//! A counter is a single measured quantity reported by the network, such as the
//! number of RRC setup attempts in a cell. Counters are the leaves of every
//! derived-metric formula.
//!
//! # Implementation Model
//!
//! The built-in counters are declared in a static definition table
//! (`counter_def.rs`). A [`CounterRegistry`] is built once from that table,
//! optionally extended with counters supplied by configuration, and is read-only
//! from then on. Lookups and searches are linear scans; the catalog is small and
//! fixed at startup.
//!
//! [`CounterCategory`] is a closed taxonomy of four values. [`all_categories`]
//! always reports all four, whether or not the registry currently holds a counter
//! in each of them. The taxonomy is meant to stay stable as the catalog grows.

mod counter;
mod counter_category;
mod counter_def;
mod registry;

pub use counter::Counter;
pub use counter_category::{CounterCategory, all_categories};
pub use counter_def::COUNTER_DEFINITIONS;
pub use registry::CounterRegistry;
