//! KPI catalog, multi-dimensional filtering and facet derivation
//!
//! A KPI here is catalog metadata: what a metric is called, which technology,
//! vendor and domain it belongs to, the aggregation scope it is reported at and
//! whether higher values are better. The catalog is independent of formula trees.
//!
//! # Filtering
//!
//! [`filter_kpis`] applies a [`KpiFilter`] with one criterion list per
//! dimension. A KPI passes when, for every non-empty list, its value for that
//! dimension is in the list: AND across dimensions, OR within one. An empty list
//! imposes no constraint, so the default filter is the identity.
//!
//! [`available_filter_options`] drives dependent dropdowns: it filters by the
//! current partial selection and then reports the distinct values still present
//! in each dimension.
//!
//! Nothing in this module fails. No matches yields an empty collection.

mod facets;
mod filter;
mod kpi;
mod kpi_def;

pub use facets::{FilterOptions, available_filter_options};
pub use filter::{KpiFilter, filter_kpis, search_kpis};
pub use kpi::{Direction, Kpi, Scope};
pub use kpi_def::{KPI_DEFINITIONS, builtin_kpis};
