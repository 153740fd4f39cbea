use super::{Kpi, KpiFilter, Scope, filter_kpis};
use serde::Serialize;
use std::collections::BTreeSet;

/// Distinct values still selectable in each dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub technologies: Vec<String>,
    pub vendors: Vec<String>,
    pub domains: Vec<String>,
    pub categories: Vec<String>,
    pub scopes: Vec<Scope>,
}

/// Facet values present among the KPIs that match `current`.
///
/// Strings are sorted lexicographically; scopes are sorted by display name.
#[must_use]
pub fn available_filter_options(kpis: &[Kpi], current: &KpiFilter) -> FilterOptions {
    let filtered = filter_kpis(kpis, current);

    let mut scopes: Vec<Scope> = Vec::new();
    for kpi in &filtered {
        if !scopes.contains(&kpi.scope) {
            scopes.push(kpi.scope);
        }
    }
    scopes.sort_by_key(|scope| <&'static str>::from(*scope));

    FilterOptions {
        technologies: distinct(&filtered, |k| &*k.technology),
        vendors: distinct(&filtered, |k| &*k.vendor),
        domains: distinct(&filtered, |k| &*k.domain),
        categories: distinct(&filtered, |k| &*k.category),
        scopes,
    }
}

fn distinct<'a>(kpis: &[&'a Kpi], field: impl Fn(&'a Kpi) -> &'a str) -> Vec<String> {
    kpis.iter()
        .map(|kpi| field(*kpi))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
