use super::{Kpi, Scope};
use serde::{Deserialize, Serialize};

/// Selection criteria for [`filter_kpis`].
///
/// Each list is one dimension. An empty list means "any value".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KpiFilter {
    pub technologies: Vec<String>,
    pub vendors: Vec<String>,
    pub domains: Vec<String>,
    pub categories: Vec<String>,
    pub scopes: Vec<Scope>,
}

impl KpiFilter {
    /// `true` when no dimension constrains the selection.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        [&self.technologies, &self.vendors, &self.domains, &self.categories]
            .iter()
            .all(|values| values.iter().all(|v| v.trim().is_empty()))
            && self.scopes.is_empty()
    }

    #[must_use]
    pub fn matches(&self, kpi: &Kpi) -> bool {
        allows(&self.technologies, &kpi.technology)
            && allows(&self.vendors, &kpi.vendor)
            && allows(&self.domains, &kpi.domain)
            && allows(&self.categories, &kpi.category)
            && (self.scopes.is_empty() || self.scopes.contains(&kpi.scope))
    }
}

/// Membership test for one string dimension. Blank entries carry no constraint.
fn allows(selected: &[String], value: &str) -> bool {
    let mut constrained = false;
    for candidate in selected.iter().filter(|s| !s.trim().is_empty()) {
        if candidate == value {
            return true;
        }
        constrained = true;
    }

    !constrained
}

/// KPIs matching every non-empty dimension of `filter`, in catalog order.
#[must_use]
pub fn filter_kpis<'a>(kpis: &'a [Kpi], filter: &KpiFilter) -> Vec<&'a Kpi> {
    kpis.iter().filter(|kpi| filter.matches(kpi)).collect()
}

/// Case-insensitive substring search over KPI names, descriptions and ids.
///
/// A blank query matches every KPI.
pub fn search_kpis<'a>(kpis: &'a [Kpi], query: &str) -> impl Iterator<Item = &'a Kpi> {
    let needle = query.trim().to_lowercase();
    kpis.iter().filter(move |kpi| needle.is_empty() || kpi.matches_lowercase(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kpis::builtin_kpis;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let kpis = builtin_kpis();
        let filtered = filter_kpis(&kpis, &KpiFilter::default());
        assert_eq!(filtered.len(), kpis.len());
        assert!(filtered.iter().zip(&kpis).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn test_single_technology() {
        let kpis = builtin_kpis();
        let filter = KpiFilter {
            technologies: strings(&["5G"]),
            ..KpiFilter::default()
        };

        let filtered = filter_kpis(&kpis, &filter);
        let expected: Vec<_> = kpis.iter().filter(|k| k.technology == "5G").collect();
        assert_eq!(filtered, expected);
        assert!(!filtered.is_empty());
    }

    #[test]
    fn test_or_within_dimension() {
        let kpis = builtin_kpis();
        let filter = KpiFilter {
            vendors: strings(&["Cisco", "Juniper"]),
            ..KpiFilter::default()
        };

        let filtered = filter_kpis(&kpis, &filter);
        assert!(filtered.iter().all(|k| k.vendor == "Cisco" || k.vendor == "Juniper"));
        assert!(filtered.iter().any(|k| k.vendor == "Cisco"));
        assert!(filtered.iter().any(|k| k.vendor == "Juniper"));
    }

    #[test]
    fn test_and_across_dimensions() {
        let kpis = builtin_kpis();
        let filter = KpiFilter {
            technologies: strings(&["4G"]),
            domains: strings(&["Core"]),
            scopes: vec![Scope::Region],
            ..KpiFilter::default()
        };

        let filtered = filter_kpis(&kpis, &filter);
        let ids: Vec<_> = filtered.iter().map(|k| &*k.id).collect();
        assert_eq!(ids, ["epc_attach_sr"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let kpis = builtin_kpis();
        let filter = KpiFilter {
            technologies: strings(&["IP"]),
            domains: strings(&["RAN"]),
            ..KpiFilter::default()
        };
        assert!(filter_kpis(&kpis, &filter).is_empty());
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let kpis = builtin_kpis();
        let filter = KpiFilter {
            technologies: strings(&["5g"]),
            ..KpiFilter::default()
        };
        assert!(filter_kpis(&kpis, &filter).is_empty());
    }

    #[test]
    fn test_blank_entries_impose_no_constraint() {
        let kpis = builtin_kpis();
        let filter = KpiFilter {
            vendors: strings(&["", "  "]),
            ..KpiFilter::default()
        };
        assert!(filter.is_unconstrained());
        assert_eq!(filter_kpis(&kpis, &filter).len(), kpis.len());
    }

    #[test]
    fn test_output_preserves_catalog_order() {
        let kpis = builtin_kpis();
        let filter = KpiFilter {
            categories: strings(&["Accessibility"]),
            ..KpiFilter::default()
        };

        let filtered = filter_kpis(&kpis, &filter);
        let positions: Vec<_> = filtered
            .iter()
            .map(|k| kpis.iter().position(|c| c.id == k.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_filter_deserializes_partial_criteria() {
        let filter: KpiFilter = serde_json::from_str(r#"{"technologies": ["5G"], "scopes": ["Cell"]}"#).unwrap();
        assert_eq!(filter.technologies, ["5G"]);
        assert_eq!(filter.scopes, [Scope::Cell]);
        assert!(filter.vendors.is_empty());
    }

    #[test]
    fn test_search_kpis() {
        let kpis = builtin_kpis();
        let hits: Vec<_> = search_kpis(&kpis, "  THROUGHPUT ").map(|k| &*k.id).collect();
        assert_eq!(hits, ["lte_dl_throughput", "nr_dl_throughput"]);

        assert_eq!(search_kpis(&kpis, "").count(), kpis.len());
        assert_eq!(search_kpis(&kpis, "no such kpi").count(), 0);
    }
}
