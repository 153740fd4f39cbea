use super::Host;
use super::common::{Common, CommonArgs};
use crate::Result;
use crate::kpis::{KpiFilter, Scope, available_filter_options, builtin_kpis, search_kpis};
use crate::reports::{console, json};
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug, Default)]
pub struct KpisArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Only list KPIs for these technologies
    #[arg(long = "technology", value_name = "NAME", value_delimiter = ',', help_heading = "Filters")]
    pub technologies: Vec<String>,

    /// Only list KPIs from these vendors
    #[arg(long = "vendor", value_name = "NAME", value_delimiter = ',', help_heading = "Filters")]
    pub vendors: Vec<String>,

    /// Only list KPIs in these domains
    #[arg(long = "domain", value_name = "NAME", value_delimiter = ',', help_heading = "Filters")]
    pub domains: Vec<String>,

    /// Only list KPIs in these categories
    #[arg(long = "category", value_name = "NAME", value_delimiter = ',', help_heading = "Filters")]
    pub categories: Vec<String>,

    /// Only list KPIs reported at these scopes
    #[arg(long = "scope", value_name = "SCOPE", value_delimiter = ',', help_heading = "Filters")]
    pub scopes: Vec<Scope>,

    /// Only list KPIs whose id, name or description contains this text
    #[arg(long, value_name = "TEXT", help_heading = "Filters")]
    pub search: Option<String>,

    /// Show the filter values still available instead of the KPIs
    #[arg(long)]
    pub facets: bool,
}

impl KpisArgs {
    fn filter(&self) -> KpiFilter {
        KpiFilter {
            technologies: self.technologies.clone(),
            vendors: self.vendors.clone(),
            domains: self.domains.clone(),
            categories: self.categories.clone(),
            scopes: self.scopes.clone(),
        }
    }
}

/// List catalog KPIs matching the given filters, or the facet values that remain selectable
pub fn list_kpis<H: Host>(host: &mut H, args: &KpisArgs) -> Result<()> {
    let common = Common::new(&args.common)?;
    let catalog = builtin_kpis();
    let filter = args.filter();

    let mut output = String::new();

    if args.facets {
        let options = available_filter_options(&catalog, &filter);
        if common.json {
            json::filter_options(&options, &mut output)?;
        } else {
            console::filter_options(&options, common.use_colors(), &mut output)?;
        }
    } else {
        let selected: Vec<_> = search_kpis(&catalog, args.search.as_deref().unwrap_or_default())
            .filter(|kpi| filter.matches(kpi))
            .collect();

        log::info!("{} of {} KPIs selected", selected.len(), catalog.len());

        if common.json {
            json::kpis(&selected, &mut output)?;
        } else if selected.is_empty() {
            output.push_str("No KPIs match\n");
        } else {
            console::kpis(&selected, common.use_colors(), &mut output)?;
        }
    }

    let _ = write!(host.output(), "{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::host::TestHost;

    #[test]
    fn test_list_all() {
        let mut host = TestHost::new();
        list_kpis(&mut host, &KpisArgs::default()).unwrap();
        assert_eq!(host.output_str().lines().count(), builtin_kpis().len());
    }

    #[test]
    fn test_filter_by_vendor_and_scope() {
        let mut host = TestHost::new();
        let args = KpisArgs {
            vendors: vec!["Huawei".to_string()],
            scopes: vec![Scope::Site],
            ..KpisArgs::default()
        };
        list_kpis(&mut host, &args).unwrap();

        let output = host.output_str();
        assert!(output.contains("mw_link_availability"));
        assert!(output.lines().all(|line| line.contains("Huawei") && line.ends_with("Site")));
    }

    #[test]
    fn test_search_combines_with_filters() {
        let mut host = TestHost::new();
        let args = KpisArgs {
            technologies: vec!["5G".to_string()],
            search: Some("drop".to_string()),
            ..KpisArgs::default()
        };
        list_kpis(&mut host, &args).unwrap();

        let output = host.output_str();
        assert!(output.starts_with("nr_call_drop_rate"));
        assert!(!output.contains("lte_call_drop_rate"));
    }

    #[test]
    fn test_no_matches() {
        let mut host = TestHost::new();
        let args = KpisArgs {
            vendors: vec!["Nobody".to_string()],
            ..KpisArgs::default()
        };
        list_kpis(&mut host, &args).unwrap();
        assert_eq!(host.output_str(), "No KPIs match\n");
    }

    #[test]
    fn test_facets_json() {
        let mut host = TestHost::new();
        let args = KpisArgs {
            common: CommonArgs {
                json: true,
                ..CommonArgs::default()
            },
            domains: vec!["Transport".to_string()],
            facets: true,
            ..KpisArgs::default()
        };
        list_kpis(&mut host, &args).unwrap();

        let json: serde_json::Value = serde_json::from_str(&host.output_str()).unwrap();
        assert_eq!(json["domains"], serde_json::json!(["Transport"]));
        assert!(json["technologies"].as_array().unwrap().contains(&serde_json::json!("IP")));
    }
}
