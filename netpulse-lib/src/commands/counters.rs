use super::Host;
use super::common::{Common, CommonArgs};
use crate::Result;
use crate::counters::CounterCategory;
use crate::reports::{console, json};
use clap::Parser;
use std::io::Write;

#[derive(Parser, Debug, Default)]
pub struct CountersArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Only list counters in this category
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<CounterCategory>,

    /// Only list counters whose id, name or description contains this text
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,
}

/// List registered counters, including any added by configuration
pub fn list_counters<H: Host>(host: &mut H, args: &CountersArgs) -> Result<()> {
    let common = Common::new(&args.common)?;
    let registry = common.config.registry()?;

    let selected: Vec<_> = registry
        .search_counters(args.search.as_deref().unwrap_or_default())
        .filter(|counter| args.category.is_none_or(|category| counter.category == category))
        .collect();

    log::info!("{} of {} counters selected", selected.len(), registry.len());

    let mut output = String::new();
    if common.json {
        json::counters(&selected, &mut output)?;
    } else if selected.is_empty() {
        output.push_str("No counters match\n");
    } else {
        console::counters(&selected, common.use_colors(), &mut output)?;
    }

    let _ = write!(host.output(), "{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::host::TestHost;

    #[test]
    fn test_list_all_counters() {
        let mut host = TestHost::new();
        list_counters(&mut host, &CountersArgs::default()).unwrap();

        let output = host.output_str();
        assert!(output.contains("call_drops"));
        assert!(output.contains("Control plane"));
        assert!(output.contains("link_capacity"));
    }

    #[test]
    fn test_list_by_category() {
        let mut host = TestHost::new();
        let args = CountersArgs {
            category: Some(CounterCategory::Transport),
            ..CountersArgs::default()
        };
        list_counters(&mut host, &args).unwrap();

        let output = host.output_str();
        assert!(output.starts_with("Transport\n"));
        assert!(output.contains("if_in_errors"));
        assert!(!output.contains("call_drops"));
    }

    #[test]
    fn test_search_without_matches() {
        let mut host = TestHost::new();
        let args = CountersArgs {
            search: Some("no such counter".to_string()),
            ..CountersArgs::default()
        };
        list_counters(&mut host, &args).unwrap();
        assert_eq!(host.output_str(), "No counters match\n");
    }

    #[test]
    fn test_json_output() {
        let mut host = TestHost::new();
        let args = CountersArgs {
            common: CommonArgs {
                json: true,
                ..CommonArgs::default()
            },
            search: Some("handover".to_string()),
            ..CountersArgs::default()
        };
        list_counters(&mut host, &args).unwrap();

        let json: serde_json::Value = serde_json::from_str(&host.output_str()).unwrap();
        let ids: Vec<_> = json["counters"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ids, ["ho_attempts", "ho_successes"]);
    }
}
