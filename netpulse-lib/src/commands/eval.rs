use super::Host;
use super::common::{Common, CommonArgs};
use crate::Result;
use crate::formula::DerivedMetric;
use crate::reports::{MetricEvaluation, console, json};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ohno::{IntoAppError, bail};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct EvalArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// JSON file holding an object that maps counter ids to their values
    #[arg(long, value_name = "PATH")]
    pub values: Utf8PathBuf,

    /// Only evaluate these derived metrics (default is all of them)
    #[arg(long = "metric", value_name = "ID", value_delimiter = ',')]
    pub metrics: Vec<String>,
}

/// Read counter values from a JSON object such as `{ "call_drops": 12, "total_call_attempts": 1500 }`
fn load_values(path: &Utf8Path) -> Result<BTreeMap<String, f64>> {
    let text = fs::read_to_string(path).into_app_err_with(|| format!("reading counter values from '{path}'"))?;
    let values: BTreeMap<String, f64> = serde_json::from_str(&text).into_app_err_with(|| format!("parsing counter values in '{path}'"))?;

    log::info!("loaded {} counter values from '{path}'", values.len());
    Ok(values)
}

fn select<'a>(metrics: &'a [DerivedMetric], ids: &[String]) -> Result<Vec<&'a DerivedMetric>> {
    if ids.is_empty() {
        return Ok(metrics.iter().collect());
    }

    let mut selected = Vec::with_capacity(ids.len());
    for id in ids {
        let Some(metric) = metrics.iter().find(|m| m.id() == id) else {
            bail!("unknown derived metric '{id}'");
        };
        selected.push(metric);
    }

    Ok(selected)
}

/// Evaluate derived metrics against a set of counter values
pub fn eval_metrics<H: Host>(host: &mut H, args: &EvalArgs) -> Result<()> {
    let common = Common::new(&args.common)?;
    let metrics = common.config.derived_metrics()?;
    let values = load_values(&args.values)?;

    let results: Vec<_> = select(&metrics, &args.metrics)?
        .into_iter()
        .map(|metric| {
            let outcome = metric.evaluate(&values);
            if let Err(e) = &outcome {
                log::warn!("could not evaluate '{}': {e}", metric.id());
            }
            MetricEvaluation::new(metric, outcome)
        })
        .collect();

    let mut output = String::new();
    if common.json {
        json::evaluations(&results, &mut output)?;
    } else {
        console::evaluations(&results, common.use_colors(), &mut output)?;
    }

    let _ = write!(host.output(), "{output}");
    Ok(())
}
