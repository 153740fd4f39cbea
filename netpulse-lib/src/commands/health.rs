use super::Host;
use super::common::{Common, CommonArgs};
use crate::Result;
use crate::health::HealthInputs;
use crate::reports::{console, json};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ohno::IntoAppError;
use std::fs;
use std::io::Write;

#[derive(Parser, Debug, Default)]
pub struct HealthArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// JSON file with health measurements and previous scores (default is to use the built-in defaults)
    #[arg(long, value_name = "PATH")]
    pub input: Option<Utf8PathBuf>,

    /// Show each card's description and how its sub-metrics were scored
    #[arg(long)]
    pub details: bool,
}

fn load_inputs(path: &Utf8Path) -> Result<HealthInputs> {
    let text = fs::read_to_string(path).into_app_err_with(|| format!("reading health inputs from '{path}'"))?;
    serde_json::from_str(&text).into_app_err_with(|| format!("parsing health inputs in '{path}'"))
}

/// Compute and print the network health summary
pub fn compute_health<H: Host>(host: &mut H, args: &HealthArgs) -> Result<()> {
    let common = Common::new(&args.common)?;

    let inputs = match &args.input {
        Some(path) => load_inputs(path)?,
        None => HealthInputs::default(),
    };

    let summary = common.config.scorer().summarize(&inputs);
    log::info!("overall health score is {}", summary.overall_score);

    let mut output = String::new();
    if common.json {
        json::health(&summary, &mut output)?;
    } else {
        console::health(&summary, args.details, common.use_colors(), &mut output)?;
    }

    let _ = write!(host.output(), "{output}");
    Ok(())
}
