//! Command dispatch logic for netpulse

use super::{
    CountersArgs, EvalArgs, HealthArgs, InitArgs, KpisArgs, ValidateArgs, compute_health, eval_metrics, init_config, list_counters,
    list_kpis, validate_config,
};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "netpulse", version, author, long_about = None)]
#[command(about = "Evaluate derived network KPIs and health scores")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: NetpulseSubcommand,
}

#[derive(Subcommand, Debug)]
enum NetpulseSubcommand {
    /// List the counters available to formulas
    Counters(CountersArgs),
    /// Browse and filter the KPI catalog
    Kpis(Box<KpisArgs>),
    /// Evaluate derived metrics against counter values
    Eval(EvalArgs),
    /// Compute the network health summary
    Health(HealthArgs),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// This function parses the command-line arguments and executes the corresponding
/// subcommand. It's designed to be called from main.rs with the program arguments.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if command parsing fails or if the executed command fails
pub fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    match &Cli::parse_from(args).command {
        NetpulseSubcommand::Counters(counters_args) => list_counters(host, counters_args),
        NetpulseSubcommand::Kpis(kpis_args) => list_kpis(host, kpis_args),
        NetpulseSubcommand::Eval(eval_args) => eval_metrics(host, eval_args),
        NetpulseSubcommand::Health(health_args) => compute_health(host, health_args),
        NetpulseSubcommand::Init(init_args) => init_config(host, init_args),
        NetpulseSubcommand::Validate(validate_args) => validate_config(host, validate_args),
    }
}
