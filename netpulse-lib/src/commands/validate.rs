use super::Host;
use super::config::Config;
use crate::Result;
use crate::formula::StaleCounterName;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ohno::IntoAppError;
use std::io::Write;

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file (default is `netpulse.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,
}

/// A configured formula whose cached counter names have drifted from the registry
#[derive(Debug)]
struct StaleNames {
    metric_id: String,
    names: Vec<StaleCounterName>,
}

/// Loads the configuration and checks every derived metric against the counter registry
///
/// # Errors
///
/// Returns an error if the config file cannot be loaded or parsed, if counters or metric ids
/// collide, or if a formula is malformed or references an unknown counter
fn validate_config_inner(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Vec<StaleNames>> {
    let config = Config::load(base_dir, config_path)?;
    let registry = config.registry()?;
    let metrics = config.derived_metrics()?;

    let mut stale = Vec::new();
    for metric in &metrics {
        metric
            .formula()
            .check(&registry)
            .into_app_err_with(|| format!("checking the formula of derived metric '{}'", metric.id()))?;

        let names = metric.formula().stale_counter_names(&registry);
        if !names.is_empty() {
            stale.push(StaleNames {
                metric_id: metric.id().to_string(),
                names,
            });
        }
    }

    log::info!("checked {} derived metrics against {} counters", metrics.len(), registry.len());
    Ok(stale)
}

pub fn validate_config<H: Host>(host: &mut H, args: &ValidateArgs) -> Result<()> {
    let base_dir = Utf8PathBuf::from(".");
    let config_path = args.config.as_ref();

    match validate_config_inner(&base_dir, config_path) {
        Ok(stale) => {
            for entry in &stale {
                for name in &entry.names {
                    log::warn!("derived metric '{}' caches a stale counter name", entry.metric_id);
                    let _ = writeln!(
                        host.error(),
                        "⚠️ Derived metric '{}' refers to counter '{}' as '{}', but it is now named '{}'",
                        entry.metric_id,
                        name.counter_id,
                        name.cached_name,
                        name.registry_name
                    );
                }
            }

            let _ = writeln!(host.output(), "Configuration file is valid");
            if let Some(path) = config_path {
                let _ = writeln!(host.output(), "Config file: {path}");
            } else {
                let _ = writeln!(host.output(), "Using configuration from the current directory, or defaults if there is none");
            }
            Ok(())
        }
        Err(e) => {
            let _ = writeln!(host.error(), "❌ Configuration validation failed: {e}");
            host.exit(1);
            Err(e)
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::commands::host::TestHost;
    use crate::commands::init::{InitArgs, init_config};
    use std::fs;

    fn write_config(dir: &tempfile::TempDir, text: &str) -> Utf8PathBuf {
        let path = Utf8PathBuf::try_from(dir.path().join("netpulse.toml")).unwrap();
        fs::write(&path, text).unwrap();
        path
    }

    fn validate(config_path: Utf8PathBuf) -> (Result<()>, TestHost) {
        let mut host = TestHost::new();
        let result = validate_config(&mut host, &ValidateArgs { config: Some(config_path) });
        (result, host)
    }

    /// The first line of an error, without its context chain or backtrace
    fn error_message(result: Result<()>) -> String {
        let error_msg = result.unwrap_err().to_string();
        error_msg.lines().next().unwrap_or_default().trim().to_string()
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_default_config_is_valid() {
        let tmp = tempfile::tempdir().unwrap();
        let config_path = Utf8PathBuf::try_from(tmp.path().join("netpulse.toml")).unwrap();

        let mut init_host = TestHost::new();
        init_config(
            &mut init_host,
            &InitArgs {
                output: config_path.clone(),
            },
        )
        .unwrap();

        let (result, host) = validate(config_path);
        assert!(result.is_ok(), "default configuration should validate: {result:?}");
        assert!(host.output_str().starts_with("Configuration file is valid\n"));
        assert!(host.error_str().is_empty());
        assert_eq!(host.exit_code, None);
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_empty_config_is_valid() {
        let tmp = tempfile::tempdir().unwrap();
        let (result, _) = validate(write_config(&tmp, "# Empty config file\n"));
        assert!(result.is_ok(), "empty config should be valid (uses defaults)");
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_invalid_toml_syntax() {
        let tmp = tempfile::tempdir().unwrap();
        let (result, host) = validate(write_config(&tmp, "[[derived_metrics]\nid = \"x\"\n"));

        assert!(result.is_err(), "invalid TOML syntax should fail validation");
        assert!(host.error_str().starts_with("❌ Configuration validation failed"));
        assert_eq!(host.exit_code, Some(1));
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_unknown_counter_reference() {
        let tmp = tempfile::tempdir().unwrap();
        let config = r#"
[[derived_metrics]]
id = "ghost_rate"
name = "Ghost Rate"
category = "Radio"
unit = "%"

[derived_metrics.formula]
type = "counter"
counterId = "ghost_events"
"#;
        let (result, host) = validate(write_config(&tmp, config));

        assert_eq!(host.exit_code, Some(1));
        let message = error_message(result);
        assert!(message.contains("ghost_rate") || message.contains("ghost_events"), "unexpected error: {message}");
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_malformed_formula() {
        let tmp = tempfile::tempdir().unwrap();
        let config = r#"
[[derived_metrics]]
id = "half"
name = "Half"
category = "Traffic"
unit = ""

[derived_metrics.formula]
type = "operator"
operator = "/"

[[derived_metrics.formula.children]]
type = "counter"
counterId = "dl_volume_mb"
"#;
        let (result, host) = validate(write_config(&tmp, config));
        assert!(result.is_err(), "operator with one child should fail validation");
        assert_eq!(host.exit_code, Some(1));
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_duplicate_metric_id() {
        let tmp = tempfile::tempdir().unwrap();
        let config = r#"
[[derived_metrics]]
id = "call_drop_rate"
name = "Call Drop Rate"
category = "Radio"
unit = "%"

[derived_metrics.formula]
type = "number"
value = 1.0
"#;
        let (result, _) = validate(write_config(&tmp, config));
        let message = error_message(result);
        assert!(message.contains("call_drop_rate"), "unexpected error: {message}");
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_configured_counter_makes_formula_valid() {
        let tmp = tempfile::tempdir().unwrap();
        let config = r#"
[[counters]]
id = "volte_drops"
name = "VoLTE Drops"
category = "Radio"
unit = "count"

[[derived_metrics]]
id = "volte_drop_share"
name = "VoLTE Drop Share"
category = "Radio"
unit = "%"

[derived_metrics.formula]
type = "operator"
operator = "%"

[[derived_metrics.formula.children]]
type = "operator"
operator = "/"

[[derived_metrics.formula.children.children]]
type = "counter"
counterId = "volte_drops"
counterName = "VoLTE Drops"

[[derived_metrics.formula.children.children]]
type = "counter"
counterId = "call_drops"
counterName = "Call Drops"

[[derived_metrics.formula.children]]
type = "number"
value = 100.0
"#;
        let (result, host) = validate(write_config(&tmp, config));
        assert!(result.is_ok(), "configured counters should be resolvable: {result:?}");
        assert!(host.error_str().is_empty());
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_stale_counter_name_is_a_warning() {
        let tmp = tempfile::tempdir().unwrap();
        let config = r#"
[[derived_metrics]]
id = "drops"
name = "Drops"
category = "Radio"
unit = "count"

[derived_metrics.formula]
type = "counter"
counterId = "call_drops"
counterName = "Dropped Calls"
"#;
        let (result, host) = validate(write_config(&tmp, config));
        assert!(result.is_ok(), "stale names should not fail validation: {result:?}");
        assert_eq!(
            host.error_str(),
            "⚠️ Derived metric 'drops' refers to counter 'call_drops' as 'Dropped Calls', but it is now named 'Call Drops'\n"
        );
        assert!(host.output_str().contains("Configuration file is valid"));
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_invalid_status_bands() {
        let tmp = tempfile::tempdir().unwrap();
        let (result, _) = validate(write_config(&tmp, "[status_bands]\nhealthy = 90.0\nacceptable = 90.0\ndegraded = 70.0\n"));

        insta::assert_snapshot!(error_message(result), @"status band 'acceptable' (90) must be less than 'healthy' (90)");
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_missing_config_file() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = Utf8PathBuf::try_from(tmp.path().join("missing.toml")).unwrap();
        let (result, host) = validate(missing);
        assert!(result.is_err());
        assert_eq!(host.exit_code, Some(1));
    }
}
