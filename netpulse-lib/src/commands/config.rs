use crate::Result;
use crate::counters::{Counter, CounterRegistry};
use crate::formula::{DerivedMetric, builtin_derived_metrics};
use crate::health::{DEFAULT_STABLE_TREND_BAND, HealthScorer, StatusBands};
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err, bail};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// File looked up in the base directory when no explicit path is given
pub const DEFAULT_CONFIG_FILE: &str = "netpulse.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Lower bounds of the healthy, acceptable and degraded status bands
    #[serde(default)]
    pub status_bands: StatusBands,

    /// Score changes smaller than this count as a stable trend
    #[serde(default = "default_stable_trend_band")]
    pub stable_trend_band: f64,

    /// Counters added to the built-in registry
    #[serde(default)]
    pub counters: Vec<Counter>,

    /// Derived metrics added to the built-in catalog
    #[serde(default)]
    pub derived_metrics: Vec<DerivedMetric>,
}

const fn default_stable_trend_band() -> f64 {
    DEFAULT_STABLE_TREND_BAND
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or holds invalid values
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading netpulse configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(DEFAULT_CONFIG_FILE);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::info!("no configuration file at '{path}', using defaults");
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading netpulse configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        log::info!(
            "loaded configuration from '{final_path}' ({} extra counters, {} extra derived metrics)",
            config.counters.len(),
            config.derived_metrics.len()
        );

        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if a band is out of range or the bands are not strictly decreasing
    fn validate(&self) -> Result<()> {
        self.status_bands.validate()?;

        if !self.stable_trend_band.is_finite() || self.stable_trend_band < 0.0 {
            return Err(app_err!(
                "stable_trend_band must be a non-negative number, got {}",
                self.stable_trend_band
            ));
        }

        Ok(())
    }

    /// The built-in counters plus those configured here.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured counter has an empty or already registered id
    pub fn registry(&self) -> Result<CounterRegistry> {
        CounterRegistry::with_counters(self.counters.iter().cloned())
    }

    /// The built-in derived metrics followed by those configured here.
    ///
    /// # Errors
    ///
    /// Returns an error if two derived metrics share an id
    pub fn derived_metrics(&self) -> Result<Vec<DerivedMetric>> {
        let mut metrics = builtin_derived_metrics();
        let mut ids: HashSet<String> = metrics.iter().map(|m| m.id().to_string()).collect();

        for metric in &self.derived_metrics {
            if !ids.insert(metric.id().to_string()) {
                bail!("derived metric id '{}' is defined more than once", metric.id());
            }
            metrics.push(metric.clone());
        }

        Ok(metrics)
    }

    #[must_use]
    pub const fn scorer(&self) -> HealthScorer {
        HealthScorer::new(self.status_bands, self.stable_trend_band)
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
