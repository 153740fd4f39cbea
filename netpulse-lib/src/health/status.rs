use crate::Result;
use ohno::bail;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Acceptable,
    Degraded,
    Critical,
}

/// Lower bounds of the status bands. A score below `degraded` is critical.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatusBands {
    pub healthy: f64,
    pub acceptable: f64,
    pub degraded: f64,
}

impl StatusBands {
    #[must_use]
    pub fn classify(&self, score: f64) -> HealthStatus {
        if score >= self.healthy {
            HealthStatus::Healthy
        } else if score >= self.acceptable {
            HealthStatus::Acceptable
        } else if score >= self.degraded {
            HealthStatus::Degraded
        } else {
            HealthStatus::Critical
        }
    }

    /// Checks that every bound lies in 0..=100 and that they strictly decrease.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first offending bound.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("healthy", self.healthy), ("acceptable", self.acceptable), ("degraded", self.degraded)] {
            if !(0.0..=100.0).contains(&value) {
                bail!("status band '{name}' must be between 0 and 100, got {value}");
            }
        }

        if self.acceptable >= self.healthy {
            bail!(
                "status band 'acceptable' ({}) must be less than 'healthy' ({})",
                self.acceptable,
                self.healthy
            );
        }

        if self.degraded >= self.acceptable {
            bail!(
                "status band 'degraded' ({}) must be less than 'acceptable' ({})",
                self.degraded,
                self.acceptable
            );
        }

        Ok(())
    }
}

impl Default for StatusBands {
    fn default() -> Self {
        Self {
            healthy: 90.0,
            acceptable: 80.0,
            degraded: 70.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bands() {
        let bands = StatusBands::default();
        assert_eq!(bands.classify(100.0), HealthStatus::Healthy);
        assert_eq!(bands.classify(90.0), HealthStatus::Healthy);
        assert_eq!(bands.classify(89.0), HealthStatus::Acceptable);
        assert_eq!(bands.classify(80.0), HealthStatus::Acceptable);
        assert_eq!(bands.classify(79.0), HealthStatus::Degraded);
        assert_eq!(bands.classify(70.0), HealthStatus::Degraded);
        assert_eq!(bands.classify(69.0), HealthStatus::Critical);
        assert_eq!(bands.classify(-5.0), HealthStatus::Critical);
        assert_eq!(bands.classify(120.0), HealthStatus::Healthy);
    }

    #[test]
    fn test_default_bands_are_valid() {
        StatusBands::default().validate().unwrap();
    }

    #[test]
    fn test_validate_out_of_range() {
        let bands = StatusBands {
            healthy: 101.0,
            ..StatusBands::default()
        };
        assert!(bands.validate().unwrap_err().to_string().contains("healthy"));

        let bands = StatusBands {
            degraded: -1.0,
            ..StatusBands::default()
        };
        assert!(bands.validate().unwrap_err().to_string().contains("degraded"));
    }

    #[test]
    fn test_validate_ordering() {
        let bands = StatusBands {
            healthy: 80.0,
            acceptable: 80.0,
            degraded: 70.0,
        };
        assert!(bands.validate().is_err());

        let bands = StatusBands {
            healthy: 90.0,
            acceptable: 60.0,
            degraded: 70.0,
        };
        assert!(bands.validate().is_err());
    }

    #[test]
    fn test_status_names() {
        assert_eq!(HealthStatus::Acceptable.to_string(), "acceptable");
        assert_eq!(serde_json::to_string(&HealthStatus::Critical).unwrap(), "\"critical\"");
    }

    #[test]
    fn test_bands_from_toml() {
        let bands: StatusBands = toml::from_str("healthy = 95.0\nacceptable = 85.0\ndegraded = 75.0").unwrap();
        assert_eq!(bands.classify(90.0), HealthStatus::Acceptable);
    }
}
