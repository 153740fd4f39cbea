use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoStaticStr};

/// Changes smaller than this, in either direction, count as stable.
pub const DEFAULT_STABLE_TREND_BAND: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Stable,
    Degrading,
}

/// Direction and size of the change since the previous period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendAssessment {
    pub trend: Trend,

    /// Score change rounded to one decimal
    pub value: f64,
}

impl TrendAssessment {
    pub const STABLE: Self = Self {
        trend: Trend::Stable,
        value: 0.0,
    };

    /// Compare `score` with `previous`.
    ///
    /// Without a usable previous score there is nothing to compare against and the
    /// trend is stable with a change of 0.
    #[must_use]
    pub fn assess(score: f64, previous: Option<f64>, stable_band: f64) -> Self {
        let Some(previous) = previous.filter(|p| p.is_finite()) else {
            return Self::STABLE;
        };

        let delta = score - previous;
        let trend = if delta.abs() < stable_band {
            Trend::Stable
        } else if delta > 0.0 {
            Trend::Improving
        } else {
            Trend::Degrading
        };

        // + 0.0 folds a rounded -0.0 into 0.0
        let value = (delta * 10.0).round() / 10.0 + 0.0;

        Self { trend, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assess(score: f64, previous: f64) -> TrendAssessment {
        TrendAssessment::assess(score, Some(previous), DEFAULT_STABLE_TREND_BAND)
    }

    #[test]
    fn test_improving() {
        let t = assess(92.0, 89.7);
        assert_eq!(t.trend, Trend::Improving);
        assert!((t.value - 2.3).abs() < 1e-9);
    }

    #[test]
    fn test_degrading() {
        let t = assess(80.0, 84.25);
        assert_eq!(t.trend, Trend::Degrading);
        assert!((t.value + 4.3).abs() < 1e-9);
    }

    #[test]
    fn test_stable_band_is_exclusive() {
        assert_eq!(assess(90.0, 89.6).trend, Trend::Stable);
        assert_eq!(assess(90.0, 90.4).trend, Trend::Stable);
        assert_eq!(assess(90.0, 89.5).trend, Trend::Improving);
        assert_eq!(assess(90.0, 90.5).trend, Trend::Degrading);
    }

    #[test]
    fn test_stable_still_reports_value() {
        let t = assess(90.0, 89.8);
        assert_eq!(t.trend, Trend::Stable);
        assert!((t.value - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_no_previous_score() {
        assert_eq!(TrendAssessment::assess(75.0, None, DEFAULT_STABLE_TREND_BAND), TrendAssessment::STABLE);
        assert_eq!(
            TrendAssessment::assess(75.0, Some(f64::NAN), DEFAULT_STABLE_TREND_BAND),
            TrendAssessment::STABLE
        );
    }

    #[test]
    fn test_tiny_negative_change_is_positive_zero() {
        let t = assess(90.0, 90.01);
        assert_eq!(t.trend, Trend::Stable);
        assert!(t.value.is_sign_positive());
    }

    #[test]
    fn test_custom_band() {
        let t = TrendAssessment::assess(90.0, Some(88.5), 2.0);
        assert_eq!(t.trend, Trend::Stable);
        assert!((t.value - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_trend_names() {
        assert_eq!(Trend::Improving.to_string(), "improving");
        assert_eq!(serde_json::to_string(&Trend::Degrading).unwrap(), "\"degrading\"");
    }
}
