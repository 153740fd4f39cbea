use core::fmt;

/// How a raw measurement is mapped onto the 0–100 scale before weighting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Normalization {
    /// Already a percentage where higher is better
    AsIs,

    /// `100 − factor × v`, for measurements where lower is better
    Inverted { factor: f64 },

    /// `v / max × 100`
    OfMaximum { max: f64 },
}

impl Normalization {
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::AsIs => value,
            Self::Inverted { factor } => 100.0 - factor * value,
            Self::OfMaximum { max } => value / max * 100.0,
        }
    }
}

impl fmt::Display for Normalization {
    #[expect(clippy::float_cmp, reason = "factors are exact literals from the definition tables")]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AsIs => write!(f, "v"),
            Self::Inverted { factor } if *factor == 1.0 => write!(f, "100 - v"),
            Self::Inverted { factor } if *factor < 1.0 => write!(f, "100 - v / {}", 1.0 / factor),
            Self::Inverted { factor } => write!(f, "100 - {factor}v"),
            Self::OfMaximum { max } => write!(f, "v / {max} x 100"),
        }
    }
}

/// One weighted input of a health category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubMetric {
    /// Field name in [`HealthInputs`](super::HealthInputs) documents
    pub key: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub default: f64,
    pub weight: f64,
    pub normalization: Normalization,
}

impl SubMetric {
    /// Contribution of `value` to the category score.
    #[must_use]
    pub fn weighted(&self, value: f64) -> f64 {
        self.normalization.apply(value) * self.weight
    }
}

macro_rules! sub_metric_def {
    ($key:expr, $label:expr, $unit:expr, $default:expr, $weight:expr, $normalization:expr) => {
        SubMetric {
            key: $key,
            label: $label,
            unit: $unit,
            default: $default,
            weight: $weight,
            normalization: $normalization,
        }
    };
}

pub(super) const NETWORK_PERFORMANCE: &[SubMetric] = &[
    sub_metric_def!("callSuccessRate", "Call Success Rate", "%", 96.5, 0.4, Normalization::AsIs),
    sub_metric_def!("dropRate", "Drop Rate", "%", 2.1, 0.3, Normalization::Inverted { factor: 1.0 }),
    sub_metric_def!("availability", "Availability", "%", 99.2, 0.3, Normalization::AsIs),
];

pub(super) const VOICE_QUALITY: &[SubMetric] = &[
    sub_metric_def!("mos", "MOS", "", 4.2, 0.5, Normalization::OfMaximum { max: 5.0 }),
    sub_metric_def!("jitterMs", "Jitter", "ms", 12.0, 0.25, Normalization::Inverted { factor: 1.0 }),
    sub_metric_def!("packetLoss", "Packet Loss", "%", 0.5, 0.25, Normalization::Inverted { factor: 10.0 }),
];

pub(super) const DATA_EXPERIENCE: &[SubMetric] = &[
    sub_metric_def!("throughputMbps", "Throughput", "Mbps", 45.2, 0.4, Normalization::OfMaximum { max: 50.0 }),
    sub_metric_def!("latencyMs", "Latency", "ms", 28.0, 0.3, Normalization::Inverted { factor: 0.5 }),
    sub_metric_def!("sessionSuccessRate", "Session Success Rate", "%", 98.1, 0.3, Normalization::AsIs),
];

pub(super) const AVAILABILITY: &[SubMetric] = &[
    sub_metric_def!("cellAvailability", "Cell Availability", "%", 99.5, 0.5, Normalization::AsIs),
    sub_metric_def!("siteUptime", "Site Uptime", "%", 99.8, 0.3, Normalization::AsIs),
    sub_metric_def!("transportAvailability", "Transport Availability", "%", 99.9, 0.2, Normalization::AsIs),
];
