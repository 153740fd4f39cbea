use super::HealthCategory;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct NetworkPerformanceInputs {
    pub call_success_rate: Option<f64>,
    pub drop_rate: Option<f64>,
    pub availability: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct VoiceQualityInputs {
    pub mos: Option<f64>,
    pub jitter_ms: Option<f64>,
    pub packet_loss: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct DataExperienceInputs {
    pub throughput_mbps: Option<f64>,
    pub latency_ms: Option<f64>,
    pub session_success_rate: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct AvailabilityInputs {
    pub cell_availability: Option<f64>,
    pub site_uptime: Option<f64>,
    pub transport_availability: Option<f64>,
}

/// Scores from the previous period, supplied by whoever keeps score history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct PreviousScores {
    pub network_performance: Option<f64>,
    pub voice_quality: Option<f64>,
    pub data_experience: Option<f64>,
    pub availability: Option<f64>,
}

impl PreviousScores {
    #[must_use]
    pub const fn get(&self, category: HealthCategory) -> Option<f64> {
        match category {
            HealthCategory::NetworkPerformance => self.network_performance,
            HealthCategory::VoiceQuality => self.voice_quality,
            HealthCategory::DataExperience => self.data_experience,
            HealthCategory::Availability => self.availability,
        }
    }
}

/// Raw measurements for a health computation.
///
/// Every field is optional. An omitted sub-metric takes its documented default
/// and an omitted previous score means the trend is reported as stable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct HealthInputs {
    pub network_performance: NetworkPerformanceInputs,
    pub voice_quality: VoiceQualityInputs,
    pub data_experience: DataExperienceInputs,
    pub availability: AvailabilityInputs,
    pub previous_scores: PreviousScores,
}

impl HealthInputs {
    /// Supplied values for `category`, in the order of [`HealthCategory::sub_metrics`].
    #[must_use]
    pub const fn values(&self, category: HealthCategory) -> [Option<f64>; 3] {
        match category {
            HealthCategory::NetworkPerformance => {
                let i = &self.network_performance;
                [i.call_success_rate, i.drop_rate, i.availability]
            }
            HealthCategory::VoiceQuality => {
                let i = &self.voice_quality;
                [i.mos, i.jitter_ms, i.packet_loss]
            }
            HealthCategory::DataExperience => {
                let i = &self.data_experience;
                [i.throughput_mbps, i.latency_ms, i.session_success_rate]
            }
            HealthCategory::Availability => {
                let i = &self.availability;
                [i.cell_availability, i.site_uptime, i.transport_availability]
            }
        }
    }
}
