use super::sub_metric::{AVAILABILITY, DATA_EXPERIENCE, NETWORK_PERFORMANCE, SubMetric, VOICE_QUALITY};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// The aspects of network wellbeing that get a score card, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr, Display, Serialize, Deserialize)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "camelCase")]
pub enum HealthCategory {
    #[strum(serialize = "Network Performance")]
    NetworkPerformance,

    #[strum(serialize = "Voice Quality")]
    VoiceQuality,

    #[strum(serialize = "Data Experience")]
    DataExperience,

    Availability,
}

impl HealthCategory {
    pub const ALL: [Self; 4] = [Self::NetworkPerformance, Self::VoiceQuality, Self::DataExperience, Self::Availability];

    /// The weighted sub-metrics that make up this category's score.
    #[must_use]
    pub const fn sub_metrics(self) -> &'static [SubMetric] {
        match self {
            Self::NetworkPerformance => NETWORK_PERFORMANCE,
            Self::VoiceQuality => VOICE_QUALITY,
            Self::DataExperience => DATA_EXPERIENCE,
            Self::Availability => AVAILABILITY,
        }
    }

    /// One-line explanation shown under the card.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::NetworkPerformance => "Call setup success, call drops and network availability",
            Self::VoiceQuality => "Perceived voice quality from MOS, jitter and packet loss",
            Self::DataExperience => "User throughput, latency and data session success",
            Self::Availability => "Cell, site and transport availability",
        }
    }
}
