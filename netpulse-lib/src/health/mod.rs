//! Composite health scoring
//!
//! The health view condenses four aspects of the network into 0–100 score cards:
//! network performance, voice quality, data experience and availability.
//!
//! # Implementation Model
//!
//! Each [`HealthCategory`] is a fixed weighted sum over three named
//! sub-metrics ([`SubMetric`]). A sub-metric carries its documented default, its
//! weight and a [`Normalization`] that maps the raw measurement onto the 0–100
//! scale before weighting. Omitted inputs fall back to the defaults, so
//! [`compute_health_summary`] over [`HealthInputs::default`] reproduces the
//! documented baseline.
//!
//! The card score is the weighted sum rounded to the nearest integer. It is not
//! clamped: extreme inputs can push a score outside 0–100, and that is reported
//! as is. [`StatusBands`] classify the score; the trend compares it against a
//! previous-period score that the caller supplies explicitly.

mod health_category;
mod inputs;
mod score_card;
mod scorer;
mod status;
mod sub_metric;
mod trend;

pub use health_category::HealthCategory;
pub use inputs::{AvailabilityInputs, DataExperienceInputs, HealthInputs, NetworkPerformanceInputs, PreviousScores, VoiceQualityInputs};
pub use score_card::{HealthScoreCard, HealthSummary};
pub use scorer::{HealthScorer, compute_health_summary};
pub use status::{HealthStatus, StatusBands};
pub use sub_metric::{Normalization, SubMetric};
pub use trend::{DEFAULT_STABLE_TREND_BAND, Trend, TrendAssessment};
