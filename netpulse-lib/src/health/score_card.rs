use super::{HealthCategory, HealthStatus, Trend};
use serde::Serialize;

/// The scored result for one health category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthScoreCard {
    pub category: HealthCategory,
    pub label: String,

    /// Weighted sum rounded to the nearest integer, not clamped to 0–100
    pub score: i64,
    pub status: HealthStatus,
    pub trend: Trend,

    /// Score change since the previous period, rounded to one decimal
    pub trend_value: f64,
    pub description: String,
    pub tooltip: String,
}

/// All four score cards, in [`HealthCategory::ALL`] order, and their rounded mean.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthSummary {
    pub cards: [HealthScoreCard; 4],
    pub overall_score: i64,
}

impl HealthSummary {
    #[must_use]
    pub const fn card(&self, category: HealthCategory) -> &HealthScoreCard {
        &self.cards[category as usize]
    }
}
