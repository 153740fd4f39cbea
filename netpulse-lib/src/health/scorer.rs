use super::{
    DEFAULT_STABLE_TREND_BAND, HealthCategory, HealthInputs, HealthScoreCard, HealthSummary, StatusBands, SubMetric, TrendAssessment,
};
use core::fmt::Write;

/// Scores health categories with a given set of status bands and trend sensitivity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthScorer {
    bands: StatusBands,
    stable_band: f64,
}

impl HealthScorer {
    #[must_use]
    pub const fn new(bands: StatusBands, stable_band: f64) -> Self {
        Self { bands, stable_band }
    }

    #[must_use]
    pub const fn bands(&self) -> &StatusBands {
        &self.bands
    }

    #[must_use]
    pub const fn stable_band(&self) -> f64 {
        self.stable_band
    }

    /// Score a single category.
    #[must_use]
    pub fn score_card(&self, category: HealthCategory, inputs: &HealthInputs) -> HealthScoreCard {
        let mut weighted_sum = 0.0;
        let mut tooltip = String::new();

        for (metric, supplied) in category.sub_metrics().iter().zip(inputs.values(category)) {
            let value = resolve(category, metric, supplied);
            weighted_sum += metric.weighted(value);

            if !tooltip.is_empty() {
                tooltip.push('\n');
            }
            let _ = write!(tooltip, "{} {value}{}", metric.label, metric.unit);
            let _ = write!(tooltip, " (scored as {}, weight {})", metric.normalization, metric.weight);
        }

        let score = round_score(weighted_sum);
        let trend = TrendAssessment::assess(as_f64(score), inputs.previous_scores.get(category), self.stable_band);

        log::debug!("{category} scored {weighted_sum:.2}, rounded to {score}");

        HealthScoreCard {
            category,
            label: category.to_string(),
            score,
            status: self.bands.classify(as_f64(score)),
            trend: trend.trend,
            trend_value: trend.value,
            description: category.description().to_string(),
            tooltip,
        }
    }

    /// Score all four categories and their overall mean.
    #[must_use]
    pub fn summarize(&self, inputs: &HealthInputs) -> HealthSummary {
        let cards = HealthCategory::ALL.map(|category| self.score_card(category, inputs));
        let scores = cards.each_ref().map(|card| card.score);
        let overall_score = round_score(mean(&scores));

        HealthSummary { cards, overall_score }
    }
}

impl Default for HealthScorer {
    fn default() -> Self {
        Self::new(StatusBands::default(), DEFAULT_STABLE_TREND_BAND)
    }
}

/// Compute the health summary with the default status bands and trend band.
#[must_use]
pub fn compute_health_summary(inputs: &HealthInputs) -> HealthSummary {
    HealthScorer::default().summarize(inputs)
}

/// The supplied value, or the default when the value is absent or its weighted contribution is not finite.
fn resolve(category: HealthCategory, metric: &SubMetric, supplied: Option<f64>) -> f64 {
    match supplied {
        Some(value) if value.is_finite() && metric.weighted(value).is_finite() => value,
        Some(value) => {
            log::warn!("ignoring out-of-range {category} input '{}' ({value}), using default {}", metric.key, metric.default);
            metric.default
        }
        None => metric.default,
    }
}

/// Rounds to the nearest integer, saturating at the bounds of `i64`.
#[expect(clippy::cast_possible_truncation, reason = "float to int casts saturate")]
fn round_score(value: f64) -> i64 {
    value.round() as i64
}

#[expect(clippy::cast_precision_loss, reason = "scores are normally far below 2^52")]
const fn as_f64(value: i64) -> f64 {
    value as f64
}

/// Summed in `f64` so saturated card scores cannot overflow.
#[expect(clippy::cast_precision_loss, reason = "there are only four cards")]
fn mean(scores: &[i64]) -> f64 {
    let total: f64 = scores.iter().copied().map(as_f64).sum();
    total / scores.len() as f64
}
