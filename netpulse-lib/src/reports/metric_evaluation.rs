use crate::formula::{DerivedMetric, Evaluation, FormulaError};

/// A derived metric together with the outcome of evaluating it.
#[derive(Debug, Clone)]
pub struct MetricEvaluation<'a> {
    pub metric: &'a DerivedMetric,
    pub outcome: Result<Evaluation, FormulaError>,
}

impl<'a> MetricEvaluation<'a> {
    #[must_use]
    pub const fn new(metric: &'a DerivedMetric, outcome: Result<Evaluation, FormulaError>) -> Self {
        Self { metric, outcome }
    }

    /// The computed value, if there is one.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        self.outcome.as_ref().ok().copied().and_then(Evaluation::value)
    }
}
