use super::MetricEvaluation;
use crate::Result;
use crate::counters::Counter;
use crate::health::HealthSummary;
use crate::kpis::{FilterOptions, Kpi};
use core::fmt::Write;
use serde::Serialize;
use serde_json::json;

fn write_pretty<W: Write>(value: &impl Serialize, writer: &mut W) -> Result<()> {
    writeln!(writer, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

pub fn counters<W: Write>(counters: &[&Counter], writer: &mut W) -> Result<()> {
    write_pretty(&json!({ "counters": counters }), writer)
}

pub fn kpis<W: Write>(kpis: &[&Kpi], writer: &mut W) -> Result<()> {
    write_pretty(&json!({ "kpis": kpis }), writer)
}

pub fn filter_options<W: Write>(options: &FilterOptions, writer: &mut W) -> Result<()> {
    write_pretty(options, writer)
}

/// Errors are reported per metric; an indeterminate result has a `null` value and no error.
pub fn evaluations<W: Write>(evaluations: &[MetricEvaluation<'_>], writer: &mut W) -> Result<()> {
    let metrics: Vec<_> = evaluations
        .iter()
        .map(|evaluation| {
            let metric = evaluation.metric;
            json!({
                "id": metric.id(),
                "name": metric.name(),
                "category": metric.category(),
                "unit": metric.unit(),
                "formulaText": metric.formula_text(),
                "value": evaluation.value(),
                "error": evaluation.outcome.as_ref().err().map(ToString::to_string),
            })
        })
        .collect();

    write_pretty(&json!({ "metrics": metrics }), writer)
}

pub fn health<W: Write>(summary: &HealthSummary, writer: &mut W) -> Result<()> {
    write_pretty(summary, writer)
}
