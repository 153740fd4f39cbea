//! Formatting shared by the console and JSON reports.

use crate::formula::Evaluation;
use crate::health::HealthStatus;

/// Shown in place of a value that could not be computed.
pub const UNAVAILABLE: &str = "—";

/// Format a number with at most two decimals, dropping trailing zeros.
pub fn format_number(value: f64) -> String {
    let text = format!("{value:.2}");
    let text = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text.as_str()
    };

    if text == "-0" { "0".to_string() } else { text.to_string() }
}

/// Format an evaluation outcome, with its unit when there is a value.
pub fn format_evaluation(evaluation: Evaluation, unit: &str) -> String {
    evaluation.value().map_or_else(
        || UNAVAILABLE.to_string(),
        |value| {
            if unit.is_empty() || unit == "ratio" {
                format_number(value)
            } else if unit == "%" {
                format!("{}%", format_number(value))
            } else {
                format!("{} {unit}", format_number(value))
            }
        },
    )
}

/// Format a trend change with an explicit sign, e.g. `+2.3`.
pub fn format_trend_value(value: f64) -> String {
    format!("{value:+.1}")
}

pub const fn format_status(status: HealthStatus) -> &'static str {
    match status {
        HealthStatus::Healthy => "HEALTHY",
        HealthStatus::Acceptable => "ACCEPTABLE",
        HealthStatus::Degraded => "DEGRADED",
        HealthStatus::Critical => "CRITICAL",
    }
}
