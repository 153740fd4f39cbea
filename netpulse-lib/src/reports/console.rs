use super::{MetricEvaluation, common};
use crate::Result;
use crate::counters::{Counter, all_categories};
use crate::health::{HealthStatus, HealthSummary, Trend};
use crate::kpis::{FilterOptions, Kpi};
use core::fmt::Write;
use owo_colors::OwoColorize;

fn heading<W: Write>(writer: &mut W, text: &str, use_colors: bool) -> Result<()> {
    if use_colors {
        writeln!(writer, "{}", text.bold())?;
    } else {
        writeln!(writer, "{text}")?;
    }
    Ok(())
}

/// Counters grouped by category, in taxonomy order.
pub fn counters<W: Write>(counters: &[&Counter], use_colors: bool, writer: &mut W) -> Result<()> {
    let id_width = counters.iter().map(|c| c.id.len()).max().unwrap_or(0);
    let mut first = true;

    for &category in all_categories() {
        let in_category: Vec<_> = counters.iter().filter(|c| c.category == category).collect();
        if in_category.is_empty() {
            continue;
        }

        if !first {
            writeln!(writer)?;
        }
        first = false;

        heading(writer, &category.to_string(), use_colors)?;
        for counter in in_category {
            writeln!(writer, "  {:<id_width$}  {} ({})", counter.id, counter.name, counter.unit)?;
        }
    }

    Ok(())
}

pub fn kpis<W: Write>(kpis: &[&Kpi], use_colors: bool, writer: &mut W) -> Result<()> {
    let id_width = kpis.iter().map(|k| k.id.len()).max().unwrap_or(0);
    let name_width = kpis.iter().map(|k| k.name.chars().count()).max().unwrap_or(0);

    for kpi in kpis {
        let id = format!("{:<id_width$}", kpi.id);
        let id = if use_colors { id.cyan().to_string() } else { id };
        writeln!(
            writer,
            "{id}  {:<name_width$}  {} / {} / {} / {} / {}",
            kpi.name, kpi.technology, kpi.vendor, kpi.domain, kpi.category, kpi.scope
        )?;
    }

    Ok(())
}

pub fn filter_options<W: Write>(options: &FilterOptions, use_colors: bool, writer: &mut W) -> Result<()> {
    let scopes: Vec<String> = options.scopes.iter().map(ToString::to_string).collect();
    let rows = [
        ("Technologies", &options.technologies),
        ("Vendors", &options.vendors),
        ("Domains", &options.domains),
        ("Categories", &options.categories),
        ("Scopes", &scopes),
    ];

    for (label, values) in rows {
        let label = format!("{label}:");
        let label = if use_colors { label.bold().to_string() } else { label };
        writeln!(writer, "{label} {}", values.join(", "))?;
    }

    Ok(())
}

/// One line per derived metric with its value, followed by its formula and any error.
pub fn evaluations<W: Write>(evaluations: &[MetricEvaluation<'_>], use_colors: bool, writer: &mut W) -> Result<()> {
    let name_width = evaluations.iter().map(|e| e.metric.name().chars().count()).max().unwrap_or(0);

    for evaluation in evaluations {
        let value = match &evaluation.outcome {
            Ok(outcome) => common::format_evaluation(*outcome, evaluation.metric.unit()),
            Err(_) => common::UNAVAILABLE.to_string(),
        };

        writeln!(writer, "{:<name_width$}  {value}", evaluation.metric.name())?;
        writeln!(writer, "  = {}", evaluation.metric.formula_text())?;

        if let Err(e) = &evaluation.outcome {
            if use_colors {
                writeln!(writer, "  ! {}", e.red())?;
            } else {
                writeln!(writer, "  ! {e}")?;
            }
        }
    }

    Ok(())
}

/// The overall score followed by one line per card.
///
/// With `details`, each card also lists its description and how every sub-metric was scored.
pub fn health<W: Write>(summary: &HealthSummary, details: bool, use_colors: bool, writer: &mut W) -> Result<()> {
    let label_width = summary.cards.iter().map(|c| c.label.len()).max().unwrap_or(0);

    heading(writer, &format!("Overall health score: {}", summary.overall_score), use_colors)?;
    writeln!(writer)?;

    for card in &summary.cards {
        let status = format!("{:<10}", common::format_status(card.status));
        let status = if use_colors {
            match card.status {
                HealthStatus::Healthy => status.green().bold().to_string(),
                HealthStatus::Acceptable => status.cyan().bold().to_string(),
                HealthStatus::Degraded => status.yellow().bold().to_string(),
                HealthStatus::Critical => status.red().bold().to_string(),
            }
        } else {
            status
        };

        let trend = format!("{:<9}", <&str>::from(card.trend));
        let trend = if use_colors {
            match card.trend {
                Trend::Improving => trend.green().to_string(),
                Trend::Stable => trend,
                Trend::Degrading => trend.red().to_string(),
            }
        } else {
            trend
        };

        writeln!(
            writer,
            "{:<label_width$}  {:>4}  {status}  {trend}  {}",
            card.label,
            card.score,
            common::format_trend_value(card.trend_value)
        )?;

        if details {
            writeln!(writer, "  {}", card.description)?;
            for line in card.tooltip.lines() {
                writeln!(writer, "    {line}")?;
            }
        }
    }

    Ok(())
}
