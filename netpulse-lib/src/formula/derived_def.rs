use super::{DerivedMetric, FormulaNode, Operator};
use crate::counters::{COUNTER_DEFINITIONS, CounterCategory};

/// A reference to a built-in counter, caching its current name.
fn counter(id: &str) -> FormulaNode {
    let counter = COUNTER_DEFINITIONS
        .iter()
        .find(|c| c.id == id)
        .expect("derived metric references a built-in counter");
    FormulaNode::counter_ref(counter)
}

fn success_rate(successes: &str, attempts: &str) -> FormulaNode {
    FormulaNode::percentage(FormulaNode::ratio(counter(successes), counter(attempts)))
}

macro_rules! derived_def {
    ($id:expr, $name:expr, $category:ident, $unit:expr, $formula:expr) => {
        DerivedMetric::new($id, $name, CounterCategory::$category, $unit, $formula).expect("built-in formulas are well formed")
    };
}

/// The built-in derived metrics.
#[must_use]
pub fn builtin_derived_metrics() -> Vec<DerivedMetric> {
    vec![
        // Radio
        derived_def!(
            "call_drop_rate",
            "Call Drop Rate",
            Radio,
            "%",
            FormulaNode::percentage(FormulaNode::ratio(counter("call_drops"), counter("total_call_attempts")))
        ),
        derived_def!(
            "rrc_setup_success_rate",
            "RRC Setup Success Rate",
            Radio,
            "%",
            success_rate("rrc_setup_successes", "rrc_setup_attempts")
        ),
        derived_def!(
            "erab_setup_success_rate",
            "E-RAB Setup Success Rate",
            Radio,
            "%",
            success_rate("erab_setup_successes", "erab_setup_attempts")
        ),
        derived_def!(
            "handover_success_rate",
            "Handover Success Rate",
            Radio,
            "%",
            success_rate("ho_successes", "ho_attempts")
        ),
        derived_def!(
            "dl_prb_utilization",
            "DL PRB Utilization",
            Radio,
            "%",
            FormulaNode::percentage(FormulaNode::ratio(counter("dl_prb_used"), counter("dl_prb_available")))
        ),
        derived_def!(
            "cell_availability",
            "Cell Availability",
            Radio,
            "%",
            FormulaNode::percentage(FormulaNode::ratio(
                FormulaNode::operator(Operator::Subtract, counter("measurement_period"), counter("cell_unavailable_time")),
                counter("measurement_period"),
            ))
        ),
        // Traffic
        derived_def!(
            "dl_user_throughput",
            "DL User Throughput",
            Traffic,
            "Mbps",
            FormulaNode::ratio(
                FormulaNode::operator(Operator::Multiply, counter("dl_volume_mb"), FormulaNode::number(8.0)),
                counter("dl_active_time"),
            )
        ),
        derived_def!(
            "total_data_volume",
            "Total Data Volume",
            Traffic,
            "MB",
            FormulaNode::operator(Operator::Add, counter("dl_volume_mb"), counter("ul_volume_mb"))
        ),
        // Control plane
        derived_def!(
            "attach_success_rate",
            "Attach Success Rate",
            ControlPlane,
            "%",
            success_rate("attach_successes", "attach_attempts")
        ),
        derived_def!(
            "paging_success_rate",
            "Paging Success Rate",
            ControlPlane,
            "%",
            success_rate("paging_successes", "paging_attempts")
        ),
        derived_def!(
            "pdu_session_success_rate",
            "PDU Session Setup Success Rate",
            ControlPlane,
            "%",
            success_rate("pdu_session_successes", "pdu_session_attempts")
        ),
        // Transport
        derived_def!(
            "interface_error_rate",
            "Interface Error Rate",
            Transport,
            "%",
            FormulaNode::percentage(FormulaNode::ratio(counter("if_in_errors"), counter("if_in_packets")))
        ),
        derived_def!(
            "link_utilization",
            "Link Utilization",
            Transport,
            "%",
            FormulaNode::percentage(FormulaNode::ratio(
                FormulaNode::operator(
                    Operator::Multiply,
                    FormulaNode::operator(Operator::Add, counter("if_in_octets"), counter("if_out_octets")),
                    FormulaNode::number(8.0),
                ),
                counter("link_capacity"),
            ))
        ),
    ]
}
