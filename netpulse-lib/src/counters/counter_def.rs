use super::{Counter, CounterCategory};
use std::borrow::Cow;

macro_rules! counter_def {
    ($id:expr, $name:expr, $description:expr, $category:ident, $unit:expr) => {
        Counter {
            id: Cow::Borrowed($id),
            name: Cow::Borrowed($name),
            description: Cow::Borrowed($description),
            category: CounterCategory::$category,
            unit: Cow::Borrowed($unit),
            vendor: None,
            technology: None,
            domain: None,
        }
    };
    ($id:expr, $name:expr, $description:expr, $category:ident, $unit:expr, $technology:expr, $domain:expr) => {
        Counter {
            id: Cow::Borrowed($id),
            name: Cow::Borrowed($name),
            description: Cow::Borrowed($description),
            category: CounterCategory::$category,
            unit: Cow::Borrowed($unit),
            vendor: None,
            technology: Some(Cow::Borrowed($technology)),
            domain: Some(Cow::Borrowed($domain)),
        }
    };
    ($id:expr, $name:expr, $description:expr, $category:ident, $unit:expr, $technology:expr, $domain:expr, $vendor:expr) => {
        Counter {
            id: Cow::Borrowed($id),
            name: Cow::Borrowed($name),
            description: Cow::Borrowed($description),
            category: CounterCategory::$category,
            unit: Cow::Borrowed($unit),
            vendor: Some(Cow::Borrowed($vendor)),
            technology: Some(Cow::Borrowed($technology)),
            domain: Some(Cow::Borrowed($domain)),
        }
    };
}

pub const COUNTER_DEFINITIONS: &[Counter] = &[
    // Radio
    counter_def!(
        "rrc_setup_attempts",
        "RRC Setup Attempts",
        "RRC connection establishment attempts received by the cell",
        Radio,
        "count",
        "LTE",
        "RAN"
    ),
    counter_def!(
        "rrc_setup_successes",
        "RRC Setup Successes",
        "RRC connection establishments completed successfully",
        Radio,
        "count",
        "LTE",
        "RAN"
    ),
    counter_def!(
        "erab_setup_attempts",
        "E-RAB Setup Attempts",
        "E-RAB establishment attempts for initial and additional bearers",
        Radio,
        "count",
        "LTE",
        "RAN"
    ),
    counter_def!(
        "erab_setup_successes",
        "E-RAB Setup Successes",
        "E-RABs established successfully",
        Radio,
        "count",
        "LTE",
        "RAN"
    ),
    counter_def!(
        "call_drops",
        "Call Drops",
        "Calls released abnormally after successful setup",
        Radio,
        "count"
    ),
    counter_def!(
        "total_call_attempts",
        "Total Call Attempts",
        "Call attempts originated or terminated in the measured scope",
        Radio,
        "count"
    ),
    counter_def!(
        "ho_attempts",
        "Handover Attempts",
        "Outgoing intra- and inter-frequency handover preparations",
        Radio,
        "count",
        "LTE",
        "RAN"
    ),
    counter_def!(
        "ho_successes",
        "Handover Successes",
        "Outgoing handovers completed successfully",
        Radio,
        "count",
        "LTE",
        "RAN"
    ),
    counter_def!(
        "dl_prb_used",
        "DL PRBs Used",
        "Average downlink physical resource blocks in use",
        Radio,
        "PRB",
        "5G",
        "RAN",
        "Ericsson"
    ),
    counter_def!(
        "dl_prb_available",
        "DL PRBs Available",
        "Downlink physical resource blocks configured on the carrier",
        Radio,
        "PRB",
        "5G",
        "RAN",
        "Ericsson"
    ),
    counter_def!(
        "cell_unavailable_time",
        "Cell Unavailable Time",
        "Time the cell was out of service during the measurement period",
        Radio,
        "s",
        "LTE",
        "RAN"
    ),
    counter_def!(
        "measurement_period",
        "Measurement Period",
        "Length of the measurement period",
        Radio,
        "s"
    ),
    // Traffic
    counter_def!(
        "dl_volume_mb",
        "DL Data Volume",
        "Downlink PDCP data volume delivered to users",
        Traffic,
        "MB",
        "5G",
        "RAN"
    ),
    counter_def!(
        "ul_volume_mb",
        "UL Data Volume",
        "Uplink PDCP data volume received from users",
        Traffic,
        "MB",
        "5G",
        "RAN"
    ),
    counter_def!(
        "dl_active_time",
        "DL Active Transmission Time",
        "Time with buffered downlink data scheduled for transmission",
        Traffic,
        "s",
        "5G",
        "RAN"
    ),
    counter_def!(
        "voice_traffic",
        "Voice Traffic",
        "Carried voice traffic",
        Traffic,
        "Erl",
        "LTE",
        "RAN"
    ),
    counter_def!(
        "active_users",
        "Active Users",
        "Average number of users with data in the buffers",
        Traffic,
        "count",
        "5G",
        "RAN",
        "Nokia"
    ),
    // Control plane
    counter_def!(
        "attach_attempts",
        "Attach Attempts",
        "EPS attach requests received by the MME",
        ControlPlane,
        "count",
        "LTE",
        "Core"
    ),
    counter_def!(
        "attach_successes",
        "Attach Successes",
        "EPS attach procedures accepted by the MME",
        ControlPlane,
        "count",
        "LTE",
        "Core"
    ),
    counter_def!(
        "paging_attempts",
        "Paging Attempts",
        "Paging requests sent towards idle UEs",
        ControlPlane,
        "count",
        "LTE",
        "Core"
    ),
    counter_def!(
        "paging_successes",
        "Paging Successes",
        "Paging requests answered by the UE",
        ControlPlane,
        "count",
        "LTE",
        "Core"
    ),
    counter_def!(
        "pdu_session_attempts",
        "PDU Session Setup Attempts",
        "PDU session establishment requests handled by the SMF",
        ControlPlane,
        "count",
        "5G",
        "Core",
        "Huawei"
    ),
    counter_def!(
        "pdu_session_successes",
        "PDU Session Setup Successes",
        "PDU sessions established successfully by the SMF",
        ControlPlane,
        "count",
        "5G",
        "Core",
        "Huawei"
    ),
    // Transport
    counter_def!(
        "if_in_octets",
        "Interface Input Octets",
        "Octets received on the interface",
        Transport,
        "octets",
        "IP",
        "Transport"
    ),
    counter_def!(
        "if_out_octets",
        "Interface Output Octets",
        "Octets transmitted on the interface",
        Transport,
        "octets",
        "IP",
        "Transport"
    ),
    counter_def!(
        "if_in_packets",
        "Interface Input Packets",
        "Unicast packets received on the interface",
        Transport,
        "count",
        "IP",
        "Transport"
    ),
    counter_def!(
        "if_in_errors",
        "Interface Input Errors",
        "Inbound packets discarded because of errors",
        Transport,
        "count",
        "IP",
        "Transport"
    ),
    counter_def!(
        "link_capacity",
        "Link Capacity",
        "Nominal capacity of the transport link",
        Transport,
        "bps",
        "IP",
        "Transport"
    ),
];
