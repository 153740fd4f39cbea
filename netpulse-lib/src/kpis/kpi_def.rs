use super::{Direction, Kpi, Scope};
use std::borrow::Cow;

macro_rules! kpi_def {
    (
        $id:expr,
        $name:expr,
        $category:expr,
        $technology:expr,
        $scope:ident,
        $vendor:expr,
        $domain:expr,
        $unit:expr,
        $direction:ident,
        $description:expr
    ) => {
        Kpi {
            id: Cow::Borrowed($id),
            name: Cow::Borrowed($name),
            category: Cow::Borrowed($category),
            technology: Cow::Borrowed($technology),
            scope: Scope::$scope,
            vendor: Cow::Borrowed($vendor),
            domain: Cow::Borrowed($domain),
            unit: Cow::Borrowed($unit),
            direction: Direction::$direction,
            description: Cow::Borrowed($description),
        }
    };
}

pub const KPI_DEFINITIONS: &[Kpi] = &[
    kpi_def!(
        "lte_rrc_sr",
        "RRC Setup Success Rate",
        "Accessibility",
        "4G",
        Cell,
        "Ericsson",
        "RAN",
        "%",
        HigherIsBetter,
        "Share of RRC connection attempts that complete successfully"
    ),
    kpi_def!(
        "lte_erab_sr",
        "E-RAB Setup Success Rate",
        "Accessibility",
        "4G",
        Cell,
        "Nokia",
        "RAN",
        "%",
        HigherIsBetter,
        "Share of E-RAB establishment attempts that succeed"
    ),
    kpi_def!(
        "lte_call_drop_rate",
        "Call Drop Rate",
        "Retainability",
        "4G",
        Cell,
        "Ericsson",
        "RAN",
        "%",
        LowerIsBetter,
        "Share of established calls released abnormally"
    ),
    kpi_def!(
        "lte_ho_sr",
        "Handover Success Rate",
        "Mobility",
        "4G",
        Cell,
        "Huawei",
        "RAN",
        "%",
        HigherIsBetter,
        "Share of intra-frequency handovers that complete"
    ),
    kpi_def!(
        "lte_dl_throughput",
        "DL User Throughput",
        "Integrity",
        "4G",
        Cell,
        "Nokia",
        "RAN",
        "Mbps",
        HigherIsBetter,
        "Average downlink throughput per active user"
    ),
    kpi_def!(
        "lte_prb_util",
        "DL PRB Utilization",
        "Utilization",
        "4G",
        Cell,
        "Ericsson",
        "RAN",
        "%",
        LowerIsBetter,
        "Share of downlink physical resource blocks in use"
    ),
    kpi_def!(
        "nr_sgnb_add_sr",
        "SgNB Addition Success Rate",
        "Accessibility",
        "5G",
        Cell,
        "Ericsson",
        "RAN",
        "%",
        HigherIsBetter,
        "Share of secondary node additions for EN-DC that succeed"
    ),
    kpi_def!(
        "nr_call_drop_rate",
        "5G Drop Rate",
        "Retainability",
        "5G",
        Cell,
        "Nokia",
        "RAN",
        "%",
        LowerIsBetter,
        "Share of 5G sessions released abnormally"
    ),
    kpi_def!(
        "nr_dl_throughput",
        "NR DL User Throughput",
        "Integrity",
        "5G",
        Cell,
        "Ericsson",
        "RAN",
        "Mbps",
        HigherIsBetter,
        "Average downlink throughput per active 5G user"
    ),
    kpi_def!(
        "nr_cell_availability",
        "NR Cell Availability",
        "Availability",
        "5G",
        Site,
        "Huawei",
        "RAN",
        "%",
        HigherIsBetter,
        "Share of the measurement period during which NR cells carried traffic"
    ),
    kpi_def!(
        "nr_pdu_session_sr",
        "PDU Session Setup Success Rate",
        "Accessibility",
        "5G",
        Network,
        "Huawei",
        "Core",
        "%",
        HigherIsBetter,
        "Share of PDU session establishment requests accepted by the SMF"
    ),
    kpi_def!(
        "nr_registration_sr",
        "Registration Success Rate",
        "Accessibility",
        "5G",
        Region,
        "Nokia",
        "Core",
        "%",
        HigherIsBetter,
        "Share of initial registrations accepted by the AMF"
    ),
    kpi_def!(
        "epc_attach_sr",
        "Attach Success Rate",
        "Accessibility",
        "4G",
        Region,
        "Ericsson",
        "Core",
        "%",
        HigherIsBetter,
        "Share of attach requests accepted by the MME"
    ),
    kpi_def!(
        "epc_paging_sr",
        "Paging Success Rate",
        "Accessibility",
        "4G",
        Cluster,
        "Ericsson",
        "Core",
        "%",
        HigherIsBetter,
        "Share of paging attempts answered by the user equipment"
    ),
    kpi_def!(
        "volte_mos",
        "VoLTE MOS",
        "Quality",
        "4G",
        Network,
        "Nokia",
        "Core",
        "score",
        HigherIsBetter,
        "Mean opinion score estimated for VoLTE calls"
    ),
    kpi_def!(
        "ip_link_util",
        "Link Utilization",
        "Utilization",
        "IP",
        Interface,
        "Cisco",
        "Transport",
        "%",
        LowerIsBetter,
        "Share of link capacity used by input and output traffic"
    ),
    kpi_def!(
        "ip_if_error_rate",
        "Interface Error Rate",
        "Integrity",
        "IP",
        Interface,
        "Juniper",
        "Transport",
        "%",
        LowerIsBetter,
        "Share of received packets discarded with errors"
    ),
    kpi_def!(
        "ip_latency",
        "Round-Trip Latency",
        "Quality",
        "IP",
        Node,
        "Cisco",
        "Transport",
        "ms",
        LowerIsBetter,
        "Two-way active measurement latency between aggregation nodes"
    ),
    kpi_def!(
        "ip_packet_loss",
        "Packet Loss",
        "Quality",
        "IP",
        Node,
        "Juniper",
        "Transport",
        "%",
        LowerIsBetter,
        "Share of probe packets lost between aggregation nodes"
    ),
    kpi_def!(
        "mw_link_availability",
        "Microwave Link Availability",
        "Availability",
        "Microwave",
        Site,
        "Huawei",
        "Transport",
        "%",
        HigherIsBetter,
        "Share of time microwave hops were error free"
    ),
];

/// The built-in KPI catalog.
#[must_use]
pub fn builtin_kpis() -> Vec<Kpi> {
    KPI_DEFINITIONS.to_vec()
}
