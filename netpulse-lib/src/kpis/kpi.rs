use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// The aggregation level a KPI is reported at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr, Display, Serialize, Deserialize)]
#[strum(ascii_case_insensitive)]
pub enum Scope {
    Network,
    Region,
    Cluster,
    Site,
    Node,
    Cell,
    Interface,
}

/// Which way a KPI should move to be considered an improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr, Display, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

/// A catalog entry describing a key performance indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kpi {
    pub id: Cow<'static, str>,
    pub name: Cow<'static, str>,
    pub category: Cow<'static, str>,
    pub technology: Cow<'static, str>,
    pub scope: Scope,
    pub vendor: Cow<'static, str>,
    pub domain: Cow<'static, str>,
    pub unit: Cow<'static, str>,
    pub direction: Direction,
    pub description: Cow<'static, str>,
}

impl Kpi {
    /// `needle` must already be lowercase.
    #[must_use]
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.id.to_lowercase().contains(needle)
    }
}
