use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumString, IntoStaticStr, Display, Serialize, Deserialize)]
#[strum(ascii_case_insensitive)]
pub enum CounterCategory {
    Radio,
    Traffic,
    #[strum(serialize = "Control plane")]
    #[serde(rename = "Control plane")]
    ControlPlane,
    Transport,
}

const ALL_CATEGORIES: [CounterCategory; 4] = [
    CounterCategory::Radio,
    CounterCategory::Traffic,
    CounterCategory::ControlPlane,
    CounterCategory::Transport,
];

/// The complete counter taxonomy, independent of what any registry contains.
#[must_use]
pub const fn all_categories() -> &'static [CounterCategory] {
    &ALL_CATEGORIES
}
