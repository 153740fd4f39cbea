use super::CounterCategory;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// An atomic measured quantity.
///
/// Built-in counters borrow their text from the static definition table, while
/// counters loaded from configuration own theirs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Counter {
    pub id: Cow<'static, str>,
    pub name: Cow<'static, str>,

    #[serde(default)]
    pub description: Cow<'static, str>,

    pub category: CounterCategory,
    pub unit: Cow<'static, str>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<Cow<'static, str>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technology: Option<Cow<'static, str>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<Cow<'static, str>>,
}

impl Counter {
    /// Case-insensitive substring match against id, name and description.
    ///
    /// `needle` must already be lowercase.
    #[must_use]
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.id.to_lowercase().contains(needle)
    }
}
