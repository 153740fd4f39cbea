use super::counter_def::COUNTER_DEFINITIONS;
use super::{Counter, CounterCategory, all_categories};
use crate::Result;
use ohno::bail;

/// An immutable catalog of counters, built once at startup.
#[derive(Debug, Clone)]
pub struct CounterRegistry {
    counters: Vec<Counter>,
}

impl CounterRegistry {
    /// A registry holding only the built-in counters.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            counters: COUNTER_DEFINITIONS.to_vec(),
        }
    }

    /// The built-in counters followed by `extra`.
    ///
    /// # Errors
    ///
    /// Returns an error if an extra counter reuses an id that is already registered.
    pub fn with_counters(extra: impl IntoIterator<Item = Counter>) -> Result<Self> {
        let mut registry = Self::builtin();
        for counter in extra {
            if counter.id.trim().is_empty() {
                bail!("counter '{}' has an empty id", counter.name);
            }

            if registry.get(&counter.id).is_some() {
                bail!("counter id '{}' is already registered", counter.id);
            }

            log::debug!("registering counter '{}'", counter.id);
            registry.counters.push(counter);
        }

        Ok(registry)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Counter> {
        self.counters.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn counters(&self) -> &[Counter] {
        &self.counters
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.counters.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// Counters in `category`, in registry order.
    pub fn counters_by_category(&self, category: CounterCategory) -> impl Iterator<Item = &Counter> {
        self.counters.iter().filter(move |c| c.category == category)
    }

    /// Case-insensitive substring search over counter names, descriptions and ids.
    ///
    /// A blank query matches every counter.
    pub fn search_counters(&self, query: &str) -> impl Iterator<Item = &Counter> {
        let needle = query.trim().to_lowercase();
        self.counters
            .iter()
            .filter(move |c| needle.is_empty() || c.matches_lowercase(&needle))
    }

    /// The fixed category taxonomy.
    ///
    /// This never looks at the registry contents, so a category is listed even when
    /// no counter in this registry belongs to it.
    #[must_use]
    pub const fn all_categories(&self) -> &'static [CounterCategory] {
        all_categories()
    }
}

impl Default for CounterRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
