use super::{FormulaError, Operator};
use crate::Result;
use crate::counters::{Counter, CounterRegistry};
use ohno::IntoAppError;
use serde::{Deserialize, Serialize};

/// A node of a formula tree.
///
/// Serialized with an explicit `type` tag:
///
/// ```json
/// { "type": "operator", "operator": "/", "children": [
///     { "type": "counter", "counterId": "call_drops", "counterName": "Call Drops" },
///     { "type": "number", "value": 100 } ] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum FormulaNode {
    Operator {
        operator: Operator,
        children: Vec<Self>,
    },

    /// `counter_name` is a display cache of the registry name and may be stale.
    Counter {
        counter_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        counter_name: Option<String>,
    },

    Number {
        value: f64,
    },
}

/// A counter reference whose cached display name no longer matches the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaleCounterName {
    pub counter_id: String,
    pub cached_name: String,
    pub registry_name: String,
}

impl FormulaNode {
    #[must_use]
    pub fn operator(operator: Operator, lhs: Self, rhs: Self) -> Self {
        Self::Operator {
            operator,
            children: vec![lhs, rhs],
        }
    }

    #[must_use]
    pub fn counter(counter_id: impl Into<String>, counter_name: impl Into<String>) -> Self {
        Self::Counter {
            counter_id: counter_id.into(),
            counter_name: Some(counter_name.into()),
        }
    }

    /// A reference to `counter`, caching its current name.
    #[must_use]
    pub fn counter_ref(counter: &Counter) -> Self {
        Self::counter(counter.id.clone(), counter.name.clone())
    }

    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Number { value }
    }

    /// `numerator / denominator`
    #[must_use]
    pub fn ratio(numerator: Self, denominator: Self) -> Self {
        Self::operator(Operator::Divide, numerator, denominator)
    }

    /// `ratio % 100`, i.e. the ratio expressed as a percentage.
    #[must_use]
    pub fn percentage(ratio: Self) -> Self {
        Self::operator(Operator::Scale, ratio, Self::number(100.0))
    }

    /// Parses a tree from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`FormulaError::MalformedNode`] if the text is not a valid tree, for
    /// example when a node lacks a field its `type` requires.
    pub fn from_json(text: &str) -> Result<Self, FormulaError> {
        serde_json::from_str(text).map_err(|e| FormulaError::malformed(e.to_string()))
    }

    /// Serializes the tree to its JSON form.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).into_app_err("serializing formula")
    }

    /// Ids of all referenced counters, in pre-order.
    #[must_use]
    pub fn counter_ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        self.visit_counters(&mut |id, _| ids.push(id));
        ids
    }

    /// Verifies the tree shape: operator arity, non-empty counter ids and finite literals.
    ///
    /// # Errors
    ///
    /// Returns [`FormulaError::MalformedNode`] for the first offending node.
    pub fn check_structure(&self) -> Result<(), FormulaError> {
        match self {
            Self::Operator { operator, children } => {
                let (lhs, rhs) = operands(*operator, children)?;
                lhs.check_structure()?;
                rhs.check_structure()
            }
            Self::Counter { counter_id, .. } => checked_counter_id(counter_id).map(|_| ()),
            Self::Number { value } => {
                if value.is_finite() {
                    Ok(())
                } else {
                    Err(FormulaError::malformed(format!("literal {value} is not a finite number")))
                }
            }
        }
    }

    /// Verifies the tree shape and that every referenced counter is registered.
    ///
    /// # Errors
    ///
    /// Returns [`FormulaError::MalformedNode`] or [`FormulaError::UnknownCounterReference`].
    pub fn check(&self, registry: &CounterRegistry) -> Result<(), FormulaError> {
        self.check_structure()?;

        let mut unknown = None;
        self.visit_counters(&mut |id, _| {
            if unknown.is_none() && registry.get(id).is_none() {
                unknown = Some(FormulaError::unknown_counter(id));
            }
        });

        unknown.map_or(Ok(()), Err)
    }

    /// Counter references whose cached name differs from the registry name.
    ///
    /// References without a cached name, or to counters the registry does not know,
    /// are not reported.
    #[must_use]
    pub fn stale_counter_names(&self, registry: &CounterRegistry) -> Vec<StaleCounterName> {
        let mut stale = Vec::new();
        self.visit_counters(&mut |id, cached| {
            if let Some(cached) = cached
                && let Some(counter) = registry.get(id)
                && counter.name != cached
            {
                stale.push(StaleCounterName {
                    counter_id: id.to_string(),
                    cached_name: cached.to_string(),
                    registry_name: counter.name.to_string(),
                });
            }
        });
        stale
    }

    fn visit_counters<'a>(&'a self, f: &mut impl FnMut(&'a str, Option<&'a str>)) {
        match self {
            Self::Operator { children, .. } => {
                for child in children {
                    child.visit_counters(f);
                }
            }
            Self::Counter { counter_id, counter_name } => f(counter_id, counter_name.as_deref()),
            Self::Number { .. } => {}
        }
    }
}

/// The two operands of a binary operator node.
pub(super) fn operands(operator: Operator, children: &[FormulaNode]) -> Result<(&FormulaNode, &FormulaNode), FormulaError> {
    match children {
        [lhs, rhs] => Ok((lhs, rhs)),
        _ => Err(FormulaError::malformed(format!(
            "operator '{operator}' expects {} children, found {}",
            operator.arity(),
            children.len()
        ))),
    }
}

pub(super) fn checked_counter_id(counter_id: &str) -> Result<&str, FormulaError> {
    if counter_id.trim().is_empty() {
        Err(FormulaError::malformed("counter reference without a counter id"))
    } else {
        Ok(counter_id)
    }
}
