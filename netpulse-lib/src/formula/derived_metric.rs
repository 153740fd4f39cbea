use super::{CounterValues, Evaluation, FormulaError, FormulaNode, evaluate, format};
use crate::counters::CounterCategory;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A KPI defined as a formula over counters.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedMetric {
    id: String,
    name: String,
    category: CounterCategory,
    unit: String,
    formula: FormulaNode,
    formula_text: String,
}

impl DerivedMetric {
    /// Create a derived metric, formatting its formula once up front.
    ///
    /// # Errors
    ///
    /// Returns [`FormulaError::MalformedNode`] if the formula tree is structurally invalid.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: CounterCategory,
        unit: impl Into<String>,
        formula: FormulaNode,
    ) -> Result<Self, FormulaError> {
        formula.check_structure()?;
        let formula_text = format(&formula)?;

        Ok(Self {
            id: id.into(),
            name: name.into(),
            category,
            unit: unit.into(),
            formula,
            formula_text,
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn category(&self) -> CounterCategory {
        self.category
    }

    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    #[must_use]
    pub const fn formula(&self) -> &FormulaNode {
        &self.formula
    }

    /// The formatted formula, e.g. `((Call Drops / Total Call Attempts) % 100)`.
    #[must_use]
    pub fn formula_text(&self) -> &str {
        &self.formula_text
    }

    /// Evaluate the formula against `values`.
    ///
    /// # Errors
    ///
    /// Returns [`FormulaError::UnknownCounterReference`] if `values` lacks a referenced counter.
    pub fn evaluate<V: CounterValues + ?Sized>(&self, values: &V) -> Result<Evaluation, FormulaError> {
        evaluate(&self.formula, values)
    }
}

impl Serialize for DerivedMetric {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("DerivedMetric", 6)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("category", &self.category)?;
        state.serialize_field("unit", &self.unit)?;
        state.serialize_field("formula", &self.formula)?;
        state.serialize_field("formulaText", &self.formula_text)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for DerivedMetric {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // formulaText is derived, so it is accepted but never trusted
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct DerivedMetricData {
            id: String,
            name: String,
            category: CounterCategory,
            unit: String,
            formula: FormulaNode,
            #[serde(default, rename = "formulaText")]
            _formula_text: Option<String>,
        }

        let data = DerivedMetricData::deserialize(deserializer)?;

        Self::new(data.id, data.name, data.category, data.unit, data.formula).map_err(D::Error::custom)
    }
}
