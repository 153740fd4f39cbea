use serde::{Serialize, Serializer};

/// The result of evaluating a formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluation {
    Value(f64),

    /// No meaningful number exists, e.g. a ratio whose denominator is zero
    Indeterminate,
}

impl Evaluation {
    /// Wraps a finite number; NaN and infinities become [`Evaluation::Indeterminate`].
    #[must_use]
    pub const fn from_number(value: f64) -> Self {
        if value.is_finite() { Self::Value(value) } else { Self::Indeterminate }
    }

    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            Self::Indeterminate => None,
        }
    }

    #[must_use]
    pub const fn is_indeterminate(self) -> bool {
        matches!(self, Self::Indeterminate)
    }
}

impl Serialize for Evaluation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Value(v) => serializer.serialize_f64(*v),
            Self::Indeterminate => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_number() {
        assert_eq!(Evaluation::from_number(1.5), Evaluation::Value(1.5));
        assert!(Evaluation::from_number(f64::NAN).is_indeterminate());
        assert!(Evaluation::from_number(f64::INFINITY).is_indeterminate());
        assert!(Evaluation::from_number(f64::NEG_INFINITY).is_indeterminate());
    }

    #[test]
    fn test_value() {
        assert_eq!(Evaluation::Value(2.0).value(), Some(2.0));
        assert_eq!(Evaluation::Indeterminate.value(), None);
    }

    #[test]
    fn test_serialize() {
        assert_eq!(serde_json::to_string(&Evaluation::Value(42.5)).unwrap(), "42.5");
        assert_eq!(serde_json::to_string(&Evaluation::Indeterminate).unwrap(), "null");
    }
}
