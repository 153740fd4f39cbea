use thiserror::Error;

/// Failures while checking, evaluating or formatting a formula tree.
///
/// Division by zero is not an error; it is reported as
/// [`Evaluation::Indeterminate`](super::Evaluation::Indeterminate).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormulaError {
    /// The tree references a counter that has no value or is not registered
    #[error("unknown counter reference '{counter_id}'")]
    UnknownCounterReference { counter_id: String },

    /// A node is structurally invalid for its declared type
    #[error("malformed formula node: {reason}")]
    MalformedNode { reason: String },
}

impl FormulaError {
    pub(crate) fn unknown_counter(counter_id: &str) -> Self {
        Self::UnknownCounterReference {
            counter_id: counter_id.to_string(),
        }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedNode { reason: reason.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FormulaError::unknown_counter("call_drops");
        assert_eq!(err.to_string(), "unknown counter reference 'call_drops'");

        let err = FormulaError::malformed("operator '/' expects 2 children, found 1");
        assert!(err.to_string().contains("expects 2 children"));
    }

    #[test]
    fn test_error_converts_to_app_error() {
        let result: Result<(), FormulaError> = Err(FormulaError::malformed("bad"));
        let app: crate::Result<()> = result.map_err(ohno::AppError::from);
        assert!(app.unwrap_err().to_string().contains("bad"));
    }
}
