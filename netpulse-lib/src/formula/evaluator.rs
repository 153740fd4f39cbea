//! Evaluation of formula trees against counter values

use super::formula_node::{checked_counter_id, operands};
use super::{Evaluation, FormulaError, FormulaNode, Operator};
use core::hash::BuildHasher;
use std::collections::{BTreeMap, HashMap};

/// A source of counter measurements for one scope and time bucket.
pub trait CounterValues {
    /// The measured value of `counter_id`, if the provider has one.
    fn counter_value(&self, counter_id: &str) -> Option<f64>;
}

impl<S: BuildHasher> CounterValues for HashMap<String, f64, S> {
    fn counter_value(&self, counter_id: &str) -> Option<f64> {
        self.get(counter_id).copied()
    }
}

impl CounterValues for BTreeMap<String, f64> {
    fn counter_value(&self, counter_id: &str) -> Option<f64> {
        self.get(counter_id).copied()
    }
}

impl<T: CounterValues + ?Sized> CounterValues for &T {
    fn counter_value(&self, counter_id: &str) -> Option<f64> {
        (**self).counter_value(counter_id)
    }
}

/// Evaluate a formula tree post-order against `values`.
///
/// Both operands of an operator are always evaluated, left first, so that a
/// structural error or unknown counter anywhere in the tree is reported even when
/// a sibling is indeterminate.
///
/// # Errors
///
/// Returns [`FormulaError::UnknownCounterReference`] if a referenced counter has no
/// value, and [`FormulaError::MalformedNode`] for an operator with the wrong number
/// of children or a counter reference without an id.
pub fn evaluate<V: CounterValues + ?Sized>(node: &FormulaNode, values: &V) -> Result<Evaluation, FormulaError> {
    match node {
        FormulaNode::Number { value } => Ok(Evaluation::from_number(*value)),
        FormulaNode::Counter { counter_id, .. } => {
            let counter_id = checked_counter_id(counter_id)?;
            values
                .counter_value(counter_id)
                .map(Evaluation::from_number)
                .ok_or_else(|| FormulaError::unknown_counter(counter_id))
        }
        FormulaNode::Operator { operator, children } => {
            let (lhs, rhs) = operands(*operator, children)?;
            let lhs = evaluate(lhs, values)?;
            let rhs = evaluate(rhs, values)?;
            Ok(apply(*operator, lhs, rhs))
        }
    }
}

fn apply(operator: Operator, lhs: Evaluation, rhs: Evaluation) -> Evaluation {
    let (Evaluation::Value(lhs), Evaluation::Value(rhs)) = (lhs, rhs) else {
        return Evaluation::Indeterminate;
    };

    let result = match operator {
        Operator::Add => lhs + rhs,
        Operator::Subtract => lhs - rhs,
        Operator::Multiply | Operator::Scale => lhs * rhs,
        Operator::Divide => {
            if rhs == 0.0 {
                log::debug!("division of {lhs} by zero is indeterminate");
                return Evaluation::Indeterminate;
            }
            lhs / rhs
        }
    };

    Evaluation::from_number(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), *v)).collect()
    }

    fn drop_rate() -> FormulaNode {
        FormulaNode::percentage(FormulaNode::ratio(
            FormulaNode::counter("call_drops", "Call Drops"),
            FormulaNode::counter("total_call_attempts", "Total Call Attempts"),
        ))
    }

    #[test]
    fn test_literal() {
        let result = evaluate(&FormulaNode::number(3.25), &values(&[])).unwrap();
        assert_eq!(result, Evaluation::Value(3.25));
    }

    #[test]
    fn test_counter_lookup() {
        let result = evaluate(&FormulaNode::counter("call_drops", "Call Drops"), &values(&[("call_drops", 7.0)])).unwrap();
        assert_eq!(result, Evaluation::Value(7.0));
    }

    #[test]
    fn test_missing_counter_is_unknown_reference() {
        let err = evaluate(&drop_rate(), &values(&[("call_drops", 1.0)])).unwrap_err();
        assert_eq!(
            err,
            FormulaError::UnknownCounterReference {
                counter_id: "total_call_attempts".to_string()
            }
        );
    }

    #[test]
    fn test_arithmetic_operators() {
        let cases = [
            (Operator::Add, 9.0),
            (Operator::Subtract, 3.0),
            (Operator::Multiply, 18.0),
            (Operator::Divide, 2.0),
            (Operator::Scale, 18.0),
        ];

        for (operator, expected) in cases {
            let node = FormulaNode::operator(operator, FormulaNode::number(6.0), FormulaNode::number(3.0));
            assert_eq!(evaluate(&node, &values(&[])).unwrap(), Evaluation::Value(expected), "operator {operator}");
        }
    }

    #[test]
    fn test_scale_is_not_remainder() {
        let node = FormulaNode::operator(Operator::Scale, FormulaNode::number(0.25), FormulaNode::number(100.0));
        assert_eq!(evaluate(&node, &values(&[])).unwrap(), Evaluation::Value(25.0));
    }

    #[test]
    fn test_drop_rate_percentages() {
        let all_dropped = values(&[("call_drops", 100.0), ("total_call_attempts", 100.0)]);
        assert_eq!(evaluate(&drop_rate(), &all_dropped).unwrap(), Evaluation::Value(100.0));

        let none_dropped = values(&[("call_drops", 0.0), ("total_call_attempts", 100.0)]);
        assert_eq!(evaluate(&drop_rate(), &none_dropped).unwrap(), Evaluation::Value(0.0));
    }

    #[test]
    fn test_division_by_zero_is_indeterminate() {
        let zero_attempts = values(&[("call_drops", 5.0), ("total_call_attempts", 0.0)]);
        assert_eq!(evaluate(&drop_rate(), &zero_attempts).unwrap(), Evaluation::Indeterminate);
    }

    #[test]
    fn test_zero_over_zero_is_indeterminate() {
        let node = FormulaNode::ratio(FormulaNode::number(0.0), FormulaNode::number(0.0));
        assert_eq!(evaluate(&node, &values(&[])).unwrap(), Evaluation::Indeterminate);
    }

    #[test]
    fn test_indeterminate_propagates_through_every_operator() {
        let indeterminate = FormulaNode::ratio(FormulaNode::number(1.0), FormulaNode::number(0.0));
        for operator in [Operator::Add, Operator::Subtract, Operator::Multiply, Operator::Divide, Operator::Scale] {
            let left = FormulaNode::operator(operator, indeterminate.clone(), FormulaNode::number(2.0));
            let right = FormulaNode::operator(operator, FormulaNode::number(2.0), indeterminate.clone());
            assert_eq!(evaluate(&left, &values(&[])).unwrap(), Evaluation::Indeterminate);
            assert_eq!(evaluate(&right, &values(&[])).unwrap(), Evaluation::Indeterminate);
        }
    }

    #[test]
    fn test_error_wins_over_indeterminate_sibling() {
        let node = FormulaNode::operator(
            Operator::Add,
            FormulaNode::ratio(FormulaNode::number(1.0), FormulaNode::number(0.0)),
            FormulaNode::counter("ghost", "Ghost"),
        );
        assert_eq!(evaluate(&node, &values(&[])).unwrap_err(), FormulaError::unknown_counter("ghost"));
    }

    #[test]
    fn test_wrong_arity_is_malformed() {
        let node = FormulaNode::Operator {
            operator: Operator::Divide,
            children: vec![FormulaNode::number(1.0), FormulaNode::number(2.0), FormulaNode::number(3.0)],
        };
        assert!(matches!(evaluate(&node, &values(&[])), Err(FormulaError::MalformedNode { .. })));

        let node = FormulaNode::Operator {
            operator: Operator::Add,
            children: vec![],
        };
        assert!(matches!(evaluate(&node, &values(&[])), Err(FormulaError::MalformedNode { .. })));
    }

    #[test]
    fn test_empty_counter_id_is_malformed() {
        let node = FormulaNode::Counter {
            counter_id: " ".to_string(),
            counter_name: Some("Nameless".to_string()),
        };
        assert!(matches!(evaluate(&node, &values(&[])), Err(FormulaError::MalformedNode { .. })));
    }

    #[test]
    fn test_non_finite_counter_value_is_indeterminate() {
        let node = FormulaNode::counter("call_drops", "Call Drops");
        assert_eq!(evaluate(&node, &values(&[("call_drops", f64::NAN)])).unwrap(), Evaluation::Indeterminate);
    }

    #[test]
    fn test_overflow_is_indeterminate() {
        let node = FormulaNode::operator(Operator::Multiply, FormulaNode::number(f64::MAX), FormulaNode::number(10.0));
        assert_eq!(evaluate(&node, &values(&[])).unwrap(), Evaluation::Indeterminate);
    }

    #[test]
    fn test_btree_map_provider() {
        let mut values = BTreeMap::new();
        let _ = values.insert("call_drops".to_string(), 2.0);
        let _ = values.insert("total_call_attempts".to_string(), 8.0);
        assert_eq!(evaluate(&drop_rate(), &values).unwrap(), Evaluation::Value(25.0));
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let values = values(&[("call_drops", 3.0), ("total_call_attempts", 7.0)]);
        let first = evaluate(&drop_rate(), &values).unwrap();
        let second = evaluate(&drop_rate(), &values).unwrap();
        assert_eq!(first, second);
    }
}
