//! Rendering of formula trees as human-readable text

use super::formula_node::{checked_counter_id, operands};
use super::{FormulaError, FormulaNode};
use core::fmt::Write;

/// Render a formula tree as a fully parenthesized string.
///
/// Literals use their shortest decimal form, counters their cached name (or their
/// id when no name is cached), and every operator is wrapped in parentheses
/// regardless of precedence: `((Call Drops / Total Call Attempts) % 100)`.
///
/// # Errors
///
/// Returns [`FormulaError::MalformedNode`] for an operator with the wrong number of
/// children or a counter reference without an id.
pub fn format(node: &FormulaNode) -> Result<String, FormulaError> {
    let mut text = String::new();
    write_node(node, &mut text)?;
    Ok(text)
}

fn write_node(node: &FormulaNode, text: &mut String) -> Result<(), FormulaError> {
    match node {
        FormulaNode::Number { value } => {
            // folds -0 into 0
            let _ = write!(text, "{}", value + 0.0);
        }
        FormulaNode::Counter { counter_id, counter_name } => {
            let counter_id = checked_counter_id(counter_id)?;
            let label = counter_name.as_deref().filter(|name| !name.is_empty()).unwrap_or(counter_id);
            text.push_str(label);
        }
        FormulaNode::Operator { operator, children } => {
            let (lhs, rhs) = operands(*operator, children)?;
            text.push('(');
            write_node(lhs, text)?;
            let _ = write!(text, " {operator} ");
            write_node(rhs, text)?;
            text.push(')');
        }
    }

    Ok(())
}
