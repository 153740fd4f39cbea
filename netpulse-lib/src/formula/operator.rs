use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Binary operators available in formulas, displayed and serialized by their symbol.
///
/// `%` is not remainder. Catalog formulas use it to turn a ratio into a
/// percentage (`ratio % 100`), so it evaluates to the product of its operands and
/// is modelled here as [`Operator::Scale`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize)]
pub enum Operator {
    #[strum(serialize = "+")]
    #[serde(rename = "+")]
    Add,

    #[strum(serialize = "-")]
    #[serde(rename = "-")]
    Subtract,

    #[strum(serialize = "*")]
    #[serde(rename = "*")]
    Multiply,

    #[strum(serialize = "/")]
    #[serde(rename = "/")]
    Divide,

    /// Scale to percentage: `lhs × rhs`
    #[strum(serialize = "%")]
    #[serde(rename = "%")]
    Scale,
}

impl Operator {
    /// Number of operands. Every current operator is binary.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Add | Self::Subtract | Self::Multiply | Self::Divide | Self::Scale => 2,
        }
    }
}
