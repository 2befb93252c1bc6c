use super::Expr;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationModifier {
    Count,

    /// `COUNT(*)` read as a 64-bit integer
    LongCount,

    Sum,
    Min,
    Max,
    Average,
}

/// An aggregate function applied to the projection of a statement.
///
/// `Count` and `LongCount` ignore their inner expression and render as
/// `COUNT(*)`. The other modifiers render their inner expression with any name wrapper removed.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprAggregation {
    pub modifier: AggregationModifier,
    pub expr: Box<Expr>,
}

impl Expr {
    pub fn aggregation(modifier: AggregationModifier, expr: impl Into<Expr>) -> Expr {
        ExprAggregation {
            modifier,
            expr: Box::new(expr.into()),
        }
        .into()
    }
}

impl From<ExprAggregation> for Expr {
    fn from(value: ExprAggregation) -> Self {
        Expr::Aggregation(value)
    }
}

impl fmt::Display for AggregationModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregationModifier::Count => f.write_str("Count"),
            AggregationModifier::LongCount => f.write_str("LongCount"),
            AggregationModifier::Sum => f.write_str("Sum"),
            AggregationModifier::Min => f.write_str("Min"),
            AggregationModifier::Max => f.write_str("Max"),
            AggregationModifier::Average => f.write_str("Average"),
        }
    }
}
