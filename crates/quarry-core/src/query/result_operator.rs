use super::Expr;
use crate::stmt::Type;

use std::fmt;

/// An operator applied to the result of a query.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultOperator {
    Count,
    LongCount,
    Sum,
    Min,
    Max,
    Average,
    Distinct,
    Take(Expr),
    Skip(Expr),
    First { or_default: bool },
    Single { or_default: bool },
    Any,
    All(Expr),
    Contains(Expr),
    DefaultIfEmpty,
}

impl ResultOperator {
    /// Type of the query result after applying the operator to items of
    /// `item_type`.
    pub fn result_type(&self, item_type: &Type) -> Type {
        match self {
            ResultOperator::Count => Type::I32,
            ResultOperator::LongCount => Type::I64,
            ResultOperator::Average => Type::F64,
            ResultOperator::Sum | ResultOperator::Min | ResultOperator::Max => item_type.clone(),
            ResultOperator::First { .. } | ResultOperator::Single { .. } => item_type.clone(),
            ResultOperator::Any | ResultOperator::All(_) | ResultOperator::Contains(_) => Type::Bool,
            ResultOperator::Distinct
            | ResultOperator::Take(_)
            | ResultOperator::Skip(_)
            | ResultOperator::DefaultIfEmpty => Type::list(item_type.clone()),
        }
    }

    /// Returns `true` if the operator keeps the result a sequence.
    pub fn is_streamed(&self) -> bool {
        matches!(
            self,
            ResultOperator::Distinct
                | ResultOperator::Take(_)
                | ResultOperator::Skip(_)
                | ResultOperator::DefaultIfEmpty
        )
    }
}

impl fmt::Display for ResultOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultOperator::Count => f.write_str("Count()"),
            ResultOperator::LongCount => f.write_str("LongCount()"),
            ResultOperator::Sum => f.write_str("Sum()"),
            ResultOperator::Min => f.write_str("Min()"),
            ResultOperator::Max => f.write_str("Max()"),
            ResultOperator::Average => f.write_str("Average()"),
            ResultOperator::Distinct => f.write_str("Distinct()"),
            ResultOperator::Take(count) => write!(f, "Take({count})"),
            ResultOperator::Skip(count) => write!(f, "Skip({count})"),
            ResultOperator::First { or_default: false } => f.write_str("First()"),
            ResultOperator::First { or_default: true } => f.write_str("FirstOrDefault()"),
            ResultOperator::Single { or_default: false } => f.write_str("Single()"),
            ResultOperator::Single { or_default: true } => f.write_str("SingleOrDefault()"),
            ResultOperator::Any => f.write_str("Any()"),
            ResultOperator::All(predicate) => write!(f, "All({predicate})"),
            ResultOperator::Contains(item) => write!(f, "Contains({item})"),
            ResultOperator::DefaultIfEmpty => f.write_str("DefaultIfEmpty()"),
        }
    }
}
