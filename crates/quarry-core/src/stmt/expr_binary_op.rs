use super::{BinaryOp, Expr};

/// `(lhs OP rhs)`. Comparisons, logical connectives, arithmetic, `IN` and
/// `COALESCE` all share this node; the operator decides the SQL text.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprBinaryOp {
    pub lhs: Box<Expr>,
    pub op: BinaryOp,
    pub rhs: Box<Expr>,
}

impl Expr {
    pub fn binary_op(lhs: impl Into<Expr>, op: BinaryOp, rhs: impl Into<Expr>) -> Expr {
        Expr::BinaryOp(ExprBinaryOp {
            lhs: Box::new(lhs.into()),
            op,
            rhs: Box::new(rhs.into()),
        })
    }

    pub fn eq(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::binary_op(lhs, BinaryOp::Eq, rhs)
    }

    pub fn and(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::binary_op(lhs, BinaryOp::And, rhs)
    }

    /// `lhs AND rhs`, or just `rhs` when there is no `lhs` yet. Used to
    /// accumulate `WHERE` conditions.
    pub fn and_optional(lhs: Option<Expr>, rhs: Expr) -> Expr {
        match lhs {
            Some(lhs) => Expr::and(lhs, rhs),
            None => rhs,
        }
    }
}
