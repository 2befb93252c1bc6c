use super::Expr;

/// `(expr IS NULL)` or, when `negate` is set, `(expr IS NOT NULL)`.
///
/// Resolution produces this node for comparisons against a null constant,
/// since `= NULL` never matches in SQL.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprIsNull {
    pub negate: bool,
    pub expr: Box<Expr>,
}

impl Expr {
    pub fn is_null(expr: impl Into<Expr>) -> Expr {
        Expr::IsNull(ExprIsNull {
            negate: false,
            expr: Box::new(expr.into()),
        })
    }

    pub fn is_not_null(expr: impl Into<Expr>) -> Expr {
        Expr::IsNull(ExprIsNull {
            negate: true,
            expr: Box::new(expr.into()),
        })
    }
}
