use super::{Expr, SqlStatement};

/// A nested statement used as an expression, rendered in parentheses.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprStmt {
    pub stmt: Box<SqlStatement>,
}

impl Expr {
    pub fn stmt(stmt: SqlStatement) -> Expr {
        ExprStmt {
            stmt: Box::new(stmt),
        }
        .into()
    }
}

impl From<ExprStmt> for Expr {
    fn from(value: ExprStmt) -> Self {
        Expr::Stmt(value)
    }
}

impl From<SqlStatement> for Expr {
    fn from(value: SqlStatement) -> Self {
        Expr::stmt(value)
    }
}
