use super::Expr;

/// A literal inlined into the SQL text rather than bound as a parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlLiteral {
    Int(i64),
    Text(String),
}

impl Expr {
    pub fn literal_int(value: i64) -> Expr {
        Expr::Literal(SqlLiteral::Int(value))
    }

    pub fn literal_text(value: impl Into<String>) -> Expr {
        Expr::Literal(SqlLiteral::Text(value.into()))
    }
}

impl From<SqlLiteral> for Expr {
    fn from(value: SqlLiteral) -> Self {
        Expr::Literal(value)
    }
}
