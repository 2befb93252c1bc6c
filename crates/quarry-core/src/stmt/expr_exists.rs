use super::Expr;

/// `EXISTS(subquery)`
#[derive(Debug, Clone, PartialEq)]
pub struct ExprExists {
    pub subquery: Box<Expr>,
}

impl Expr {
    pub fn exists(subquery: impl Into<Expr>) -> Expr {
        ExprExists {
            subquery: Box::new(subquery.into()),
        }
        .into()
    }
}

impl From<ExprExists> for Expr {
    fn from(value: ExprExists) -> Self {
        Expr::Exists(value)
    }
}
