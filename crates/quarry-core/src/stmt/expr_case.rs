use super::Expr;

/// `CASE WHEN test THEN then ELSE otherwise END`
#[derive(Debug, Clone, PartialEq)]
pub struct ExprCase {
    pub test: Box<Expr>,
    pub then: Box<Expr>,
    pub otherwise: Box<Expr>,
}

impl Expr {
    pub fn case(test: impl Into<Expr>, then: impl Into<Expr>, otherwise: impl Into<Expr>) -> Expr {
        ExprCase {
            test: Box::new(test.into()),
            then: Box::new(then.into()),
            otherwise: Box::new(otherwise.into()),
        }
        .into()
    }
}

impl From<ExprCase> for Expr {
    fn from(value: ExprCase) -> Self {
        Expr::Case(value)
    }
}
