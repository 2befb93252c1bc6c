use super::Expr;

/// Projection of a grouped statement: each row is a group identified by
/// `key`, whose elements are `element`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprGroupingSelect {
    pub key: Box<Expr>,
    pub element: Box<Expr>,
}

impl Expr {
    pub fn grouping_select(key: impl Into<Expr>, element: impl Into<Expr>) -> Expr {
        ExprGroupingSelect {
            key: Box::new(key.into()),
            element: Box::new(element.into()),
        }
        .into()
    }
}

impl From<ExprGroupingSelect> for Expr {
    fn from(value: ExprGroupingSelect) -> Self {
        Expr::GroupingSelect(value)
    }
}
