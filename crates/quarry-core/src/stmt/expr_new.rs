use super::{Expr, ExprNamed};

/// Projects several named values into one record.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprNew {
    pub members: Vec<ExprNamed>,
}

impl Expr {
    pub fn new_record(members: impl IntoIterator<Item = (String, Expr)>) -> Expr {
        ExprNew {
            members: members
                .into_iter()
                .map(|(name, expr)| ExprNamed {
                    name: Some(name),
                    expr: Box::new(expr),
                })
                .collect(),
        }
        .into()
    }
}

impl From<ExprNew> for Expr {
    fn from(value: ExprNew) -> Self {
        Expr::New(value)
    }
}
