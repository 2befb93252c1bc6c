use super::{Expr, Type};

/// A call to a SQL function: `NAME(arg, arg, ...)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprFunc {
    pub name: String,
    pub args: Vec<Expr>,

    /// Return type
    pub ty: Type,
}

impl Expr {
    pub fn func(name: impl Into<String>, args: Vec<Expr>, ty: Type) -> Expr {
        ExprFunc {
            name: name.into(),
            args,
            ty,
        }
        .into()
    }
}

impl From<ExprFunc> for Expr {
    fn from(value: ExprFunc) -> Self {
        Expr::Func(value)
    }
}
