use super::{Expr, Type};

/// Converts an expression to a SQL type: `CONVERT(type, source)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprConvert {
    pub ty: Type,
    pub source: Box<Expr>,
}

impl Expr {
    pub fn convert(ty: Type, source: impl Into<Expr>) -> Expr {
        ExprConvert {
            ty,
            source: Box::new(source.into()),
        }
        .into()
    }
}

impl From<ExprConvert> for Expr {
    fn from(value: ExprConvert) -> Self {
        Expr::Convert(value)
    }
}
