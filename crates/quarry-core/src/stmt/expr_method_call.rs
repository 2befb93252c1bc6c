use super::{Expr, Method, Type};

/// A method call left in the tree until a method-call transformer rewrites
/// it into SQL-native expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprMethodCall {
    pub method: Method,

    /// Receiver of an instance call; `None` for static calls.
    pub instance: Option<Box<Expr>>,

    pub args: Vec<Expr>,

    /// Return type
    pub ty: Type,
}

impl Expr {
    pub fn method_call(
        method: Method,
        instance: Option<Expr>,
        args: Vec<Expr>,
        ty: Type,
    ) -> Expr {
        ExprMethodCall {
            method,
            instance: instance.map(Box::new),
            args,
            ty,
        }
        .into()
    }
}

impl From<ExprMethodCall> for Expr {
    fn from(value: ExprMethodCall) -> Self {
        Expr::MethodCall(value)
    }
}
