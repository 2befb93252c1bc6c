use super::{unsupported_arity, unsupported_form, MethodCallTransformer};

use quarry_core::{
    stmt::{Expr, ExprMethodCall},
    Result,
};

/// `a.Equals(b)` and `Equals(a, b)` become `a = b`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Equals;

impl MethodCallTransformer for Equals {
    fn transform(&self, call: ExprMethodCall) -> Result<Expr> {
        let arity = call.args.len();
        let mut args = call.args.into_iter();

        match (call.instance, args.next(), args.next()) {
            (Some(instance), Some(arg), None) => Ok(Expr::eq(*instance, arg)),
            (None, Some(lhs), Some(rhs)) if arity == 2 => Ok(Expr::eq(lhs, rhs)),
            (Some(_), ..) if arity == 2 => Err(unsupported_form(&call.method, true, arity)),
            (None, ..) if arity == 1 => Err(unsupported_form(&call.method, false, arity)),
            _ => Err(unsupported_arity(&call.method, arity)),
        }
    }
}
