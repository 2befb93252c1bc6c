use super::{unsupported_arity, unsupported_form, MethodCallTransformer};

use quarry_core::{
    stmt::{BinaryOp, Expr, ExprMethodCall, Type},
    Result,
};

/// Membership and substring tests.
///
/// `list.Contains(x)` and `Contains(list, x)` become `x IN list`, which also
/// covers the empty list. On a string instance, `s.Contains(x)` becomes
/// `CHARINDEX(x, s) > 0`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Contains;

impl MethodCallTransformer for Contains {
    fn transform(&self, call: ExprMethodCall) -> Result<Expr> {
        let arity = call.args.len();
        let mut args = call.args.into_iter();

        match (call.instance, args.next(), args.next()) {
            (Some(instance), Some(arg), None) if instance.ty() == Type::String => {
                let position = Expr::func("CHARINDEX", vec![arg, *instance], Type::I32);
                Ok(Expr::binary_op(position, BinaryOp::Gt, Expr::literal_int(0)))
            }
            (Some(instance), Some(arg), None) => Ok(Expr::binary_op(arg, BinaryOp::In, *instance)),
            (None, Some(list), Some(arg)) if arity == 2 => {
                Ok(Expr::binary_op(arg, BinaryOp::In, list))
            }
            (Some(_), ..) if arity == 2 => Err(unsupported_form(&call.method, true, arity)),
            (None, ..) if arity == 1 => Err(unsupported_form(&call.method, false, arity)),
            _ => Err(unsupported_arity(&call.method, arity)),
        }
    }
}
