use super::{unsupported_arity, MethodCallTransformer};

use quarry_core::{
    stmt::{Expr, ExprMethodCall, Type},
    Result,
};

/// `s.ToUpper()` and `s.ToLower()` become `UPPER(s)` and `LOWER(s)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringCase {
    Upper,
    Lower,
}

impl StringCase {
    fn function_name(self) -> &'static str {
        match self {
            StringCase::Upper => "UPPER",
            StringCase::Lower => "LOWER",
        }
    }
}

impl MethodCallTransformer for StringCase {
    fn transform(&self, call: ExprMethodCall) -> Result<Expr> {
        match call.instance {
            Some(instance) if call.args.is_empty() => {
                Ok(Expr::func(self.function_name(), vec![*instance], Type::String))
            }
            _ => Err(unsupported_arity(&call.method, call.args.len())),
        }
    }
}
