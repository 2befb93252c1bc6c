use super::{Expr, Type, UnaryOp};

/// A unary operation. `ty` is the operand's type, which decides between
/// logical (`NOT`) and bitwise (`~`) negation.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprUnaryOp {
    pub op: UnaryOp,
    pub ty: Type,
    pub operand: Box<Expr>,
}

impl Expr {
    pub fn unary_op(op: UnaryOp, ty: Type, operand: impl Into<Expr>) -> Expr {
        ExprUnaryOp {
            op,
            ty,
            operand: Box::new(operand.into()),
        }
        .into()
    }

    pub fn not(operand: impl Into<Expr>) -> Expr {
        Expr::unary_op(UnaryOp::Not, Type::Bool, operand)
    }
}

impl From<ExprUnaryOp> for Expr {
    fn from(value: ExprUnaryOp) -> Self {
        Expr::UnaryOp(value)
    }
}
