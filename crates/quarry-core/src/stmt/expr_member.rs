use super::{Expr, Member, Type};

/// Access to a member of an expression, awaiting resolution against the
/// mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprMember {
    pub expr: Box<Expr>,
    pub member: Member,
    pub ty: Type,
}

impl Expr {
    pub fn member(expr: impl Into<Expr>, member: Member, ty: Type) -> Expr {
        ExprMember {
            expr: Box::new(expr.into()),
            member,
            ty,
        }
        .into()
    }
}

impl From<ExprMember> for Expr {
    fn from(value: ExprMember) -> Self {
        Expr::Member(value)
    }
}
