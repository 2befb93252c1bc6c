use super::{QueryModel, QuerySourceId};
use crate::stmt::{BinaryOp, Member, Method, Type, TypeName, UnaryOp, Value};

use std::fmt;

/// An input expression of the query model.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Constant(Value),

    /// The queryable root holding all objects of a domain type
    Table(TypeName),

    /// The current item of a from, join or let clause
    QuerySource(QuerySourceRef),

    Member(ExprMember),
    Binary(ExprBinary),
    Unary(ExprUnary),
    MethodCall(ExprMethodCall),
    SubQuery(Box<QueryModel>),
    Conditional(ExprConditional),
    Convert(ExprConvert),

    /// Construction of an object from named values
    New(ExprNew),
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuerySourceRef {
    pub id: QuerySourceId,
    pub name: String,
    pub ty: Type,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprMember {
    pub expr: Box<Expr>,
    pub member: Member,
    pub ty: Type,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprBinary {
    pub op: BinaryOp,
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprUnary {
    pub op: UnaryOp,
    pub operand: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprMethodCall {
    pub method: Method,
    pub instance: Option<Box<Expr>>,
    pub args: Vec<Expr>,
    pub ty: Type,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprConditional {
    pub test: Box<Expr>,
    pub then: Box<Expr>,
    pub otherwise: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprConvert {
    pub ty: Type,
    pub operand: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprNew {
    pub members: Vec<(String, Expr)>,
}

impl Expr {
    pub fn constant(value: impl Into<Value>) -> Expr {
        Expr::Constant(value.into())
    }

    pub fn table(ty: impl Into<TypeName>) -> Expr {
        Expr::Table(ty.into())
    }

    pub fn member(expr: Expr, member: Member, ty: Type) -> Expr {
        Expr::Member(ExprMember {
            expr: Box::new(expr),
            member,
            ty,
        })
    }

    /// Shorthand for a member declared by the expression's own entity type.
    pub fn field(self, name: &str, ty: Type) -> Expr {
        let declaring_type = match self.ty() {
            Type::Entity(name) => name,
            other => TypeName::new(other.to_string()),
        };
        Expr::member(self, Member::new(declaring_type, name), ty)
    }

    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
        Expr::Binary(ExprBinary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }

    pub fn eq(lhs: Expr, rhs: Expr) -> Expr {
        Expr::binary(BinaryOp::Eq, lhs, rhs)
    }

    pub fn and(lhs: Expr, rhs: Expr) -> Expr {
        Expr::binary(BinaryOp::And, lhs, rhs)
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Expr {
        Expr::Unary(ExprUnary {
            op,
            operand: Box::new(operand),
        })
    }

    pub fn not(operand: Expr) -> Expr {
        Expr::unary(UnaryOp::Not, operand)
    }

    pub fn method_call(method: Method, instance: Option<Expr>, args: Vec<Expr>, ty: Type) -> Expr {
        Expr::MethodCall(ExprMethodCall {
            method,
            instance: instance.map(Box::new),
            args,
            ty,
        })
    }

    pub fn sub_query(model: QueryModel) -> Expr {
        Expr::SubQuery(Box::new(model))
    }

    pub fn conditional(test: Expr, then: Expr, otherwise: Expr) -> Expr {
        Expr::Conditional(ExprConditional {
            test: Box::new(test),
            then: Box::new(then),
            otherwise: Box::new(otherwise),
        })
    }

    pub fn convert(ty: Type, operand: Expr) -> Expr {
        Expr::Convert(ExprConvert {
            ty,
            operand: Box::new(operand),
        })
    }

    pub fn new_record<S: Into<String>>(members: impl IntoIterator<Item = (S, Expr)>) -> Expr {
        Expr::New(ExprNew {
            members: members
                .into_iter()
                .map(|(name, expr)| (name.into(), expr))
                .collect(),
        })
    }

    pub fn ty(&self) -> Type {
        match self {
            Expr::Constant(value) => value.ty(),
            Expr::Table(name) => Type::list(Type::Entity(name.clone())),
            Expr::QuerySource(source) => source.ty.clone(),
            Expr::Member(e) => e.ty.clone(),
            Expr::Binary(e) if e.op.is_comparison() || e.op.is_logical() => Type::Bool,
            Expr::Binary(e) => e.lhs.ty(),
            Expr::Unary(e) => e.operand.ty(),
            Expr::MethodCall(e) => e.ty.clone(),
            Expr::SubQuery(model) => model.result_type(),
            Expr::Conditional(e) => e.then.ty(),
            Expr::Convert(e) => e.ty.clone(),
            Expr::New(_) => Type::Record,
        }
    }

    /// Name of the expression kind, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Constant(_) => "Constant",
            Expr::Table(_) => "Table",
            Expr::QuerySource(_) => "QuerySourceReference",
            Expr::Member(_) => "Member",
            Expr::Binary(_) => "Binary",
            Expr::Unary(_) => "Unary",
            Expr::MethodCall(_) => "MethodCall",
            Expr::SubQuery(_) => "SubQuery",
            Expr::Conditional(_) => "Conditional",
            Expr::Convert(_) => "Convert",
            Expr::New(_) => "New",
        }
    }
}

impl From<QuerySourceRef> for Expr {
    fn from(value: QuerySourceRef) -> Self {
        Expr::QuerySource(value)
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Expr::Constant(value)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Constant(value) => write!(f, "{value}"),
            Expr::Table(name) => write!(f, "TABLE({name})"),
            Expr::QuerySource(source) => write!(f, "[{}]", source.name),
            Expr::Member(e) => write!(f, "{}.{}", e.expr, e.member.name),
            Expr::Binary(e) => write!(f, "({} {} {})", e.lhs, e.op, e.rhs),
            Expr::Unary(e) => match e.op {
                UnaryOp::Convert => write!(f, "{}", e.operand),
                op => write!(f, "{op}{}", e.operand),
            },
            Expr::MethodCall(e) => {
                match &e.instance {
                    Some(instance) => write!(f, "{instance}.{}(", e.method.name)?,
                    None => write!(f, "{}(", e.method)?,
                }
                for (i, arg) in e.args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
            Expr::SubQuery(model) => write!(f, "{{{model}}}"),
            Expr::Conditional(e) => write!(f, "IIF({}, {}, {})", e.test, e.then, e.otherwise),
            Expr::Convert(e) => write!(f, "Convert({}, {})", e.operand, e.ty),
            Expr::New(e) => {
                f.write_str("new Record(")?;
                for (i, (name, expr)) in e.members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{name} = {expr}")?;
                }
                f.write_str(")")
            }
        }
    }
}
