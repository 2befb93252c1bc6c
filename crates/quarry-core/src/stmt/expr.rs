use super::*;

use std::fmt;

/// A node of the SQL statement model.
///
/// `Member`, `MethodCall`, `TableReference` and `EntityRefMember` only exist
/// between preparation and resolution. Everything else can reach the SQL
/// generator.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Aggregate function over the projection
    Aggregation(ExprAggregation),

    /// Binary expression
    BinaryOp(ExprBinaryOp),

    /// `CASE WHEN .. THEN .. ELSE .. END`
    Case(ExprCase),

    /// References a column of a table in the statement
    Column(SqlColumn),

    /// A constant, bound as a parameter
    Constant(Value),

    /// Conversion to a SQL type
    Convert(ExprConvert),

    /// A whole mapped object with its columns
    Entity(SqlEntity),

    /// A relation member that still needs a join
    EntityRefMember(ExprEntityRefMember),

    /// `EXISTS(..)`
    Exists(ExprExists),

    /// SQL function call
    Func(ExprFunc),

    /// Key and elements of a grouped statement
    GroupingSelect(ExprGroupingSelect),

    /// Whether an expression is (or is not) null. This is different from a
    /// binary expression because of how databases treat null comparisons.
    IsNull(ExprIsNull),

    /// Literal inlined into the SQL text
    Literal(SqlLiteral),

    /// Unresolved member access
    Member(ExprMember),

    /// Unresolved method call
    MethodCall(ExprMethodCall),

    /// An expression with an output name
    Named(ExprNamed),

    /// Record of named values
    New(ExprNew),

    /// Nested statement
    Stmt(ExprStmt),

    /// Unresolved reference to the items of a table
    TableReference(ExprTableReference),

    /// Unary expression
    UnaryOp(ExprUnaryOp),
}

impl Expr {
    pub fn null() -> Self {
        Self::Constant(Value::Null)
    }

    pub fn constant(value: impl Into<Value>) -> Self {
        Self::Constant(value.into())
    }

    /// Is a value that evaluates to null
    pub fn is_constant_null(&self) -> bool {
        matches!(self, Self::Constant(Value::Null))
    }

    pub fn is_entity(&self) -> bool {
        matches!(self, Self::Entity(_))
    }

    pub fn as_entity(&self) -> Option<&SqlEntity> {
        match self {
            Self::Entity(entity) => Some(entity),
            _ => None,
        }
    }

    pub fn is_stmt(&self) -> bool {
        matches!(self, Self::Stmt(_))
    }

    /// Returns `true` for expressions that evaluate to a SQL predicate
    /// rather than a value.
    pub fn is_predicate(&self) -> bool {
        match self {
            Self::BinaryOp(e) => e.op.is_comparison() || e.op.is_logical(),
            Self::IsNull(_) | Self::Exists(_) => true,
            Self::UnaryOp(e) => e.op == UnaryOp::Not && e.ty.is_bool(),
            _ => false,
        }
    }

    /// Returns `true` if the expression has not been through mapping
    /// resolution yet.
    pub fn is_unresolved(&self) -> bool {
        matches!(
            self,
            Self::Member(_) | Self::MethodCall(_) | Self::TableReference(_) | Self::EntityRefMember(_)
        )
    }

    /// The static type the expression evaluates to.
    pub fn ty(&self) -> Type {
        match self {
            Self::Aggregation(e) => match e.modifier {
                AggregationModifier::Count => Type::I32,
                AggregationModifier::LongCount => Type::I64,
                AggregationModifier::Average => Type::F64,
                _ => e.expr.ty(),
            },
            Self::BinaryOp(e) if e.op.is_comparison() || e.op.is_logical() => Type::Bool,
            Self::BinaryOp(e) => e.lhs.ty(),
            Self::Case(e) => e.then.ty(),
            Self::Column(e) => e.ty.clone(),
            Self::Constant(value) => value.ty(),
            Self::Convert(e) => e.ty.clone(),
            Self::Entity(e) => e.item_type.clone(),
            Self::EntityRefMember(e) => e.item_type.clone(),
            Self::Exists(_) | Self::IsNull(_) => Type::Bool,
            Self::Func(e) => e.ty.clone(),
            Self::GroupingSelect(e) => Type::grouping(e.key.ty(), e.element.ty()),
            Self::Literal(SqlLiteral::Int(_)) => Type::I32,
            Self::Literal(SqlLiteral::Text(_)) => Type::String,
            Self::Member(e) => e.ty.clone(),
            Self::MethodCall(e) => e.ty.clone(),
            Self::Named(e) => e.expr.ty(),
            Self::New(_) => Type::Record,
            Self::Stmt(e) => e.stmt.data_info.item_type().clone(),
            Self::TableReference(e) => e.item_type.clone(),
            Self::UnaryOp(e) if e.op == UnaryOp::Not && e.ty.is_bool() => Type::Bool,
            Self::UnaryOp(e) => e.ty.clone(),
        }
    }

    /// Name of the expression kind, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Aggregation(_) => "Aggregation",
            Self::BinaryOp(_) => "BinaryOp",
            Self::Case(_) => "Case",
            Self::Column(column) if column.is_reference() => "ColumnReference",
            Self::Column(_) => "ColumnDefinition",
            Self::Constant(_) => "Constant",
            Self::Convert(_) => "Convert",
            Self::Entity(entity) if entity.is_reference() => "EntityReference",
            Self::Entity(_) => "EntityDefinition",
            Self::EntityRefMember(_) => "EntityRefMember",
            Self::Exists(_) => "Exists",
            Self::Func(_) => "Func",
            Self::GroupingSelect(_) => "GroupingSelect",
            Self::IsNull(_) => "IsNull",
            Self::Literal(_) => "Literal",
            Self::Member(_) => "Member",
            Self::MethodCall(_) => "MethodCall",
            Self::Named(_) => "Named",
            Self::New(_) => "New",
            Self::Stmt(_) => "Stmt",
            Self::TableReference(_) => "TableReference",
            Self::UnaryOp(_) => "UnaryOp",
        }
    }

    pub fn take(&mut self) -> Self {
        std::mem::replace(self, Self::null())
    }
}

impl Default for Expr {
    fn default() -> Self {
        Self::null()
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Constant(value)
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Self::Constant(value.into())
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Self::Constant(value.into())
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Self::Constant(value.into())
    }
}

fn fmt_list(f: &mut fmt::Formatter<'_>, items: &[Expr]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aggregation(e) => write!(f, "{}({})", e.modifier, e.expr),
            Self::BinaryOp(e) => write!(f, "({} {} {})", e.lhs, e.op, e.rhs),
            Self::Case(e) => write!(f, "IIF({}, {}, {})", e.test, e.then, e.otherwise),
            Self::Column(e) => write!(f, "{e}"),
            Self::Constant(value) => write!(f, "{value}"),
            Self::Convert(e) => write!(f, "Convert({}, {})", e.source, e.ty),
            Self::Entity(e) => write!(f, "{e}"),
            Self::EntityRefMember(e) => write!(
                f,
                "[{}].{} (ENTITY-REF-MEMBER)",
                e.originating_entity.table_alias, e.member.name
            ),
            Self::Exists(e) => write!(f, "EXISTS({})", e.subquery),
            Self::Func(e) => {
                write!(f, "{}(", e.name)?;
                fmt_list(f, &e.args)?;
                f.write_str(")")
            }
            Self::GroupingSelect(e) => write!(f, "GROUPING (KEY: {}, ELEMENT: {})", e.key, e.element),
            Self::IsNull(e) if e.negate => write!(f, "({} IS NOT NULL)", e.expr),
            Self::IsNull(e) => write!(f, "({} IS NULL)", e.expr),
            Self::Literal(SqlLiteral::Int(value)) => write!(f, "{value}"),
            Self::Literal(SqlLiteral::Text(value)) => write!(f, "'{value}'"),
            Self::Member(e) => write!(f, "{}.{}", e.expr, e.member.name),
            Self::MethodCall(e) => {
                match &e.instance {
                    Some(instance) => write!(f, "{instance}.{}(", e.method.name)?,
                    None => write!(f, "{}(", e.method)?,
                }
                fmt_list(f, &e.args)?;
                f.write_str(")")
            }
            Self::Named(e) => write!(f, "{} AS {}", e.expr, e.output_name()),
            Self::New(e) => {
                f.write_str("new Record(")?;
                for (i, member) in e.members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{} = {}", member.output_name(), member.expr)?;
                }
                f.write_str(")")
            }
            Self::Stmt(e) => write!(f, "({})", e.stmt),
            Self::TableReference(e) => write!(f, "TABLE-REF({})", e.item_type),
            Self::UnaryOp(e) => match e.op {
                UnaryOp::Convert => write!(f, "{}", e.operand),
                op => write!(f, "{op}{}", e.operand),
            },
        }
    }
}
