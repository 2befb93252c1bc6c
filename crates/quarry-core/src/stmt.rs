mod expr;
pub use expr::Expr;

mod expr_aggregation;
pub use expr_aggregation::{AggregationModifier, ExprAggregation};

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_case;
pub use expr_case::ExprCase;

mod expr_column;
pub use expr_column::{SqlColumn, SqlColumnKind};

mod expr_convert;
pub use expr_convert::ExprConvert;

mod expr_entity;
pub use expr_entity::SqlEntity;

mod expr_entity_ref_member;
pub use expr_entity_ref_member::ExprEntityRefMember;

mod expr_exists;
pub use expr_exists::ExprExists;

mod expr_func;
pub use expr_func::ExprFunc;

mod expr_grouping_select;
pub use expr_grouping_select::ExprGroupingSelect;

mod expr_is_null;
pub use expr_is_null::ExprIsNull;

mod expr_literal;
pub use expr_literal::SqlLiteral;

mod expr_member;
pub use expr_member::ExprMember;

mod expr_method_call;
pub use expr_method_call::ExprMethodCall;

mod expr_named;
pub use expr_named::ExprNamed;

mod expr_new;
pub use expr_new::ExprNew;

mod expr_stmt;
pub use expr_stmt::ExprStmt;

mod expr_table_reference;
pub use expr_table_reference::ExprTableReference;

mod expr_unary_op;
pub use expr_unary_op::ExprUnaryOp;

mod join;
pub use join::{
    Cardinality, JoinInfo, JoinSemantics, ResolvedJoinInfo, SqlAppendedTable, SqlJoin,
    UnresolvedJoinInfo,
};

mod member;
pub use member::{Member, Method};

mod op_binary;
pub use op_binary::BinaryOp;

mod op_unary;
pub use op_unary::UnaryOp;

mod statement;
pub use statement::{DataInfo, Ordering, OrderingDirection, SqlStatement};

mod table;
pub use table::{SqlTable, TableId, Tables};

mod table_info;
pub use table_info::{
    ResolvedJoinedGroupingTableInfo, ResolvedSimpleTableInfo, ResolvedSubStatementTableInfo,
    TableInfo, UnresolvedCollectionJoinInfo, UnresolvedDummyRowTableInfo,
    UnresolvedGroupReferenceTableInfo, UnresolvedTableInfo,
};

mod ty;
pub use ty::{Type, TypeName};

mod value;
pub use value::Value;

pub mod visit;
pub use visit::Visit;

pub mod visit_mut;
pub use visit_mut::VisitMut;
