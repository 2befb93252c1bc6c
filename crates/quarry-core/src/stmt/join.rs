use super::{Expr, Member, SqlEntity, TableId, TableInfo, Type};

/// How a joined table combines with its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinSemantics {
    Inner,
    Left,
}

/// Whether a relation member navigates to one object or to many.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    One,
    Many,
}

/// A table joined to another one. The condition is `None` for joins without
/// an `ON` clause (`CROSS JOIN`, `CROSS APPLY`, `OUTER APPLY`).
#[derive(Debug, Clone, PartialEq)]
pub struct SqlJoin {
    pub table: TableId,
    pub semantics: JoinSemantics,
    pub condition: Option<Expr>,
}

impl SqlJoin {
    pub fn new(table: TableId, semantics: JoinSemantics, condition: Option<Expr>) -> SqlJoin {
        SqlJoin {
            table,
            semantics,
            condition,
        }
    }
}

/// A table of the statement's `FROM` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SqlAppendedTable {
    pub table: TableId,
    pub semantics: JoinSemantics,
}

impl SqlAppendedTable {
    pub fn new(table: TableId, semantics: JoinSemantics) -> SqlAppendedTable {
        SqlAppendedTable { table, semantics }
    }
}

/// A relation member of an entity that the mapping resolver has not turned
/// into a foreign table and key pair yet.
#[derive(Debug, Clone, PartialEq)]
pub struct UnresolvedJoinInfo {
    pub originating_entity: SqlEntity,
    pub member: Member,
    pub cardinality: Cardinality,

    /// Type of the related entity
    pub item_type: Type,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedJoinInfo {
    pub foreign_table_info: Box<TableInfo>,

    /// Key on the originating entity's side
    pub left_key: Expr,

    /// Key on the foreign table's side
    pub right_key: Expr,
}

impl ResolvedJoinInfo {
    pub fn new(foreign_table_info: TableInfo, left_key: Expr, right_key: Expr) -> ResolvedJoinInfo {
        ResolvedJoinInfo {
            foreign_table_info: Box::new(foreign_table_info),
            left_key,
            right_key,
        }
    }

    /// `left_key = right_key`
    pub fn join_condition(&self) -> Expr {
        Expr::eq(self.left_key.clone(), self.right_key.clone())
    }
}

/// Answer of the mapping resolver for a relation. A resolver may answer with
/// another unresolved join, which is then resolved again.
#[derive(Debug, Clone, PartialEq)]
pub enum JoinInfo {
    Unresolved(UnresolvedJoinInfo),
    Resolved(ResolvedJoinInfo),
}
