use super::{Expr, Member, SqlStatement, Type, UnresolvedJoinInfo};

use std::fmt;

/// Describes the data source underneath a table.
///
/// The `Unresolved*` variants are placeholders created while preparing the
/// statement. Mapping resolution replaces all of them; the SQL generator
/// rejects any it encounters.
#[derive(Debug, Clone, PartialEq)]
pub enum TableInfo {
    Unresolved(UnresolvedTableInfo),
    UnresolvedJoin(UnresolvedJoinInfo),
    UnresolvedCollectionJoin(UnresolvedCollectionJoinInfo),
    UnresolvedDummyRow(UnresolvedDummyRowTableInfo),
    UnresolvedGroupReference(UnresolvedGroupReferenceTableInfo),
    ResolvedSimple(ResolvedSimpleTableInfo),
    ResolvedSubStatement(ResolvedSubStatementTableInfo),
    ResolvedJoinedGrouping(ResolvedJoinedGroupingTableInfo),
}

/// A table known only by the domain type of its items.
#[derive(Debug, Clone, PartialEq)]
pub struct UnresolvedTableInfo {
    pub item_type: Type,
}

/// Items reached by navigating a collection member of another source, e.g.
/// `from c in kitchen.Cooks`.
#[derive(Debug, Clone, PartialEq)]
pub struct UnresolvedCollectionJoinInfo {
    /// Expression yielding the object that owns the collection
    pub source: Expr,
    pub member: Member,
    pub item_type: Type,
}

/// A single row without columns, used as the seed of an `OUTER APPLY`.
#[derive(Debug, Clone, PartialEq)]
pub struct UnresolvedDummyRowTableInfo;

/// Elements of the groups produced by a grouping sub-statement.
#[derive(Debug, Clone, PartialEq)]
pub struct UnresolvedGroupReferenceTableInfo {
    /// Alias of the table that yields the groups
    pub grouping_alias: String,

    /// The grouping statement, as prepared
    pub grouping_statement: Box<SqlStatement>,

    /// Type of the group elements
    pub item_type: Type,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSimpleTableInfo {
    pub item_type: Type,

    /// Table name, possibly qualified with `.` separators
    pub table_name: String,

    pub table_alias: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSubStatementTableInfo {
    pub table_alias: String,
    pub statement: Box<SqlStatement>,
}

/// The elements of one group of a grouping statement, selected by a
/// correlated sub-statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedJoinedGroupingTableInfo {
    pub table_alias: String,
    pub statement: Box<SqlStatement>,

    /// Key of the group the statement is correlated with, as projected by
    /// the grouping table
    pub grouping_key: Expr,

    /// Alias of the table yielding the groups
    pub grouping_alias: String,
}

impl TableInfo {
    pub fn resolved_simple(
        item_type: Type,
        table_name: impl Into<String>,
        table_alias: impl Into<String>,
    ) -> TableInfo {
        TableInfo::ResolvedSimple(ResolvedSimpleTableInfo {
            item_type,
            table_name: table_name.into(),
            table_alias: table_alias.into(),
        })
    }

    pub fn resolved_sub_statement(table_alias: impl Into<String>, statement: SqlStatement) -> TableInfo {
        TableInfo::ResolvedSubStatement(ResolvedSubStatementTableInfo {
            table_alias: table_alias.into(),
            statement: Box::new(statement),
        })
    }

    pub fn unresolved(item_type: Type) -> TableInfo {
        TableInfo::Unresolved(UnresolvedTableInfo { item_type })
    }

    pub fn item_type(&self) -> Type {
        match self {
            TableInfo::Unresolved(info) => info.item_type.clone(),
            TableInfo::UnresolvedJoin(info) => info.item_type.clone(),
            TableInfo::UnresolvedCollectionJoin(info) => info.item_type.clone(),
            TableInfo::UnresolvedDummyRow(_) => Type::Null,
            TableInfo::UnresolvedGroupReference(info) => info.item_type.clone(),
            TableInfo::ResolvedSimple(info) => info.item_type.clone(),
            TableInfo::ResolvedSubStatement(info) => info.statement.data_info.item_type().clone(),
            TableInfo::ResolvedJoinedGrouping(info) => info.statement.data_info.item_type().clone(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(
            self,
            TableInfo::ResolvedSimple(_)
                | TableInfo::ResolvedSubStatement(_)
                | TableInfo::ResolvedJoinedGrouping(_)
        )
    }

    /// Alias of a resolved table.
    pub fn table_alias(&self) -> Option<&str> {
        match self {
            TableInfo::ResolvedSimple(info) => Some(&info.table_alias),
            TableInfo::ResolvedSubStatement(info) => Some(&info.table_alias),
            TableInfo::ResolvedJoinedGrouping(info) => Some(&info.table_alias),
            _ => None,
        }
    }

    /// Name of the variant, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            TableInfo::Unresolved(_) => "UnresolvedTableInfo",
            TableInfo::UnresolvedJoin(_) => "UnresolvedJoinTableInfo",
            TableInfo::UnresolvedCollectionJoin(_) => "UnresolvedCollectionJoinTableInfo",
            TableInfo::UnresolvedDummyRow(_) => "UnresolvedDummyRowTableInfo",
            TableInfo::UnresolvedGroupReference(_) => "UnresolvedGroupReferenceTableInfo",
            TableInfo::ResolvedSimple(_) => "ResolvedSimpleTableInfo",
            TableInfo::ResolvedSubStatement(_) => "ResolvedSubStatementTableInfo",
            TableInfo::ResolvedJoinedGrouping(_) => "ResolvedJoinedGroupingTableInfo",
        }
    }
}

impl From<ResolvedSimpleTableInfo> for TableInfo {
    fn from(value: ResolvedSimpleTableInfo) -> Self {
        TableInfo::ResolvedSimple(value)
    }
}

impl From<UnresolvedTableInfo> for TableInfo {
    fn from(value: UnresolvedTableInfo) -> Self {
        TableInfo::Unresolved(value)
    }
}

impl fmt::Display for TableInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableInfo::Unresolved(info) => write!(f, "TABLE({})", info.item_type),
            TableInfo::UnresolvedJoin(info) => write!(
                f,
                "JOIN([{}].{})",
                info.originating_entity.table_alias, info.member.name
            ),
            TableInfo::UnresolvedCollectionJoin(info) => {
                write!(f, "COLLECTION-JOIN({}.{})", info.source, info.member.name)
            }
            TableInfo::UnresolvedDummyRow(_) => f.write_str("DUMMY-ROW"),
            TableInfo::UnresolvedGroupReference(info) => {
                write!(f, "GROUP-REF([{}])", info.grouping_alias)
            }
            TableInfo::ResolvedSimple(info) => {
                write!(f, "[{}] AS [{}]", info.table_name, info.table_alias)
            }
            TableInfo::ResolvedSubStatement(info) => {
                write!(f, "({}) AS [{}]", info.statement, info.table_alias)
            }
            TableInfo::ResolvedJoinedGrouping(info) => {
                write!(f, "({}) AS [{}]", info.statement, info.table_alias)
            }
        }
    }
}
