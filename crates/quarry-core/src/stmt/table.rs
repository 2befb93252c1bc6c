use super::{JoinSemantics, Member, SqlJoin, TableInfo, Type};
use crate::{Error, Result};

use indexmap::IndexMap;
use std::{
    collections::HashMap,
    fmt,
    ops::{Index, IndexMut},
    sync::atomic::{AtomicUsize, Ordering},
};

/// Identifies a table of a statement.
///
/// Identifiers are unique across all statements of the process, so an
/// expression inside a nested statement may refer to a table of an
/// enclosing one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableId(usize);

impl TableId {
    fn next() -> TableId {
        static NEXT: AtomicUsize = AtomicUsize::new(0);
        TableId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Debug for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TableId({})", self.0)
    }
}

/// A data source plus the tables joined to it.
///
/// Joins keyed by a relation member are created at most once per member.
/// Joins for explicit query sources may repeat. [`SqlTable::joins`] yields
/// the member joins first, each group in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlTable {
    table_info: TableInfo,
    member_joins: IndexMap<Member, SqlJoin>,
    explicit_joins: Vec<SqlJoin>,
}

impl SqlTable {
    pub fn new(table_info: TableInfo) -> SqlTable {
        SqlTable {
            table_info,
            member_joins: IndexMap::new(),
            explicit_joins: vec![],
        }
    }

    pub fn table_info(&self) -> &TableInfo {
        &self.table_info
    }

    pub fn item_type(&self) -> Type {
        self.table_info.item_type()
    }

    fn check_item_type(&self, table_info: &TableInfo) -> Result<()> {
        let expected = self.item_type();
        let actual = table_info.item_type();
        if expected != actual {
            return Err(Error::invalid_state(format!(
                "Cannot replace a table info of item type '{expected}' with a {} of item type '{actual}'.",
                table_info.kind_name()
            )));
        }
        Ok(())
    }

    pub fn joins(&self) -> impl Iterator<Item = &SqlJoin> + '_ {
        self.member_joins.values().chain(self.explicit_joins.iter())
    }

    pub fn member_join(&self, member: &Member) -> Option<&SqlJoin> {
        self.member_joins.get(member)
    }

    pub(crate) fn parts_mut(&mut self) -> (&mut TableInfo, impl Iterator<Item = &mut SqlJoin>) {
        let joins = self
            .member_joins
            .values_mut()
            .chain(self.explicit_joins.iter_mut());
        (&mut self.table_info, joins)
    }

    pub fn add_join_for_explicit_query_source(&mut self, join: SqlJoin) {
        self.explicit_joins.push(join);
    }

    /// Replaces every join to a table in `substitutions` with the join given
    /// there, in both join collections.
    pub fn substitute_joins(&mut self, substitutions: &HashMap<TableId, SqlJoin>) {
        let joins = self
            .member_joins
            .values_mut()
            .chain(self.explicit_joins.iter_mut());

        for join in joins {
            if let Some(substitute) = substitutions.get(&join.table) {
                *join = substitute.clone();
            }
        }
    }
}

/// The tables of one statement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tables {
    tables: IndexMap<TableId, SqlTable>,
}

impl Tables {
    pub fn new() -> Tables {
        Tables::default()
    }

    pub fn push(&mut self, table: SqlTable) -> TableId {
        let id = TableId::next();
        self.tables.insert(id, table);
        id
    }

    pub fn get(&self, id: TableId) -> Option<&SqlTable> {
        self.tables.get(&id)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TableId, &SqlTable)> + '_ {
        self.tables.iter().map(|(id, table)| (*id, table))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (TableId, &mut SqlTable)> + '_ {
        self.tables.iter_mut().map(|(id, table)| (*id, table))
    }

    /// Replaces the table info of a table, keeping its joins.
    pub fn replace_table_info(&mut self, id: TableId, table_info: TableInfo) -> Result<()> {
        let Some(table) = self.tables.get_mut(&id) else {
            return Err(Error::invalid_state(format!("unknown table {id:?}")));
        };
        table.check_item_type(&table_info)?;
        table.table_info = table_info;
        Ok(())
    }

    /// Returns the join of `owner` for `member`. On first use, the table
    /// built by `joined_table` is added and joined with `semantics` and no
    /// condition.
    pub fn get_or_add_member_join(
        &mut self,
        owner: TableId,
        member: &Member,
        semantics: JoinSemantics,
        joined_table: impl FnOnce() -> SqlTable,
    ) -> &SqlJoin {
        if self[owner].member_join(member).is_none() {
            let joined = self.push(joined_table());
            self[owner]
                .member_joins
                .insert(member.clone(), SqlJoin::new(joined, semantics, None));
        }

        &self[owner].member_joins[member]
    }
}

impl Index<TableId> for Tables {
    type Output = SqlTable;

    #[track_caller]
    fn index(&self, index: TableId) -> &Self::Output {
        &self.tables[&index]
    }
}

impl IndexMut<TableId> for Tables {
    #[track_caller]
    fn index_mut(&mut self, index: TableId) -> &mut Self::Output {
        &mut self.tables[&index]
    }
}
