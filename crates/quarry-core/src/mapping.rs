//! Boundary between the SQL-agnostic domain mapping and the translator.

use crate::{
    stmt::{
        Expr, JoinInfo, Member, ResolvedSimpleTableInfo, SqlEntity, TableInfo,
        UnresolvedJoinInfo, UnresolvedTableInfo, Value,
    },
    Result,
};

/// Resolves domain types and members to tables and columns.
///
/// Implementations may answer with another unresolved construct (for
/// example a join that needs a further lookup). The translator resolves
/// such answers again until it gets a resolved one.
pub trait MappingResolver: Send + Sync {
    /// Returns the table info for the items of a domain type. New aliases
    /// must come from `generator`.
    fn resolve_table_info(
        &self,
        table_info: &UnresolvedTableInfo,
        generator: &mut UniqueIdentifierGenerator,
    ) -> Result<TableInfo>;

    /// Returns the foreign table and key pair of a relation member.
    fn resolve_join_info(
        &self,
        join_info: &UnresolvedJoinInfo,
        generator: &mut UniqueIdentifierGenerator,
    ) -> Result<JoinInfo>;

    /// Returns the entity for a resolved table, listing all mapped columns
    /// with the primary key first.
    fn resolve_simple_table_info(
        &self,
        table_info: &ResolvedSimpleTableInfo,
        generator: &mut UniqueIdentifierGenerator,
    ) -> Result<SqlEntity>;

    /// Returns the expression for a member of an entity: a column for a
    /// mapped property, an entity-reference member for a relation.
    fn resolve_member_expression(&self, entity: &SqlEntity, member: &Member) -> Result<Expr>;

    /// Maps a constant before it is bound as a parameter. Domain objects are
    /// typically replaced by their key.
    fn resolve_constant_expression(&self, value: &Value) -> Result<Expr> {
        Ok(Expr::Constant(value.clone()))
    }
}

/// Hands out aliases that are unique within one translation.
///
/// A single counter backs all prefixes, so `t0` is followed by `q1`.
#[derive(Debug, Clone)]
pub struct UniqueIdentifierGenerator {
    table_prefix: String,
    sub_statement_prefix: String,
    next: usize,
}

impl UniqueIdentifierGenerator {
    pub const DEFAULT_TABLE_PREFIX: &'static str = "t";
    pub const DEFAULT_SUB_STATEMENT_PREFIX: &'static str = "q";

    pub fn new() -> UniqueIdentifierGenerator {
        UniqueIdentifierGenerator::with_prefixes(
            Self::DEFAULT_TABLE_PREFIX,
            Self::DEFAULT_SUB_STATEMENT_PREFIX,
        )
    }

    pub fn with_prefixes(
        table_prefix: impl Into<String>,
        sub_statement_prefix: impl Into<String>,
    ) -> UniqueIdentifierGenerator {
        UniqueIdentifierGenerator {
            table_prefix: table_prefix.into(),
            sub_statement_prefix: sub_statement_prefix.into(),
            next: 0,
        }
    }

    pub fn get_unique_identifier(&mut self, prefix: &str) -> String {
        let identifier = format!("{prefix}{}", self.next);
        self.next += 1;
        tracing::trace!(identifier, "allocated identifier");
        identifier
    }

    /// Alias for a table.
    pub fn table_alias(&mut self) -> String {
        let prefix = self.table_prefix.clone();
        self.get_unique_identifier(&prefix)
    }

    /// Alias for a sub-statement.
    pub fn sub_statement_alias(&mut self) -> String {
        let prefix = self.sub_statement_prefix.clone();
        self.get_unique_identifier(&prefix)
    }
}

impl Default for UniqueIdentifierGenerator {
    fn default() -> Self {
        UniqueIdentifierGenerator::new()
    }
}
