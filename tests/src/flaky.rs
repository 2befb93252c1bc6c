use quarry::{
    stmt::{
        Expr, JoinInfo, Member, ResolvedSimpleTableInfo, SqlEntity, TableInfo,
        UnresolvedJoinInfo, UnresolvedTableInfo, Value,
    },
    MappingResolver, Result, UniqueIdentifierGenerator,
};

use std::sync::atomic::{AtomicUsize, Ordering};

/// Wraps a resolver and answers the first `unresolved` table lookups with
/// the unresolved table info itself.
#[derive(Debug)]
pub struct Flaky<R> {
    inner: R,
    unresolved: AtomicUsize,
}

impl<R: MappingResolver> Flaky<R> {
    pub fn new(inner: R, unresolved: usize) -> Flaky<R> {
        Flaky {
            inner,
            unresolved: AtomicUsize::new(unresolved),
        }
    }

    /// A resolver that never resolves a table.
    pub fn never(inner: R) -> Flaky<R> {
        Flaky::new(inner, usize::MAX)
    }

    fn take_unresolved(&self) -> bool {
        self.unresolved
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

impl<R: MappingResolver> MappingResolver for Flaky<R> {
    fn resolve_table_info(
        &self,
        table_info: &UnresolvedTableInfo,
        generator: &mut UniqueIdentifierGenerator,
    ) -> Result<TableInfo> {
        if self.take_unresolved() {
            tracing::debug!(item_type = %table_info.item_type, "answering unresolved");
            return Ok(TableInfo::Unresolved(table_info.clone()));
        }

        self.inner.resolve_table_info(table_info, generator)
    }

    fn resolve_join_info(
        &self,
        join_info: &UnresolvedJoinInfo,
        generator: &mut UniqueIdentifierGenerator,
    ) -> Result<JoinInfo> {
        self.inner.resolve_join_info(join_info, generator)
    }

    fn resolve_simple_table_info(
        &self,
        table_info: &ResolvedSimpleTableInfo,
        generator: &mut UniqueIdentifierGenerator,
    ) -> Result<SqlEntity> {
        self.inner.resolve_simple_table_info(table_info, generator)
    }

    fn resolve_member_expression(&self, entity: &SqlEntity, member: &Member) -> Result<Expr> {
        self.inner.resolve_member_expression(entity, member)
    }

    fn resolve_constant_expression(&self, value: &Value) -> Result<Expr> {
        self.inner.resolve_constant_expression(value)
    }
}
