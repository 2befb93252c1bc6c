use super::super::Engine;

use quarry_core::{
    stmt::{
        BinaryOp, Expr, ExprBinaryOp, ExprEntityRefMember, ExprMember, JoinSemantics, Member,
        SqlEntity, SqlJoin, SqlStatement, SqlTable, TableId, TableInfo, UnresolvedJoinInfo,
    },
    Error, Result,
};

use std::collections::HashMap;

impl Engine<'_> {
    /// Resolves an expression of `stmt`. Joins needed by relation members
    /// are added to `stmt`.
    pub(super) fn resolve_expr(&mut self, stmt: &mut SqlStatement, expr: Expr) -> Result<Expr> {
        match expr {
            Expr::TableReference(reference) => self.resolve_table_reference(reference.table),
            Expr::Member(member) => self.resolve_member(stmt, member),
            Expr::EntityRefMember(member) => self.resolve_entity_ref_member(stmt, member),
            Expr::BinaryOp(e) => self.resolve_binary_op(stmt, e),
            Expr::Constant(value) => self.resolver.resolve_constant_expression(&value),
            Expr::MethodCall(call) => Err(Error::not_supported(format!(
                "The method '{}' cannot be resolved; method calls must be transformed before mapping resolution.",
                call.method
            ))),
            Expr::Stmt(mut e) => {
                self.resolve_stmt(&mut e.stmt)?;
                Ok(Expr::Stmt(e))
            }
            mut expr => {
                self.resolve_children(stmt, &mut expr)?;
                Ok(expr)
            }
        }
    }

    fn resolve_in_place(&mut self, stmt: &mut SqlStatement, expr: &mut Expr) -> Result<()> {
        *expr = self.resolve_expr(stmt, expr.take())?;
        Ok(())
    }

    fn resolve_children(&mut self, stmt: &mut SqlStatement, expr: &mut Expr) -> Result<()> {
        match expr {
            Expr::Aggregation(e) => self.resolve_in_place(stmt, &mut e.expr),
            Expr::Case(e) => {
                self.resolve_in_place(stmt, &mut e.test)?;
                self.resolve_in_place(stmt, &mut e.then)?;
                self.resolve_in_place(stmt, &mut e.otherwise)
            }
            Expr::Convert(e) => self.resolve_in_place(stmt, &mut e.source),
            Expr::Exists(e) => self.resolve_in_place(stmt, &mut e.subquery),
            Expr::Func(e) => e
                .args
                .iter_mut()
                .try_for_each(|arg| self.resolve_in_place(stmt, arg)),
            Expr::GroupingSelect(e) => {
                self.resolve_in_place(stmt, &mut e.key)?;
                self.resolve_in_place(stmt, &mut e.element)
            }
            Expr::IsNull(e) => self.resolve_in_place(stmt, &mut e.expr),
            Expr::Named(e) => self.resolve_in_place(stmt, &mut e.expr),
            Expr::New(e) => e
                .members
                .iter_mut()
                .try_for_each(|member| self.resolve_in_place(stmt, &mut member.expr)),
            Expr::UnaryOp(e) => self.resolve_in_place(stmt, &mut e.operand),
            Expr::BinaryOp(_)
            | Expr::Column(_)
            | Expr::Constant(_)
            | Expr::Entity(_)
            | Expr::EntityRefMember(_)
            | Expr::Literal(_)
            | Expr::Member(_)
            | Expr::MethodCall(_)
            | Expr::Stmt(_)
            | Expr::TableReference(_) => Ok(()),
        }
    }

    fn resolve_table_reference(&self, table: TableId) -> Result<Expr> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(&table))
            .cloned()
            .ok_or_else(|| {
                Error::invalid_state(format!(
                    "{table:?} is referenced outside of the statement it belongs to"
                ))
            })
    }

    fn resolve_member(&mut self, stmt: &mut SqlStatement, e: ExprMember) -> Result<Expr> {
        let owner = self.resolve_expr(stmt, *e.expr)?;

        match owner {
            Expr::Entity(entity) => self.resolve_entity_member(stmt, entity, e.member),
            Expr::New(record) => record
                .members
                .into_iter()
                .find(|member| member.name.as_deref() == Some(&*e.member.name))
                .map(|member| *member.expr)
                .ok_or_else(|| {
                    Error::not_supported(format!(
                        "The record has no member '{}'.",
                        e.member.name
                    ))
                }),
            Expr::GroupingSelect(grouping) if &*e.member.name == "Key" => Ok(*grouping.key),
            other => Err(Error::not_supported(format!(
                "The member '{}' cannot be translated to SQL for an expression of kind '{}'.",
                e.member,
                other.kind_name()
            ))),
        }
    }

    /// Asks the mapping resolver for a member of an entity. The resolver may
    /// answer with a member of another entity, which is looked up in turn.
    fn resolve_entity_member(
        &mut self,
        stmt: &mut SqlStatement,
        entity: SqlEntity,
        member: Member,
    ) -> Result<Expr> {
        let description = format!("member {member}");
        let mut entity = entity;
        let mut member = member;

        for pass in 1..=self.max_resolution_passes {
            if pass > 1 {
                tracing::warn!(%description, passes = pass, "resolving member takes another pass");
            }

            tracing::trace!(%member, table_alias = %entity.table_alias, "resolving member");
            match self.resolver.resolve_member_expression(&entity, &member)? {
                Expr::Member(next) => match *next.expr {
                    Expr::Entity(next_entity) => {
                        entity = next_entity;
                        member = next.member;
                    }
                    owner => {
                        let next = Expr::member(owner, next.member, next.ty);
                        return self.resolve_expr(stmt, next);
                    }
                },
                resolved => return self.resolve_expr(stmt, resolved),
            }
        }

        Err(super::not_converged(&description, self.max_resolution_passes))
    }

    /// Joins the table of a relation member to the table of its entity and
    /// returns the joined item. The join is created once per owner and
    /// member.
    fn resolve_entity_ref_member(
        &mut self,
        stmt: &mut SqlStatement,
        e: ExprEntityRefMember,
    ) -> Result<Expr> {
        let alias = e.originating_entity.table_alias.as_str();
        let owner = stmt
            .tables
            .iter()
            .find(|(_, table)| table.table_info().table_alias() == Some(alias))
            .map(|(id, _)| id)
            .or_else(|| stmt.from.first().map(|appended| appended.table));

        let Some(owner) = owner else {
            return Err(Error::invalid_state(format!(
                "no table to join the member '{}' to",
                e.member
            )));
        };

        let join = stmt
            .tables
            .get_or_add_member_join(owner, &e.member, JoinSemantics::Left, || {
                SqlTable::new(TableInfo::UnresolvedJoin(UnresolvedJoinInfo {
                    originating_entity: e.originating_entity.clone(),
                    member: e.member.clone(),
                    cardinality: e.cardinality,
                    item_type: e.item_type.clone(),
                }))
            })
            .table;

        if let Some(item) = self.scope()?.get(&join) {
            return Ok(item.clone());
        }

        let TableInfo::UnresolvedJoin(join_info) = stmt.tables[join].table_info().clone() else {
            return Err(Error::invalid_state(format!(
                "the join for member '{}' was resolved without an item",
                e.member
            )));
        };

        let resolved = self.resolve_join(join_info)?;
        let condition = resolved.join_condition();
        let foreign_table_info = self.resolve_table_info(stmt, *resolved.foreign_table_info)?;
        stmt.tables.replace_table_info(join, foreign_table_info)?;
        stmt.tables[owner].substitute_joins(&HashMap::from([(
            join,
            SqlJoin::new(join, JoinSemantics::Left, Some(condition)),
        )]));

        let item = self.table_item(stmt.tables[join].table_info())?;
        self.scope()?.insert(join, item.clone());
        Ok(item)
    }

    fn resolve_binary_op(&mut self, stmt: &mut SqlStatement, e: ExprBinaryOp) -> Result<Expr> {
        let op = e.op;
        let mut lhs = self.resolve_expr(stmt, *e.lhs)?;
        let mut rhs = self.resolve_expr(stmt, *e.rhs)?;

        // `x == null` must become `x IS NULL` in SQL
        if matches!(op, BinaryOp::Eq | BinaryOp::Ne)
            && (lhs.is_constant_null() || rhs.is_constant_null())
        {
            let operand = identity(if rhs.is_constant_null() { lhs } else { rhs })?;
            return Ok(match op {
                BinaryOp::Eq => Expr::is_null(operand),
                _ => Expr::is_not_null(operand),
            });
        }

        if op == BinaryOp::In {
            if let Expr::Stmt(sub) = &mut rhs {
                if sub.stmt.select_projection.is_entity() {
                    let projection = identity(sub.stmt.select_projection.take())?;
                    sub.stmt.select_projection = Expr::named(None, projection);
                }
            }
        }

        // Entities are compared by their primary key
        if op.is_comparison() {
            lhs = identity(lhs)?;
            rhs = identity(rhs)?;
        }

        Ok(Expr::binary_op(lhs, op, rhs))
    }
}

/// The primary key column of an entity; any other expression as is.
fn identity(expr: Expr) -> Result<Expr> {
    match expr {
        Expr::Entity(entity) => match entity.primary_key_column() {
            Some(column) => Ok(Expr::Column(column.clone())),
            None => Err(Error::not_supported(format!(
                "The entity '{entity}' has no primary key and cannot be compared."
            ))),
        },
        other => Ok(other),
    }
}
