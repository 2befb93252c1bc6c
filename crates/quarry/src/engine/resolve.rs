mod expr;

use super::Engine;

use quarry_core::{
    stmt::{
        Cardinality, DataInfo, Expr, ExprNamed, ExprNew, JoinInfo, Ordering,
        ResolvedJoinInfo, ResolvedJoinedGroupingTableInfo, SqlColumn, SqlJoin, SqlStatement,
        TableId, TableInfo, Type, UnresolvedCollectionJoinInfo, UnresolvedGroupReferenceTableInfo,
        UnresolvedJoinInfo,
    },
    Error, Result,
};

use std::collections::HashMap;

/// Alias and projection of the single empty row used by `DefaultIfEmpty`.
const EMPTY: &str = "Empty";

impl Engine<'_> {
    /// Replaces every unresolved table and expression of `stmt`, including
    /// nested statements, with its mapped counterpart.
    pub(super) fn resolve_stmt(&mut self, stmt: &mut SqlStatement) -> Result<()> {
        self.scopes.push(HashMap::new());
        let ret = self.resolve_stmt_in_scope(stmt);
        self.scopes.pop();
        ret
    }

    fn resolve_stmt_in_scope(&mut self, stmt: &mut SqlStatement) -> Result<()> {
        self.resolve_tables(stmt)?;
        self.resolve_join_conditions(stmt)?;

        let projection = stmt.select_projection.take();
        stmt.select_projection = named_projection(self.resolve_expr(stmt, projection)?);

        if let Some(condition) = stmt.where_condition.take() {
            stmt.where_condition = Some(self.resolve_expr(stmt, condition)?);
        }

        if let Some(key) = stmt.group_by.take() {
            stmt.group_by = Some(self.resolve_expr(stmt, key)?);
        }

        let orderings = std::mem::take(&mut stmt.orderings);
        let mut resolved = Vec::with_capacity(orderings.len());
        for ordering in orderings {
            let expr = self.resolve_expr(stmt, ordering.expr)?;

            // Ordering by an entity orders by all of its columns
            if let Expr::Entity(entity) = &expr {
                resolved.extend(
                    entity
                        .columns()
                        .iter()
                        .map(|column| Ordering::new(column.clone(), ordering.direction)),
                );
                continue;
            }

            resolved.push(Ordering::new(expr, ordering.direction));
        }
        stmt.orderings = resolved;

        if let Some(top) = stmt.top.take() {
            stmt.top = Some(self.resolve_expr(stmt, top)?);
        }

        Ok(())
    }

    fn resolve_tables(&mut self, stmt: &mut SqlStatement) -> Result<()> {
        let tables: Vec<TableId> = stmt.tables.iter().map(|(id, _)| id).collect();

        for table in tables {
            let table_info = stmt.tables[table].table_info().clone();
            let resolved = self.resolve_table_info(stmt, table_info)?;
            stmt.tables.replace_table_info(table, resolved)?;

            let item = self.table_item(stmt.tables[table].table_info())?;
            self.scope()?.insert(table, item);
        }

        Ok(())
    }

    /// Resolves the conditions of joins created for join clauses. Joins
    /// created for relation members are resolved with their condition.
    fn resolve_join_conditions(&mut self, stmt: &mut SqlStatement) -> Result<()> {
        let joins: Vec<(TableId, Vec<SqlJoin>)> = stmt
            .tables
            .iter()
            .map(|(owner, table)| {
                let joins = table
                    .joins()
                    .filter(|join| join.condition.is_some())
                    .cloned()
                    .collect();
                (owner, joins)
            })
            .collect();

        for (owner, joins) in joins {
            for mut join in joins {
                if let Some(condition) = join.condition.take() {
                    join.condition = Some(self.resolve_expr(stmt, condition)?);
                }
                stmt.tables[owner].substitute_joins(&HashMap::from([(join.table, join)]));
            }
        }

        Ok(())
    }

    fn resolve_table_info(
        &mut self,
        stmt: &mut SqlStatement,
        table_info: TableInfo,
    ) -> Result<TableInfo> {
        match table_info {
            TableInfo::ResolvedSimple(_) | TableInfo::ResolvedJoinedGrouping(_) => Ok(table_info),
            TableInfo::ResolvedSubStatement(mut info) => {
                self.resolve_stmt(&mut info.statement)?;
                Ok(TableInfo::ResolvedSubStatement(info))
            }
            TableInfo::UnresolvedDummyRow(_) => Ok(TableInfo::resolved_sub_statement(
                EMPTY,
                SqlStatement::new(
                    DataInfo::sequence(Type::Null),
                    Expr::named(Some(EMPTY), Expr::null()),
                ),
            )),
            TableInfo::UnresolvedGroupReference(info) => self.resolve_group_reference(info),
            TableInfo::Unresolved(_)
            | TableInfo::UnresolvedJoin(_)
            | TableInfo::UnresolvedCollectionJoin(_) => self.resolve_by_mapping(stmt, table_info),
        }
    }

    /// Asks the mapping resolver about `table_info` until it answers with
    /// something the engine can resolve on its own.
    fn resolve_by_mapping(
        &mut self,
        stmt: &mut SqlStatement,
        table_info: TableInfo,
    ) -> Result<TableInfo> {
        let description = table_info.to_string();
        let mut table_info = table_info;
        let mut passes = 0;

        loop {
            let is_mapped = matches!(
                table_info,
                TableInfo::Unresolved(_)
                    | TableInfo::UnresolvedJoin(_)
                    | TableInfo::UnresolvedCollectionJoin(_)
            );
            if !is_mapped {
                return self.resolve_table_info(stmt, table_info);
            }

            if passes == self.max_resolution_passes {
                return Err(not_converged(&description, passes));
            }
            passes += 1;
            if passes > 1 {
                tracing::warn!(table_info = %description, passes, "resolving table info takes another pass");
            }

            table_info = match table_info {
                TableInfo::Unresolved(info) => {
                    tracing::trace!(%description, "resolving table info");
                    self.resolver
                        .resolve_table_info(&info, &mut self.generator)?
                }
                TableInfo::UnresolvedJoin(info) => *self.resolve_join(info)?.foreign_table_info,
                TableInfo::UnresolvedCollectionJoin(info) => self.resolve_collection_join(stmt, info)?,
                other => other,
            };
        }
    }

    fn resolve_join(&mut self, join_info: UnresolvedJoinInfo) -> Result<ResolvedJoinInfo> {
        let description = TableInfo::UnresolvedJoin(join_info.clone()).to_string();
        let mut join_info = JoinInfo::Unresolved(join_info);
        let mut passes = 0;

        loop {
            let unresolved = match join_info {
                JoinInfo::Resolved(resolved) => return Ok(resolved),
                JoinInfo::Unresolved(unresolved) => unresolved,
            };

            if passes == self.max_resolution_passes {
                return Err(not_converged(&description, passes));
            }
            passes += 1;
            if passes > 1 {
                tracing::warn!(join = %description, passes, "resolving join takes another pass");
            }

            tracing::trace!(join = %description, "resolving join");
            join_info = self
                .resolver
                .resolve_join_info(&unresolved, &mut self.generator)?;
        }
    }

    /// `from c in k.Cooks`: the joined table plus the join condition in the
    /// `WHERE` clause.
    fn resolve_collection_join(
        &mut self,
        stmt: &mut SqlStatement,
        info: UnresolvedCollectionJoinInfo,
    ) -> Result<TableInfo> {
        let source = self.resolve_expr(stmt, info.source)?;
        let Expr::Entity(originating_entity) = source else {
            return Err(Error::not_supported(format!(
                "The collection '{}' can only be queried on a mapped entity, not on '{source}'.",
                info.member
            )));
        };

        let join = self.resolve_join(UnresolvedJoinInfo {
            originating_entity,
            member: info.member,
            cardinality: Cardinality::Many,
            item_type: info.item_type,
        })?;

        stmt.where_condition = Some(Expr::and_optional(
            stmt.where_condition.take(),
            join.join_condition(),
        ));

        Ok(*join.foreign_table_info)
    }

    /// Selects the elements of one group of a grouping statement by
    /// correlating a copy of it with the group's key.
    fn resolve_group_reference(
        &mut self,
        info: UnresolvedGroupReferenceTableInfo,
    ) -> Result<TableInfo> {
        let mut stmt = *info.grouping_statement;

        let Expr::GroupingSelect(grouping) = stmt.select_projection.take() else {
            return Err(Error::invalid_state(format!(
                "the statement grouped as [{}] does not select groups",
                info.grouping_alias
            )));
        };

        let key = *grouping.key;
        if key.ty().is_entity() {
            return Err(Error::not_supported(format!(
                "Grouping by the entity '{}' is not supported; group by one of its members instead.",
                key.ty()
            )));
        }

        stmt.select_projection = *grouping.element;
        stmt.group_by = None;
        if stmt.top.is_none() {
            stmt.orderings.clear();
        }
        stmt.data_info = DataInfo::sequence(stmt.select_projection.ty());

        let grouping_key = Expr::Column(SqlColumn::definition(
            key.ty(),
            info.grouping_alias.clone(),
            "key",
            false,
        ));
        stmt.where_condition = Some(Expr::and_optional(
            stmt.where_condition.take(),
            Expr::eq(key, grouping_key.clone()),
        ));

        self.resolve_stmt(&mut stmt)?;

        Ok(TableInfo::ResolvedJoinedGrouping(
            ResolvedJoinedGroupingTableInfo {
                table_alias: self.generator.sub_statement_alias(),
                statement: Box::new(stmt),
                grouping_key,
                grouping_alias: info.grouping_alias,
            },
        ))
    }

    /// The expression standing for the items of a resolved table.
    fn table_item(&mut self, table_info: &TableInfo) -> Result<Expr> {
        match table_info {
            TableInfo::ResolvedSimple(info) => {
                tracing::trace!(table_info = %table_info, "resolving entity");
                let entity = self
                    .resolver
                    .resolve_simple_table_info(info, &mut self.generator)?;
                Ok(Expr::Entity(entity))
            }
            TableInfo::ResolvedSubStatement(info) => {
                reference_projection(&info.statement.select_projection, &info.table_alias)
            }
            TableInfo::ResolvedJoinedGrouping(info) => {
                reference_projection(&info.statement.select_projection, &info.table_alias)
            }
            other => Err(Error::invalid_state(format!(
                "{} is not valid at this point.",
                other.kind_name()
            ))),
        }
    }

    fn scope(&mut self) -> Result<&mut HashMap<TableId, Expr>> {
        self.scopes
            .last_mut()
            .ok_or_else(|| Error::invalid_state("no statement is being resolved"))
    }
}

fn not_converged(description: &str, passes: usize) -> Error {
    Error::invalid_state(format!(
        "resolution of {description} did not converge after {passes} passes"
    ))
}

/// Gives a projection an output name unless it selects whole entities,
/// records or groupings, whose parts carry their own names.
fn named_projection(projection: Expr) -> Expr {
    match projection {
        Expr::Entity(_) | Expr::New(_) | Expr::Named(_) | Expr::GroupingSelect(_) => projection,
        other => Expr::named(None, other),
    }
}

/// The item of a sub-statement aliased `alias` as seen from outside.
fn reference_projection(projection: &Expr, alias: &str) -> Result<Expr> {
    match projection {
        Expr::Entity(entity) => Ok(Expr::Entity(
            entity.create_reference(alias, entity.item_type.clone()),
        )),
        Expr::Named(named) => match &*named.expr {
            Expr::Entity(entity) => {
                let entity = entity.update(
                    entity.item_type.clone(),
                    &entity.table_alias,
                    named.name.clone(),
                );
                Ok(Expr::Entity(
                    entity.create_reference(alias, entity.item_type.clone()),
                ))
            }
            expr => Ok(Expr::Column(SqlColumn::definition(
                expr.ty(),
                alias,
                named.output_name(),
                false,
            ))),
        },
        Expr::New(record) => {
            let members = record
                .members
                .iter()
                .map(|member| {
                    Ok(ExprNamed {
                        name: member.name.clone(),
                        expr: Box::new(reference_projection(
                            &Expr::Named(member.clone()),
                            alias,
                        )?),
                    })
                })
                .collect::<Result<_>>()?;
            Ok(Expr::New(ExprNew { members }))
        }
        Expr::GroupingSelect(grouping) => Ok(Expr::grouping_select(
            SqlColumn::definition(grouping.key.ty(), alias, "key", false),
            (*grouping.element).clone(),
        )),
        other => Err(Error::invalid_state(format!(
            "the projection '{other}' of [{alias}] cannot be referenced"
        ))),
    }
}
