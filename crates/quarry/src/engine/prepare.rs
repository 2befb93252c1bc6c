mod result_operator;

use super::Engine;

use quarry_core::{
    query::{
        self, FromClause, GroupClause, JoinClause, LetClause, OrderByClause, QueryModel,
        ResultOperator, SelectClause, WhereClause,
    },
    stmt::{
        DataInfo, Expr, ExprMethodCall, JoinSemantics, Ordering, SqlAppendedTable, SqlJoin,
        SqlLiteral, SqlStatement, SqlTable, TableId, TableInfo, Type,
        UnresolvedCollectionJoinInfo, UnresolvedGroupReferenceTableInfo,
    },
    Error, Result,
};

/// Builds the unresolved statement for one query model.
///
/// Query sources become tables, clauses become statement parts and result
/// operators reshape the statement, wrapping it into a sub-statement where
/// SQL evaluation order requires it.
struct PrepareModel<'e, 'a> {
    engine: &'e mut Engine<'a>,
    stmt: SqlStatement,
}

impl Engine<'_> {
    pub(super) fn prepare(&mut self, model: &QueryModel) -> Result<SqlStatement> {
        let mut prepare = PrepareModel {
            engine: self,
            stmt: SqlStatement::new(DataInfo::sequence(Type::Null), Expr::null()),
        };

        query::Visit::visit_query_model(&mut prepare, model)?;
        Ok(prepare.stmt)
    }
}

impl query::Visit for PrepareModel<'_, '_> {
    fn visit_main_from_clause(&mut self, clause: &FromClause) -> Result<()> {
        let table = self.prepare_table(clause.id, &clause.item_type, &clause.source)?;
        self.stmt
            .from
            .push(SqlAppendedTable::new(table, JoinSemantics::Inner));
        Ok(())
    }

    fn visit_additional_from_clause(&mut self, clause: &FromClause) -> Result<()> {
        self.visit_main_from_clause(clause)
    }

    fn visit_where_clause(&mut self, clause: &WhereClause) -> Result<()> {
        let predicate = self.prepare_expr(&clause.predicate)?;
        self.stmt.where_condition = Some(Expr::and_optional(
            self.stmt.where_condition.take(),
            predicate,
        ));
        Ok(())
    }

    fn visit_order_by_clause(&mut self, clause: &OrderByClause) -> Result<()> {
        let mut orderings = clause
            .orderings
            .iter()
            .map(|ordering| {
                Ok(Ordering::new(
                    self.prepare_expr(&ordering.expr)?,
                    ordering.direction,
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        // A later order-by clause takes precedence over earlier ones
        orderings.append(&mut self.stmt.orderings);
        self.stmt.orderings = orderings;
        Ok(())
    }

    fn visit_join_clause(&mut self, clause: &JoinClause) -> Result<()> {
        let Some(owner) = self.stmt.from.first().map(|appended| appended.table) else {
            return Err(Error::invalid_query(format!(
                "join '{}' has no preceding from clause",
                clause.item_name
            )));
        };

        let table = self.prepare_table(clause.id, &clause.item_type, &clause.inner_source)?;
        let outer_key = self.prepare_expr(&clause.outer_key)?;
        let inner_key = self.prepare_expr(&clause.inner_key)?;

        self.stmt.tables[owner].add_join_for_explicit_query_source(SqlJoin::new(
            table,
            JoinSemantics::Inner,
            Some(Expr::eq(outer_key, inner_key)),
        ));
        Ok(())
    }

    fn visit_let_clause(&mut self, clause: &LetClause) -> Result<()> {
        let expr = self.prepare_expr(&clause.expr)?;
        self.engine.sources.insert(clause.id, expr);
        Ok(())
    }

    fn visit_select_clause(&mut self, clause: &SelectClause) -> Result<()> {
        let projection = self.prepare_expr(&clause.selector)?;
        self.stmt.data_info = DataInfo::sequence(projection.ty());
        self.stmt.select_projection = projection;
        Ok(())
    }

    fn visit_group_clause(&mut self, clause: &GroupClause) -> Result<()> {
        let key = self.prepare_expr(&clause.key)?;
        let element = self.prepare_expr(&clause.element)?;

        self.stmt.data_info = DataInfo::sequence(Type::grouping(key.ty(), element.ty()));
        self.stmt.group_by = Some(key.clone());
        self.stmt.select_projection = Expr::grouping_select(key, element);
        Ok(())
    }

    fn visit_result_operator(&mut self, operator: &ResultOperator) -> Result<()> {
        self.result_operator(operator)
    }
}

impl PrepareModel<'_, '_> {
    /// Adds a table for a query source and binds the source to its items.
    fn prepare_table(
        &mut self,
        id: query::QuerySourceId,
        item_type: &Type,
        source: &query::Expr,
    ) -> Result<TableId> {
        let table_info = self.table_info_for_source(item_type, source)?;
        let table = self.add_table(table_info);

        self.engine
            .sources
            .insert(id, Expr::table_reference(table, item_type.clone()));
        Ok(table)
    }

    fn add_table(&mut self, table_info: TableInfo) -> TableId {
        let grouping = match &table_info {
            TableInfo::ResolvedSubStatement(info)
                if matches!(info.statement.data_info.item_type(), Type::Grouping { .. }) =>
            {
                Some(info.clone())
            }
            _ => None,
        };

        let table = self.stmt.tables.push(SqlTable::new(table_info));

        if let Some(grouping) = grouping {
            self.engine.groupings.insert(table, grouping);
        }

        table
    }

    fn table_info_for_source(&mut self, item_type: &Type, source: &query::Expr) -> Result<TableInfo> {
        match source {
            query::Expr::Table(_) => Ok(TableInfo::unresolved(item_type.clone())),
            query::Expr::Member(e) if matches!(e.ty, Type::List(_)) => {
                let owner = self.prepare_expr(&e.expr)?;
                Ok(TableInfo::UnresolvedCollectionJoin(
                    UnresolvedCollectionJoinInfo {
                        source: owner,
                        member: e.member.clone(),
                        item_type: item_type.clone(),
                    },
                ))
            }
            query::Expr::SubQuery(model) => {
                let stmt = self.engine.prepare(model)?;

                // `from c in (from c in Cook select c)` selects from the table
                // directly
                if stmt.is_simple_table_selection() {
                    let table = &stmt.tables[stmt.from[0].table];
                    if table.joins().next().is_none() {
                        return Ok(table.table_info().clone());
                    }
                }

                let alias = self.engine.generator.sub_statement_alias();
                Ok(TableInfo::resolved_sub_statement(alias, stmt))
            }
            query::Expr::QuerySource(source) => match self.engine.source(source)? {
                Expr::TableReference(reference)
                    if matches!(reference.item_type, Type::Grouping { .. }) =>
                {
                    let Some(grouping) = self.engine.groupings.get(&reference.table) else {
                        return Err(Error::invalid_state(format!(
                            "no grouping statement for query source '{}'",
                            source.name
                        )));
                    };

                    Ok(TableInfo::UnresolvedGroupReference(
                        UnresolvedGroupReferenceTableInfo {
                            grouping_alias: grouping.table_alias.clone(),
                            grouping_statement: grouping.statement.clone(),
                            item_type: item_type.clone(),
                        },
                    ))
                }
                other => Err(Error::not_supported(format!(
                    "Query source '{}' of kind '{}' cannot be used in a from clause.",
                    source.name,
                    other.kind_name()
                ))),
            },
            other => Err(Error::not_supported(format!(
                "Query sources of kind '{}' are not supported.",
                other.kind_name()
            ))),
        }
    }

    fn prepare_expr(&mut self, expr: &query::Expr) -> Result<Expr> {
        match expr {
            query::Expr::Constant(value) => Ok(Expr::Constant(value.clone())),
            query::Expr::Table(name) => {
                let item_type = Type::Entity(name.clone());
                Ok(Expr::stmt(single_table_stmt(
                    TableInfo::unresolved(item_type.clone()),
                    item_type,
                )))
            }
            query::Expr::QuerySource(source) => self.engine.source(source).cloned(),
            query::Expr::Member(e) => {
                let owner = self.prepare_expr(&e.expr)?;

                match &e.ty {
                    Type::List(item_type) => {
                        let table_info =
                            TableInfo::UnresolvedCollectionJoin(UnresolvedCollectionJoinInfo {
                                source: owner,
                                member: e.member.clone(),
                                item_type: (**item_type).clone(),
                            });
                        Ok(Expr::stmt(single_table_stmt(
                            table_info,
                            (**item_type).clone(),
                        )))
                    }
                    _ => Ok(Expr::member(owner, e.member.clone(), e.ty.clone())),
                }
            }
            query::Expr::Binary(e) => {
                let lhs = self.prepare_expr(&e.lhs)?;
                let rhs = self.prepare_expr(&e.rhs)?;
                Ok(Expr::binary_op(lhs, e.op, rhs))
            }
            query::Expr::Unary(e) => {
                let operand = self.prepare_expr(&e.operand)?;
                Ok(Expr::unary_op(e.op, operand.ty(), operand))
            }
            query::Expr::MethodCall(e) => {
                let instance = match &e.instance {
                    Some(instance) => Some(Box::new(self.prepare_expr(instance)?)),
                    None => None,
                };
                let args = e
                    .args
                    .iter()
                    .map(|arg| self.prepare_expr(arg))
                    .collect::<Result<Vec<_>>>()?;

                self.engine.transformers.transform(ExprMethodCall {
                    method: e.method.clone(),
                    instance,
                    args,
                    ty: e.ty.clone(),
                })
            }
            query::Expr::SubQuery(model) => {
                let stmt = self.engine.prepare(model)?;
                Ok(self.sub_query(stmt))
            }
            query::Expr::Conditional(e) => {
                let test = self.prepare_expr(&e.test)?;
                let then = self.prepare_expr(&e.then)?;
                let otherwise = self.prepare_expr(&e.otherwise)?;
                Ok(Expr::case(test, then, otherwise))
            }
            query::Expr::Convert(e) => {
                let operand = self.prepare_expr(&e.operand)?;
                Ok(Expr::convert(e.ty.clone(), operand))
            }
            query::Expr::New(e) => {
                let members = e
                    .members
                    .iter()
                    .map(|(name, expr)| Ok((name.clone(), self.prepare_expr(expr)?)))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Expr::new_record(members))
            }
        }
    }

    /// A sub-query used as an expression.
    ///
    /// A single entity or record picked by `First` or `Single` has more than
    /// one column, so it cannot be a scalar sub-query. Its statement is
    /// applied to the `FROM` list instead and the expression refers to the
    /// applied table's item.
    fn sub_query(&mut self, mut stmt: SqlStatement) -> Expr {
        let applied = match &stmt.data_info {
            DataInfo::First {
                item_type,
                or_default,
            }
            | DataInfo::Single {
                item_type,
                or_default,
            } if matches!(item_type, Type::Entity(_) | Type::Record) => {
                Some((item_type.clone(), *or_default))
            }
            _ => None,
        };
        let Some((item_type, or_default)) = applied else {
            return inline_sub_query(stmt);
        };

        // `TOP` stays on the statement and limits the applied rows
        stmt.data_info = DataInfo::sequence(item_type.clone());

        let alias = self.engine.generator.sub_statement_alias();
        let table = self.add_table(TableInfo::resolved_sub_statement(alias, stmt));
        let semantics = if or_default {
            JoinSemantics::Left
        } else {
            JoinSemantics::Inner
        };
        self.stmt.from.push(SqlAppendedTable::new(table, semantics));

        Expr::table_reference(table, item_type)
    }
}

/// `SELECT <items> FROM <table_info>`
fn single_table_stmt(table_info: TableInfo, item_type: Type) -> SqlStatement {
    let mut stmt = SqlStatement::new(DataInfo::sequence(item_type.clone()), Expr::null());
    let table = stmt.tables.push(SqlTable::new(table_info));
    stmt.from
        .push(SqlAppendedTable::new(table, JoinSemantics::Inner));
    stmt.select_projection = Expr::table_reference(table, item_type);
    stmt
}

/// Sub-queries ending in `Any`, `All` or `Contains` are inlined as their
/// predicate; others stay nested statements.
fn inline_sub_query(mut stmt: SqlStatement) -> Expr {
    if stmt.from.is_empty() {
        if let Expr::Case(case) = &mut stmt.select_projection {
            let is_bit = matches!(
                (&*case.then, &*case.otherwise),
                (
                    Expr::Literal(SqlLiteral::Int(1)),
                    Expr::Literal(SqlLiteral::Int(0))
                )
            );
            if is_bit {
                return case.test.take();
            }
        }
    }

    Expr::stmt(stmt)
}
