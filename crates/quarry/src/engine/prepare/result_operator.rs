use super::PrepareModel;

use quarry_core::{
    query::ResultOperator,
    stmt::{
        AggregationModifier, BinaryOp, DataInfo, Expr, JoinSemantics, SqlAppendedTable,
        SqlStatement, TableInfo, Type, UnresolvedDummyRowTableInfo,
    },
    Error, Result,
};

impl PrepareModel<'_, '_> {
    pub(super) fn result_operator(&mut self, operator: &ResultOperator) -> Result<()> {
        tracing::trace!(%operator, "preparing result operator");

        let item_type = self.stmt.data_info.item_type().clone();

        match operator {
            ResultOperator::Count => self.aggregate(AggregationModifier::Count),
            ResultOperator::LongCount => self.aggregate(AggregationModifier::LongCount),
            ResultOperator::Sum => self.aggregate(AggregationModifier::Sum),
            ResultOperator::Min => self.aggregate(AggregationModifier::Min),
            ResultOperator::Max => self.aggregate(AggregationModifier::Max),
            ResultOperator::Average => self.aggregate(AggregationModifier::Average),
            ResultOperator::Distinct => {
                if self.stmt.top.is_some() {
                    self.wrap();
                }
                self.stmt.is_distinct = true;
            }
            ResultOperator::Take(count) => {
                let count = self.prepare_expr(count)?;
                if self.stmt.top.is_some() {
                    self.wrap();
                }
                self.stmt.top = Some(count);
            }
            ResultOperator::First { or_default } => {
                if self.stmt.top.is_some() {
                    self.wrap();
                }
                self.stmt.top = Some(Expr::literal_int(1));
                self.stmt.data_info = DataInfo::First {
                    item_type,
                    or_default: *or_default,
                };
            }
            ResultOperator::Single { or_default } => {
                if self.stmt.top.is_some() {
                    self.wrap();
                }
                // A second row tells the executor the result is not single
                self.stmt.top = Some(Expr::literal_int(2));
                self.stmt.data_info = DataInfo::Single {
                    item_type,
                    or_default: *or_default,
                };
            }
            ResultOperator::Any => {
                let inner = self.take_for_predicate();
                self.select_predicate(Expr::exists(Expr::stmt(inner)));
            }
            ResultOperator::All(predicate) => {
                let predicate = self.prepare_expr(predicate)?;

                let mut inner = self.take_for_predicate();
                inner.where_condition = Some(Expr::and_optional(
                    inner.where_condition.take(),
                    Expr::not(predicate),
                ));
                self.select_predicate(Expr::not(Expr::exists(Expr::stmt(inner))));
            }
            ResultOperator::Contains(item) => {
                let item = self.prepare_expr(item)?;

                let inner = self.take_for_predicate();
                self.select_predicate(Expr::binary_op(item, BinaryOp::In, Expr::stmt(inner)));
            }
            ResultOperator::DefaultIfEmpty => self.default_if_empty(),
            ResultOperator::Skip(_) => {
                return Err(Error::not_supported(format!(
                    "The result operator '{operator}' is not supported."
                )))
            }
        }

        Ok(())
    }

    fn aggregate(&mut self, modifier: AggregationModifier) {
        if self.stmt.top.is_some() || self.stmt.is_distinct || self.stmt.group_by.is_some() {
            self.wrap();
        }

        self.stmt.orderings.clear();

        let item_type = self.stmt.data_info.item_type().clone();
        let projection = self.stmt.select_projection.take();
        let aggregation = Expr::aggregation(modifier, projection);

        // Counts and averages have a fixed result type
        let ty = match modifier {
            AggregationModifier::Sum | AggregationModifier::Min | AggregationModifier::Max => {
                item_type
            }
            _ => aggregation.ty(),
        };

        self.stmt.select_projection = aggregation;
        self.stmt.data_info = DataInfo::scalar(ty);
    }

    /// Moves the statement built so far into a sub-statement and selects its
    /// items. Orderings only survive where they decide which rows `TOP`
    /// keeps.
    fn wrap(&mut self) {
        let item_type = self.stmt.data_info.item_type().clone();
        let mut inner = std::mem::replace(
            &mut self.stmt,
            SqlStatement::new(DataInfo::sequence(item_type.clone()), Expr::null()),
        );

        if inner.top.is_none() {
            inner.orderings.clear();
        }

        let alias = self.engine.generator.sub_statement_alias();
        let table = self.add_table(TableInfo::resolved_sub_statement(alias, inner));

        self.stmt
            .from
            .push(SqlAppendedTable::new(table, JoinSemantics::Inner));
        self.stmt.select_projection = Expr::table_reference(table, item_type);
    }

    fn take_for_predicate(&mut self) -> SqlStatement {
        let mut inner = std::mem::replace(
            &mut self.stmt,
            SqlStatement::new(DataInfo::scalar(Type::Bool), Expr::null()),
        );

        if inner.top.is_none() {
            inner.orderings.clear();
        }
        inner
    }

    fn select_predicate(&mut self, predicate: Expr) {
        self.stmt.select_projection =
            Expr::case(predicate, Expr::literal_int(1), Expr::literal_int(0));
    }

    /// Left-joins the statement built so far to a single empty row, so that
    /// an empty result still yields one (null) item.
    fn default_if_empty(&mut self) {
        let item_type = self.stmt.data_info.item_type().clone();
        let inner = std::mem::replace(
            &mut self.stmt,
            SqlStatement::new(DataInfo::sequence(item_type.clone()), Expr::null()),
        );

        let dummy = self.add_table(TableInfo::UnresolvedDummyRow(UnresolvedDummyRowTableInfo));
        let alias = self.engine.generator.sub_statement_alias();
        let table = self.add_table(TableInfo::resolved_sub_statement(alias, inner));

        self.stmt
            .from
            .push(SqlAppendedTable::new(dummy, JoinSemantics::Inner));
        self.stmt
            .from
            .push(SqlAppendedTable::new(table, JoinSemantics::Left));
        self.stmt.select_projection = Expr::table_reference(table, item_type);
    }
}
