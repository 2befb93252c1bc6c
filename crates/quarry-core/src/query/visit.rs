//! Dispatch over the clauses of a query model.
//!
//! Every clause kind has its own required method, so a visitor has to decide
//! what to do with each of them.

use super::{
    BodyClause, FromClause, GroupClause, JoinClause, LetClause, OrderByClause, QueryModel,
    ResultOperator, SelectClause, SelectOrGroupClause, WhereClause,
};
use crate::Result;

pub trait Visit {
    /// Visits the whole model: main from clause, body clauses in source
    /// order, the terminal clause, then the result operators.
    fn visit_query_model(&mut self, model: &QueryModel) -> Result<()> {
        visit_query_model(self, model)
    }

    fn visit_main_from_clause(&mut self, clause: &FromClause) -> Result<()>;

    fn visit_body_clause(&mut self, clause: &BodyClause) -> Result<()> {
        visit_body_clause(self, clause)
    }

    fn visit_additional_from_clause(&mut self, clause: &FromClause) -> Result<()>;

    fn visit_where_clause(&mut self, clause: &WhereClause) -> Result<()>;

    fn visit_order_by_clause(&mut self, clause: &OrderByClause) -> Result<()>;

    fn visit_join_clause(&mut self, clause: &JoinClause) -> Result<()>;

    fn visit_let_clause(&mut self, clause: &LetClause) -> Result<()>;

    fn visit_select_clause(&mut self, clause: &SelectClause) -> Result<()>;

    fn visit_group_clause(&mut self, clause: &GroupClause) -> Result<()>;

    fn visit_result_operator(&mut self, operator: &ResultOperator) -> Result<()>;
}

pub fn visit_query_model<V>(v: &mut V, model: &QueryModel) -> Result<()>
where
    V: Visit + ?Sized,
{
    v.visit_main_from_clause(&model.main_from)?;

    for clause in &model.body {
        v.visit_body_clause(clause)?;
    }

    match &model.select_or_group {
        SelectOrGroupClause::Select(clause) => v.visit_select_clause(clause)?,
        SelectOrGroupClause::Group(clause) => v.visit_group_clause(clause)?,
    }

    for operator in &model.result_operators {
        v.visit_result_operator(operator)?;
    }

    Ok(())
}

pub fn visit_body_clause<V>(v: &mut V, clause: &BodyClause) -> Result<()>
where
    V: Visit + ?Sized,
{
    match clause {
        BodyClause::Where(clause) => v.visit_where_clause(clause),
        BodyClause::OrderBy(clause) => v.visit_order_by_clause(clause),
        BodyClause::AdditionalFrom(clause) => v.visit_additional_from_clause(clause),
        BodyClause::Join(clause) => v.visit_join_clause(clause),
        BodyClause::Let(clause) => v.visit_let_clause(clause),
    }
}
