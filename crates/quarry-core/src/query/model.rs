use super::{BodyClause, FromClause, ResultOperator, SelectOrGroupClause};
use crate::stmt::Type;

use std::fmt;

/// One query: a main from clause, body clauses in source order, exactly one
/// terminal select or group clause, and the result operators applied to
/// the outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryModel {
    pub main_from: FromClause,
    pub body: Vec<BodyClause>,
    pub select_or_group: SelectOrGroupClause,
    pub result_operators: Vec<ResultOperator>,
}

impl QueryModel {
    pub fn new(main_from: FromClause, select_or_group: SelectOrGroupClause) -> QueryModel {
        QueryModel {
            main_from,
            body: vec![],
            select_or_group,
            result_operators: vec![],
        }
    }

    pub fn with_body_clause(mut self, clause: impl Into<BodyClause>) -> QueryModel {
        self.body.push(clause.into());
        self
    }

    pub fn with_result_operator(mut self, operator: ResultOperator) -> QueryModel {
        self.result_operators.push(operator);
        self
    }

    /// Type of the query's result.
    pub fn result_type(&self) -> Type {
        let item_type = self.select_or_group.item_type();
        let mut ty = Type::list(item_type.clone());

        for operator in &self.result_operators {
            ty = operator.result_type(ty.item_type());
        }

        ty
    }
}

impl fmt::Display for QueryModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.main_from)?;
        for clause in &self.body {
            write!(f, " {clause}")?;
        }
        write!(f, " {}", self.select_or_group)?;
        for operator in &self.result_operators {
            write!(f, " => {operator}")?;
        }
        Ok(())
    }
}
