mod context;
mod prepare;
mod resolve;
mod verify;

use crate::transform::MethodCallTransformers;

use quarry_core::{
    mapping::{MappingResolver, UniqueIdentifierGenerator},
    query::{QueryModel, QuerySourceId, QuerySourceRef},
    stmt::{Expr, ResolvedSubStatementTableInfo, SqlStatement, TableId},
    Error, Result,
};

use std::collections::HashMap;

/// State of one translation.
///
/// The engine is created per query and dropped once the statement is
/// lowered, so nothing leaks between translations.
pub(crate) struct Engine<'a> {
    resolver: &'a dyn MappingResolver,
    transformers: &'a MethodCallTransformers,
    max_resolution_passes: usize,
    generator: UniqueIdentifierGenerator,

    /// Prepared expression standing for the current item of each query
    /// source seen so far
    sources: HashMap<QuerySourceId, Expr>,

    /// Grouping sub-statements, by the table yielding their groups
    groupings: HashMap<TableId, ResolvedSubStatementTableInfo>,

    /// Items of the tables of the statements being resolved, innermost last
    scopes: Vec<HashMap<TableId, Expr>>,
}

impl<'a> Engine<'a> {
    pub(crate) fn new(
        resolver: &'a dyn MappingResolver,
        transformers: &'a MethodCallTransformers,
        max_resolution_passes: usize,
        generator: UniqueIdentifierGenerator,
    ) -> Engine<'a> {
        Engine {
            resolver,
            transformers,
            max_resolution_passes,
            generator,
            sources: HashMap::new(),
            groupings: HashMap::new(),
            scopes: vec![],
        }
    }

    /// Turns the query model into a fully resolved statement.
    pub(crate) fn lower(mut self, model: &QueryModel) -> Result<SqlStatement> {
        let mut stmt = self.prepare(model)?;
        tracing::debug!(%stmt, "prepared statement");

        self.resolve_stmt(&mut stmt)?;
        tracing::debug!(%stmt, "resolved statement");

        self.normalize_context(&mut stmt);
        self.verify(&stmt)?;

        Ok(stmt)
    }

    fn source(&self, source: &QuerySourceRef) -> Result<&Expr> {
        self.sources.get(&source.id).ok_or_else(|| {
            Error::invalid_query(format!(
                "unknown query source {} '{}'",
                source.id, source.name
            ))
        })
    }
}
