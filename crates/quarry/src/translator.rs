mod builder;
pub use builder::Builder;

use crate::{engine::Engine, transform::MethodCallTransformers};

use quarry_core::{
    mapping::{MappingResolver, UniqueIdentifierGenerator},
    query::QueryModel,
    stmt::SqlStatement,
    Result,
};
use quarry_sql::SqlCommand;

use std::sync::Arc;

/// Translates query models into SQL commands.
///
/// A translator holds no per-query state. Every call to
/// [`translate`](Translator::translate) works on its own statement tree with
/// its own alias generator, so one translator can serve many threads.
#[derive(Clone)]
pub struct Translator {
    resolver: Arc<dyn MappingResolver>,
    transformers: MethodCallTransformers,
    max_resolution_passes: usize,
    table_prefix: String,
    sub_statement_prefix: String,
}

impl Translator {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Translates `model` into command text, parameters and the result
    /// shape. Any failure aborts the translation.
    pub fn translate(&self, model: &QueryModel) -> Result<SqlCommand> {
        tracing::debug!(%model, "translating query");

        let stmt = self.lower(model)?;
        quarry_sql::generate(&stmt)
    }

    /// Runs preparation and mapping resolution, returning the statement the
    /// SQL generator would render.
    pub fn lower(&self, model: &QueryModel) -> Result<SqlStatement> {
        let generator = UniqueIdentifierGenerator::with_prefixes(
            self.table_prefix.as_str(),
            self.sub_statement_prefix.as_str(),
        );

        Engine::new(
            &*self.resolver,
            &self.transformers,
            self.max_resolution_passes,
            generator,
        )
        .lower(model)
    }

    pub fn resolver(&self) -> &dyn MappingResolver {
        &*self.resolver
    }

    pub fn method_call_transformers(&self) -> &MethodCallTransformers {
        &self.transformers
    }
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("transformers", &self.transformers)
            .field("max_resolution_passes", &self.max_resolution_passes)
            .field("table_prefix", &self.table_prefix)
            .field("sub_statement_prefix", &self.sub_statement_prefix)
            .finish_non_exhaustive()
    }
}
