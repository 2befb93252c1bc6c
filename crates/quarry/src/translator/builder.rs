use super::Translator;
use crate::transform::{MethodCallTransformer, MethodCallTransformers};

use quarry_core::{
    err,
    mapping::{MappingResolver, UniqueIdentifierGenerator},
    Result,
};

use std::sync::Arc;

pub struct Builder {
    transformers: MethodCallTransformers,

    /// How often a resolver may answer with a construct that needs another
    /// lookup before the translation fails
    max_resolution_passes: usize,

    table_prefix: String,
    sub_statement_prefix: String,
}

impl Builder {
    pub const DEFAULT_MAX_RESOLUTION_PASSES: usize = 16;

    /// Registers a transformer for calls of methods named `name`. A later
    /// registration for the same name replaces the earlier one, including
    /// the built-in transformers.
    pub fn method_call_transformer(
        &mut self,
        name: impl Into<String>,
        transformer: impl MethodCallTransformer + 'static,
    ) -> &mut Self {
        self.transformers.register(name, Arc::new(transformer));
        self
    }

    pub fn max_resolution_passes(&mut self, passes: usize) -> &mut Self {
        self.max_resolution_passes = passes;
        self
    }

    /// Set the prefixes of generated table and sub-statement aliases
    pub fn alias_prefixes(
        &mut self,
        table: impl Into<String>,
        sub_statement: impl Into<String>,
    ) -> &mut Self {
        self.table_prefix = table.into();
        self.sub_statement_prefix = sub_statement.into();
        self
    }

    pub fn build(&self, resolver: impl MappingResolver + 'static) -> Result<Translator> {
        if self.max_resolution_passes == 0 {
            return Err(err!("max_resolution_passes must be at least 1"));
        }

        Ok(Translator {
            resolver: Arc::new(resolver),
            transformers: self.transformers.clone(),
            max_resolution_passes: self.max_resolution_passes,
            table_prefix: self.table_prefix.clone(),
            sub_statement_prefix: self.sub_statement_prefix.clone(),
        })
    }
}

impl Default for Builder {
    fn default() -> Self {
        Builder {
            transformers: MethodCallTransformers::default(),
            max_resolution_passes: Self::DEFAULT_MAX_RESOLUTION_PASSES,
            table_prefix: UniqueIdentifierGenerator::DEFAULT_TABLE_PREFIX.to_string(),
            sub_statement_prefix: UniqueIdentifierGenerator::DEFAULT_SUB_STATEMENT_PREFIX
                .to_string(),
        }
    }
}
