//! Translates language-integrated queries into T-SQL.
//!
//! A [`QueryModel`] goes through preparation, mapping resolution and SQL
//! generation and comes out as a [`SqlCommand`]. Domain knowledge enters only
//! through the [`MappingResolver`] handed to the [`Translator`].

mod engine;

pub mod transform;
pub use transform::{MethodCallTransformer, MethodCallTransformers};

pub mod translator;
pub use translator::Translator;

pub use quarry_core::{
    bail, err,
    mapping::{MappingResolver, UniqueIdentifierGenerator},
    query::{self, QueryModel},
    stmt, Error, Result,
};
pub use quarry_sql::{Parameter, SqlCommand};
