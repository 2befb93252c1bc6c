mod error;
pub use error::Error;

pub mod mapping;
pub use mapping::{MappingResolver, UniqueIdentifierGenerator};

pub mod query;
pub use query::QueryModel;

pub mod stmt;

/// A Result type alias that uses Quarry's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
