//! Rewrites method calls into SQL-native expressions.

mod contains;
pub use contains::Contains;

mod equals;
pub use equals::Equals;

mod string_case;
pub use string_case::StringCase;

use quarry_core::{
    stmt::{Expr, ExprMethodCall, Method},
    Error, Result,
};

use indexmap::IndexMap;
use std::{fmt, sync::Arc};

/// Rewrites a recognized method call into an expression the SQL generator
/// understands.
///
/// Transformers check the call shape (instance or static, argument count)
/// before rewriting and fail on anything they do not recognize.
pub trait MethodCallTransformer: Send + Sync {
    fn transform(&self, call: ExprMethodCall) -> Result<Expr>;
}

impl<F> MethodCallTransformer for F
where
    F: Fn(ExprMethodCall) -> Result<Expr> + Send + Sync,
{
    fn transform(&self, call: ExprMethodCall) -> Result<Expr> {
        self(call)
    }
}

/// Method call transformers by method name.
#[derive(Clone)]
pub struct MethodCallTransformers {
    by_name: IndexMap<String, Arc<dyn MethodCallTransformer>>,
}

impl MethodCallTransformers {
    /// An empty registry.
    pub fn new() -> MethodCallTransformers {
        MethodCallTransformers {
            by_name: IndexMap::new(),
        }
    }

    /// Registers `transformer` for calls of methods named `name`, replacing
    /// any earlier registration.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        transformer: Arc<dyn MethodCallTransformer>,
    ) -> &mut Self {
        self.by_name.insert(name.into(), transformer);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn MethodCallTransformer>> {
        self.by_name.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Rewrites `call` with the transformer registered for its method.
    pub fn transform(&self, call: ExprMethodCall) -> Result<Expr> {
        let Some(transformer) = self.get(&call.method.name) else {
            return Err(Error::not_supported(format!(
                "The method '{}' is not supported by this code generator, \
                 and no custom transformer has been registered.",
                call.method
            )));
        };

        tracing::trace!(method = %call.method, "transforming method call");
        transformer.transform(call)
    }
}

impl Default for MethodCallTransformers {
    fn default() -> Self {
        let mut transformers = MethodCallTransformers::new();
        transformers
            .register("Equals", Arc::new(Equals))
            .register("Contains", Arc::new(Contains))
            .register("ToUpper", Arc::new(StringCase::Upper))
            .register("ToLower", Arc::new(StringCase::Lower));
        transformers
    }
}

impl fmt::Debug for MethodCallTransformers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.by_name.keys()).finish()
    }
}

/// The failure for a call with an argument count the transformer does not
/// handle.
pub(crate) fn unsupported_arity(method: &Method, arity: usize) -> Error {
    Error::not_supported(format!(
        "{} function with {arity} arguments is not supported.",
        method.name
    ))
}

/// The failure for a call whose argument count belongs to the other call
/// form, such as an instance call passing the static form's arguments.
pub(crate) fn unsupported_form(method: &Method, is_instance: bool, arity: usize) -> Error {
    let (form, expected) = if is_instance {
        ("an instance", "1 argument")
    } else {
        ("a static", "2 arguments")
    };

    Error::not_supported(format!(
        "{} function with {arity} {} is not supported as {form} call; that form takes {expected}.",
        method.name,
        if arity == 1 { "argument" } else { "arguments" },
    ))
}
