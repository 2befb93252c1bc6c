mod flaky;
pub use flaky::Flaky;

pub mod model;

mod restaurant;
pub use restaurant::Restaurant;

pub use std_util::*;

use quarry::{MappingResolver, QueryModel, Result, SqlCommand, Translator};

use std::sync::Once;

/// Routes the translator's logs to the test output. Set `RUST_LOG` to see
/// them.
pub fn init_logging() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A translator for the restaurant domain with default settings.
pub fn translator() -> Translator {
    translator_for(Restaurant)
}

pub fn translator_for(resolver: impl MappingResolver + 'static) -> Translator {
    init_logging();

    match Translator::builder().build(resolver) {
        Ok(translator) => translator,
        Err(err) => panic!("failed to build translator: {err}"),
    }
}

/// Translates `model` for the restaurant domain.
pub fn translate(model: &QueryModel) -> Result<SqlCommand> {
    translator().translate(model)
}

/// Translates `model` and returns the command text, panicking on failure.
pub fn sql(model: &QueryModel) -> String {
    std_util::assert_ok!(translate(model)).text
}
