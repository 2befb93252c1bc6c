//! SQL generation: renders a resolved statement into T-SQL text and an
//! ordered parameter list.

mod command;
pub use command::{CommandBuilder, Parameter, SqlCommand};

mod expr;
pub use expr::generate_expression;

mod ident;

mod params;
pub use params::{Params, Placeholder};

mod stage;
pub use stage::{DefaultGenerationStage, GenerationStage};

mod statement;
pub use statement::generate_statement;

mod table;
pub use table::generate_from_table;

use quarry_core::{stmt::SqlStatement, Result};

/// Generates the command for a fully resolved statement.
pub fn generate(stmt: &SqlStatement) -> Result<SqlCommand> {
    let mut builder = CommandBuilder::new();
    DefaultGenerationStage.generate_text_for_sql_statement(&mut builder, stmt)?;

    let command = builder.into_command(stmt);
    tracing::debug!(
        text_len = command.text.len(),
        params = command.parameters.len(),
        "generated SQL command"
    );
    Ok(command)
}
