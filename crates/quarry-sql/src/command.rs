use super::{ident::Ident, Params, Placeholder};

use quarry_core::{
    stmt::{DataInfo, Expr, SqlColumn, SqlStatement, Value},
    Result,
};
use std::fmt::Write;

/// A bound parameter of a command.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    /// Name used in the command text, e.g. `@1`
    pub name: String,
    pub value: Value,
}

/// The finished output of a translation, ready for an executor.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlCommand {
    pub text: String,

    /// Parameters in the order they appear in `text`
    pub parameters: Vec<Parameter>,

    /// Result shape, for enforcing cardinality
    pub data_info: DataInfo,

    /// Names of the projected columns, in order
    pub column_names: Vec<String>,
}

/// Accumulates the text and parameters of a command. Appending is the only
/// operation, so parameters are numbered in emission order.
#[derive(Debug, Default)]
pub struct CommandBuilder {
    text: String,
    parameters: Vec<Parameter>,
}

impl CommandBuilder {
    pub fn new() -> CommandBuilder {
        CommandBuilder::default()
    }

    pub fn append(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub(crate) fn append_fmt(&mut self, args: std::fmt::Arguments<'_>) {
        // Writing to a `String` cannot fail
        let _ = self.text.write_fmt(args);
    }

    /// Appends `[name]`.
    pub fn append_identifier(&mut self, name: &str) {
        self.append_fmt(format_args!("{}", Ident(name)));
    }

    /// Appends a single-quoted literal with embedded quotes doubled.
    pub fn append_string_literal(&mut self, value: &str) {
        self.text.push('\'');
        self.text.push_str(&value.replace('\'', "''"));
        self.text.push('\'');
    }

    /// Registers a parameter and appends its placeholder.
    pub fn append_parameter(&mut self, value: &Value) -> Placeholder {
        let placeholder = Params::push(&mut self.parameters, value);
        self.append_fmt(format_args!("{placeholder}"));
        placeholder
    }

    /// Appends `items`, separated by `separator`, using `f` for each item.
    pub fn append_separated<T>(
        &mut self,
        separator: &str,
        items: impl IntoIterator<Item = T>,
        mut f: impl FnMut(&mut CommandBuilder, T) -> Result<()>,
    ) -> Result<()> {
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                self.append(separator);
            }
            f(self, item)?;
        }
        Ok(())
    }

    pub fn command_text(&self) -> &str {
        &self.text
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Finishes the command for the statement whose text was generated.
    pub fn into_command(self, stmt: &SqlStatement) -> SqlCommand {
        SqlCommand {
            text: self.text,
            parameters: self.parameters,
            data_info: stmt.data_info.clone(),
            column_names: projection_column_names(&stmt.select_projection),
        }
    }
}

fn projection_column_names(projection: &Expr) -> Vec<String> {
    match projection {
        Expr::Entity(entity) => entity
            .projection_columns()
            .iter()
            .flat_map(projection_column_names)
            .collect(),
        Expr::Named(named) => match &*named.expr {
            Expr::Entity(entity) => {
                let entity = entity.update(entity.item_type.clone(), &entity.table_alias, named.name.clone());
                projection_column_names(&Expr::Entity(entity))
            }
            _ => vec![named.output_name().to_string()],
        },
        Expr::Column(column) => vec![column_name(column)],
        Expr::New(record) => record
            .members
            .iter()
            .flat_map(|member| projection_column_names(&Expr::Named(member.clone())))
            .collect(),
        Expr::GroupingSelect(_) => vec!["key".to_string()],
        _ => vec![String::new()],
    }
}

fn column_name(column: &SqlColumn) -> String {
    column.sql_name().into_owned()
}
