use super::{Expr, SqlEntity, Type};

use std::{borrow::Cow, fmt, sync::Arc};

/// A column of a table or sub-statement.
///
/// Definition columns belong directly to a table. Reference columns are
/// projected through an entity of a sub-statement and are named after that
/// entity (`[q0].[e1_ID]`). The referenced entity is only used to navigate,
/// never to own anything.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlColumn {
    pub ty: Type,

    /// Alias of the table the column belongs to
    pub owning_table_alias: String,

    /// Column name as mapped, or `*` for all columns
    pub column_name: String,

    pub is_primary_key: bool,

    pub kind: SqlColumnKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SqlColumnKind {
    Definition,
    Reference(Arc<SqlEntity>),
}

impl SqlColumn {
    pub const STAR: &'static str = "*";

    pub fn definition(
        ty: Type,
        owning_table_alias: impl Into<String>,
        column_name: impl Into<String>,
        is_primary_key: bool,
    ) -> SqlColumn {
        SqlColumn {
            ty,
            owning_table_alias: owning_table_alias.into(),
            column_name: column_name.into(),
            is_primary_key,
            kind: SqlColumnKind::Definition,
        }
    }

    pub fn reference(
        ty: Type,
        owning_table_alias: impl Into<String>,
        column_name: impl Into<String>,
        is_primary_key: bool,
        referenced_entity: Arc<SqlEntity>,
    ) -> SqlColumn {
        SqlColumn {
            ty,
            owning_table_alias: owning_table_alias.into(),
            column_name: column_name.into(),
            is_primary_key,
            kind: SqlColumnKind::Reference(referenced_entity),
        }
    }

    pub fn is_reference(&self) -> bool {
        matches!(self.kind, SqlColumnKind::Reference(_))
    }

    pub fn referenced_entity(&self) -> Option<&SqlEntity> {
        match &self.kind {
            SqlColumnKind::Reference(entity) => Some(entity),
            SqlColumnKind::Definition => None,
        }
    }

    pub fn is_star(&self) -> bool {
        self.column_name == Self::STAR
    }

    /// Returns a copy with new properties, keeping the column kind.
    pub fn update(
        &self,
        ty: Type,
        owning_table_alias: impl Into<String>,
        column_name: impl Into<String>,
        is_primary_key: bool,
    ) -> SqlColumn {
        SqlColumn {
            ty,
            owning_table_alias: owning_table_alias.into(),
            column_name: column_name.into(),
            is_primary_key,
            kind: self.kind.clone(),
        }
    }

    /// The name the column has in SQL. Reference columns of a named entity
    /// are prefixed with that entity's name.
    pub fn sql_name(&self) -> Cow<'_, str> {
        match self.referenced_entity().and_then(|entity| entity.name.as_deref()) {
            Some(entity_name) if !self.is_star() => {
                Cow::Owned(format!("{entity_name}_{}", self.column_name))
            }
            _ => Cow::Borrowed(&self.column_name),
        }
    }
}

impl From<SqlColumn> for Expr {
    fn from(value: SqlColumn) -> Self {
        Expr::Column(value)
    }
}

impl fmt::Display for SqlColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}].[{}]", self.owning_table_alias, self.sql_name())?;
        if self.is_reference() {
            f.write_str(" (REF)")?;
        }
        Ok(())
    }
}
