use super::{Expr, SqlColumn, Type};

use std::{fmt, sync::Arc};

/// A whole mapped object used as an expression.
///
/// Definition entities own the columns of a table. Reference entities stem
/// from a sub-statement: they know the entity projected inside it and their
/// columns are reference columns (`[q0].[e0_ID]`).
///
/// The column list is fixed at construction; `update` and
/// `create_reference` build new entities.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlEntity {
    pub item_type: Type,
    pub table_alias: String,
    pub name: Option<String>,
    columns: Vec<SqlColumn>,
    referenced_entity: Option<Arc<SqlEntity>>,
}

impl SqlEntity {
    pub fn definition(
        item_type: Type,
        table_alias: impl Into<String>,
        name: Option<String>,
        columns: Vec<SqlColumn>,
    ) -> SqlEntity {
        SqlEntity {
            item_type,
            table_alias: table_alias.into(),
            name,
            columns,
            referenced_entity: None,
        }
    }

    pub fn reference(
        item_type: Type,
        table_alias: impl Into<String>,
        name: Option<String>,
        referenced_entity: SqlEntity,
    ) -> SqlEntity {
        let table_alias = table_alias.into();
        let referenced_entity = Arc::new(referenced_entity);
        let columns = referenced_entity
            .columns
            .iter()
            .map(|column| {
                SqlColumn::reference(
                    column.ty.clone(),
                    table_alias.clone(),
                    column.column_name.clone(),
                    column.is_primary_key,
                    referenced_entity.clone(),
                )
            })
            .collect();

        SqlEntity {
            item_type,
            table_alias,
            name,
            columns,
            referenced_entity: Some(referenced_entity),
        }
    }

    pub fn columns(&self) -> &[SqlColumn] {
        &self.columns
    }

    pub fn is_reference(&self) -> bool {
        self.referenced_entity.is_some()
    }

    pub fn referenced_entity(&self) -> Option<&SqlEntity> {
        self.referenced_entity.as_deref()
    }

    pub fn primary_key_column(&self) -> Option<&SqlColumn> {
        self.columns.iter().find(|column| column.is_primary_key)
    }

    /// Returns a column of this entity, which need not be part of its column
    /// list.
    pub fn get_column(&self, ty: Type, column_name: &str, is_primary_key: bool) -> SqlColumn {
        match &self.referenced_entity {
            Some(referenced) => SqlColumn::reference(
                ty,
                self.table_alias.clone(),
                column_name,
                is_primary_key,
                referenced.clone(),
            ),
            None => SqlColumn::definition(ty, self.table_alias.clone(), column_name, is_primary_key),
        }
    }

    /// Returns an entity referencing this one from a sub-statement aliased
    /// `new_table_alias`.
    pub fn create_reference(&self, new_table_alias: &str, new_type: Type) -> SqlEntity {
        SqlEntity::reference(new_type, new_table_alias, None, self.clone())
    }

    /// Returns a copy of this entity with new properties. The columns follow
    /// the new table alias.
    pub fn update(&self, item_type: Type, table_alias: &str, name: Option<String>) -> SqlEntity {
        match &self.referenced_entity {
            Some(referenced) => {
                SqlEntity::reference(item_type, table_alias, name, (**referenced).clone())
            }
            None => SqlEntity::definition(
                item_type,
                table_alias,
                name,
                self.columns
                    .iter()
                    .map(|column| {
                        column.update(
                            column.ty.clone(),
                            table_alias,
                            column.column_name.clone(),
                            column.is_primary_key,
                        )
                    })
                    .collect(),
            ),
        }
    }

    /// The expressions selected when the entity is projected. Columns of a
    /// named entity are given the entity's name as prefix.
    pub fn projection_columns(&self) -> Vec<Expr> {
        self.columns
            .iter()
            .map(|column| match &self.name {
                Some(name) => Expr::named(
                    Some(&format!("{name}_{}", column.column_name)),
                    column.clone(),
                ),
                None => Expr::Column(column.clone()),
            })
            .collect()
    }
}

impl From<SqlEntity> for Expr {
    fn from(value: SqlEntity) -> Self {
        Expr::Entity(value)
    }
}

impl fmt::Display for SqlEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.referenced_entity {
            Some(referenced) => {
                write!(f, "[{}]", self.table_alias)?;
                if let Some(name) = &referenced.name {
                    write!(f, ".[{name}]")?;
                }
                f.write_str(" (ENTITY-REF)")
            }
            None => {
                write!(f, "[{}]", self.table_alias)?;
                if let Some(name) = &self.name {
                    write!(f, ".[{name}]")?;
                }
                f.write_str(" (ENTITY)")
            }
        }
    }
}
