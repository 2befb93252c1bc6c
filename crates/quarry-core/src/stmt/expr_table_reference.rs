use super::{Expr, TableId, Type};

/// Refers to the items of a table of the enclosing statement. Resolution
/// replaces it with the table's entity or value column.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprTableReference {
    pub table: TableId,
    pub item_type: Type,
}

impl Expr {
    pub fn table_reference(table: TableId, item_type: Type) -> Expr {
        ExprTableReference { table, item_type }.into()
    }
}

impl From<ExprTableReference> for Expr {
    fn from(value: ExprTableReference) -> Self {
        Expr::TableReference(value)
    }
}
