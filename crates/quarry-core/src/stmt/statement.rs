use super::{Expr, SqlAppendedTable, Tables, Type};

use std::fmt;

/// Shape of a statement's result, so the executor can enforce cardinality.
#[derive(Debug, Clone, PartialEq)]
pub enum DataInfo {
    /// Any number of rows
    Sequence { item_type: Type },

    /// Exactly one row; zero rows are allowed when `or_default` is set
    Single { item_type: Type, or_default: bool },

    /// The first row; zero rows are allowed when `or_default` is set
    First { item_type: Type, or_default: bool },

    /// One row with one value
    Scalar { ty: Type },
}

impl DataInfo {
    pub fn sequence(item_type: Type) -> DataInfo {
        DataInfo::Sequence { item_type }
    }

    pub fn scalar(ty: Type) -> DataInfo {
        DataInfo::Scalar { ty }
    }

    pub fn item_type(&self) -> &Type {
        match self {
            DataInfo::Sequence { item_type }
            | DataInfo::Single { item_type, .. }
            | DataInfo::First { item_type, .. } => item_type,
            DataInfo::Scalar { ty } => ty,
        }
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, DataInfo::Sequence { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderingDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ordering {
    pub expr: Expr,
    pub direction: OrderingDirection,
}

impl Ordering {
    pub fn new(expr: impl Into<Expr>, direction: OrderingDirection) -> Ordering {
        Ordering {
            expr: expr.into(),
            direction,
        }
    }
}

/// A `SELECT` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlStatement {
    pub data_info: DataInfo,
    pub select_projection: Expr,

    /// All tables of the statement, including joined ones
    pub tables: Tables,

    /// Tables of the `FROM` list, in order
    pub from: Vec<SqlAppendedTable>,

    pub where_condition: Option<Expr>,
    pub group_by: Option<Expr>,
    pub orderings: Vec<Ordering>,
    pub top: Option<Expr>,
    pub is_distinct: bool,
}

impl SqlStatement {
    pub fn new(data_info: DataInfo, select_projection: impl Into<Expr>) -> SqlStatement {
        SqlStatement {
            data_info,
            select_projection: select_projection.into(),
            tables: Tables::new(),
            from: vec![],
            where_condition: None,
            group_by: None,
            orderings: vec![],
            top: None,
            is_distinct: false,
        }
    }

    /// Returns `true` if the statement only selects the rows of its single
    /// table, so it can stand in for that table directly.
    pub fn is_simple_table_selection(&self) -> bool {
        let [appended] = &self.from[..] else {
            return false;
        };

        self.where_condition.is_none()
            && self.group_by.is_none()
            && self.orderings.is_empty()
            && self.top.is_none()
            && !self.is_distinct
            && self.data_info.is_sequence()
            && self.tables.len() == 1
            && matches!(
                &self.select_projection,
                Expr::TableReference(reference) if reference.table == appended.table
            )
    }
}

impl fmt::Display for SqlStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SELECT ")?;
        if self.is_distinct {
            f.write_str("DISTINCT ")?;
        }
        if let Some(top) = &self.top {
            write!(f, "TOP ({top}) ")?;
        }
        write!(f, "{}", self.select_projection)?;

        for (i, appended) in self.from.iter().enumerate() {
            f.write_str(if i == 0 { " FROM " } else { ", " })?;
            match self.tables.get(appended.table) {
                Some(table) => write!(f, "{}", table.table_info())?,
                None => f.write_str("?")?,
            }
        }

        if let Some(condition) = &self.where_condition {
            write!(f, " WHERE {condition}")?;
        }
        if let Some(key) = &self.group_by {
            write!(f, " GROUP BY {key}")?;
        }
        for (i, ordering) in self.orderings.iter().enumerate() {
            f.write_str(if i == 0 { " ORDER BY " } else { ", " })?;
            let direction = match ordering.direction {
                OrderingDirection::Asc => "ASC",
                OrderingDirection::Desc => "DESC",
            };
            write!(f, "{} {direction}", ordering.expr)?;
        }
        Ok(())
    }
}
