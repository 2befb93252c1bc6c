use super::{Expr, QuerySourceId, QuerySourceRef};
use crate::stmt::{OrderingDirection, Type};

use std::fmt;

/// `from item in source`. Used for the main from clause and for additional
/// from clauses.
#[derive(Debug, Clone, PartialEq)]
pub struct FromClause {
    pub id: QuerySourceId,
    pub item_name: String,
    pub item_type: Type,
    pub source: Expr,
}

impl FromClause {
    pub fn new(item_name: impl Into<String>, item_type: Type, source: Expr) -> FromClause {
        FromClause {
            id: QuerySourceId::next(),
            item_name: item_name.into(),
            item_type,
            source,
        }
    }

    /// An expression referring to the clause's current item.
    pub fn reference(&self) -> Expr {
        Expr::QuerySource(QuerySourceRef {
            id: self.id,
            name: self.item_name.clone(),
            ty: self.item_type.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhereClause {
    pub predicate: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ordering {
    pub expr: Expr,
    pub direction: OrderingDirection,
}

impl Ordering {
    pub fn asc(expr: Expr) -> Ordering {
        Ordering {
            expr,
            direction: OrderingDirection::Asc,
        }
    }

    pub fn desc(expr: Expr) -> Ordering {
        Ordering {
            expr,
            direction: OrderingDirection::Desc,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderByClause {
    pub orderings: Vec<Ordering>,
}

/// `join item in inner_source on outer_key equals inner_key`
#[derive(Debug, Clone, PartialEq)]
pub struct JoinClause {
    pub id: QuerySourceId,
    pub item_name: String,
    pub item_type: Type,
    pub inner_source: Expr,
    pub outer_key: Expr,
    pub inner_key: Expr,
}

impl JoinClause {
    /// Creates a join clause. The keys are built from the clause's own
    /// reference, so `inner_key` can refer to the joined item.
    pub fn new(
        item_name: impl Into<String>,
        item_type: Type,
        inner_source: Expr,
        keys: impl FnOnce(Expr) -> (Expr, Expr),
    ) -> JoinClause {
        let id = QuerySourceId::next();
        let item_name = item_name.into();
        let reference = Expr::QuerySource(QuerySourceRef {
            id,
            name: item_name.clone(),
            ty: item_type.clone(),
        });
        let (outer_key, inner_key) = keys(reference);

        JoinClause {
            id,
            item_name,
            item_type,
            inner_source,
            outer_key,
            inner_key,
        }
    }

    pub fn reference(&self) -> Expr {
        Expr::QuerySource(QuerySourceRef {
            id: self.id,
            name: self.item_name.clone(),
            ty: self.item_type.clone(),
        })
    }
}

/// `let name = expr`
#[derive(Debug, Clone, PartialEq)]
pub struct LetClause {
    pub id: QuerySourceId,
    pub name: String,
    pub expr: Expr,
}

impl LetClause {
    pub fn new(name: impl Into<String>, expr: Expr) -> LetClause {
        LetClause {
            id: QuerySourceId::next(),
            name: name.into(),
            expr,
        }
    }

    pub fn reference(&self) -> Expr {
        Expr::QuerySource(QuerySourceRef {
            id: self.id,
            name: self.name.clone(),
            ty: self.expr.ty(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BodyClause {
    Where(WhereClause),
    OrderBy(OrderByClause),
    AdditionalFrom(FromClause),
    Join(JoinClause),
    Let(LetClause),
}

impl BodyClause {
    pub fn where_(predicate: Expr) -> BodyClause {
        BodyClause::Where(WhereClause { predicate })
    }

    pub fn order_by(orderings: impl IntoIterator<Item = Ordering>) -> BodyClause {
        BodyClause::OrderBy(OrderByClause {
            orderings: orderings.into_iter().collect(),
        })
    }
}

impl From<FromClause> for BodyClause {
    fn from(value: FromClause) -> Self {
        BodyClause::AdditionalFrom(value)
    }
}

impl From<JoinClause> for BodyClause {
    fn from(value: JoinClause) -> Self {
        BodyClause::Join(value)
    }
}

impl From<LetClause> for BodyClause {
    fn from(value: LetClause) -> Self {
        BodyClause::Let(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectClause {
    pub selector: Expr,
}

/// `group element by key`
#[derive(Debug, Clone, PartialEq)]
pub struct GroupClause {
    pub key: Expr,
    pub element: Expr,
}

/// The terminal clause of a query model.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectOrGroupClause {
    Select(SelectClause),
    Group(GroupClause),
}

impl SelectOrGroupClause {
    pub fn select(selector: Expr) -> SelectOrGroupClause {
        SelectOrGroupClause::Select(SelectClause { selector })
    }

    pub fn group(key: Expr, element: Expr) -> SelectOrGroupClause {
        SelectOrGroupClause::Group(GroupClause { key, element })
    }

    /// Type of the items the clause produces.
    pub fn item_type(&self) -> Type {
        match self {
            SelectOrGroupClause::Select(clause) => clause.selector.ty(),
            SelectOrGroupClause::Group(clause) => {
                Type::grouping(clause.key.ty(), clause.element.ty())
            }
        }
    }
}

impl fmt::Display for FromClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "from {} {} in {}", self.item_type, self.item_name, self.source)
    }
}

impl fmt::Display for BodyClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyClause::Where(clause) => write!(f, "where {}", clause.predicate),
            BodyClause::OrderBy(clause) => {
                f.write_str("orderby ")?;
                for (i, ordering) in clause.orderings.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    let direction = match ordering.direction {
                        OrderingDirection::Asc => "asc",
                        OrderingDirection::Desc => "desc",
                    };
                    write!(f, "{} {direction}", ordering.expr)?;
                }
                Ok(())
            }
            BodyClause::AdditionalFrom(clause) => write!(f, "{clause}"),
            BodyClause::Join(clause) => write!(
                f,
                "join {} {} in {} on {} equals {}",
                clause.item_type, clause.item_name, clause.inner_source, clause.outer_key, clause.inner_key
            ),
            BodyClause::Let(clause) => write!(f, "let {} = {}", clause.name, clause.expr),
        }
    }
}

impl fmt::Display for SelectOrGroupClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectOrGroupClause::Select(clause) => write!(f, "select {}", clause.selector),
            SelectOrGroupClause::Group(clause) => {
                write!(f, "group {} by {}", clause.element, clause.key)
            }
        }
    }
}
