//! Shorthands for building query models over the restaurant domain.

use quarry::{
    query::{BodyClause, Expr, FromClause, QueryModel, SelectOrGroupClause},
    stmt::Type,
};

/// `from c in Cook`
pub fn cooks() -> FromClause {
    from("c", "Cook")
}

/// `from k in Kitchen`
pub fn kitchens() -> FromClause {
    from("k", "Kitchen")
}

pub fn from(item_name: &str, entity: &str) -> FromClause {
    FromClause::new(item_name, Type::entity(entity), Expr::table(entity))
}

/// `from <item_name> in <owner>.<member>`
pub fn collection(owner: &FromClause, item_name: &str, member: &str, item_type: &str) -> FromClause {
    FromClause::new(
        item_name,
        Type::entity(item_type),
        owner
            .reference()
            .field(member, Type::list(Type::entity(item_type))),
    )
}

/// `from <source> select <selector>`
pub fn select(source: &FromClause, selector: Expr) -> QueryModel {
    QueryModel::new(source.clone(), SelectOrGroupClause::select(selector))
}

/// `from <source> select <source>`
pub fn select_all(source: &FromClause) -> QueryModel {
    select(source, source.reference())
}

/// `from c in Cook select c.<member>`
pub fn select_cook_member(member: &str, ty: Type) -> QueryModel {
    let c = cooks();
    select(&c, c.reference().field(member, ty))
}

/// A sub-query used as the source of another from clause.
pub fn sub_query(item_name: &str, item_type: Type, model: QueryModel) -> FromClause {
    FromClause::new(item_name, item_type, Expr::sub_query(model))
}

/// `from c in Cook where c.KitchenID == k.ID select c`
pub fn cooks_of_kitchen(k: &FromClause) -> QueryModel {
    let c = cooks();
    select_all(&c).with_body_clause(BodyClause::where_(Expr::eq(
        c.reference().field("KitchenID", Type::I32),
        k.reference().field("ID", Type::I32),
    )))
}

/// Columns of the cook table as selected from `alias`.
pub fn cook_columns(alias: &str) -> String {
    ["ID", "FirstName", "Name", "IsFullTimeCook", "KitchenID"]
        .iter()
        .map(|column| format!("[{alias}].[{column}]"))
        .collect::<Vec<_>>()
        .join(",")
}
