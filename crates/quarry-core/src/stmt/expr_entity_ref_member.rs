use super::{Cardinality, Expr, Member, SqlEntity, Type};

/// A relation member of a resolved entity, which still needs a join to the
/// related table before it can be used.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprEntityRefMember {
    /// Entity the member is accessed on
    pub originating_entity: SqlEntity,

    pub member: Member,

    /// Type of the related entity
    pub item_type: Type,

    pub cardinality: Cardinality,
}

impl Expr {
    pub fn entity_ref_member(originating_entity: SqlEntity, member: Member, item_type: Type) -> Expr {
        ExprEntityRefMember {
            originating_entity,
            member,
            item_type,
            cardinality: Cardinality::One,
        }
        .into()
    }
}

impl From<ExprEntityRefMember> for Expr {
    fn from(value: ExprEntityRefMember) -> Self {
        Expr::EntityRefMember(value)
    }
}
