use quarry::{
    bail,
    stmt::{
        Expr, JoinInfo, Member, ResolvedJoinInfo, ResolvedSimpleTableInfo, SqlColumn, SqlEntity,
        TableInfo, Type, UnresolvedJoinInfo, UnresolvedTableInfo, Value,
    },
    MappingResolver, Result, UniqueIdentifierGenerator,
};

/// Mapping of a small restaurant domain.
///
/// | Type       | Table                           | Columns                                           |
/// |------------|---------------------------------|---------------------------------------------------|
/// | Cook       | CookTable                       | ID, FirstName, Name, IsFullTimeCook, KitchenID    |
/// | Kitchen    | KitchenTable                    | ID, Name, RestaurantID                            |
/// | Restaurant | TestDomain.dbo.RestaurantTable  | ID, Name                                          |
///
/// Besides columns, `Cook.Kitchen` and `Kitchen.Restaurant` are relations,
/// `Kitchen.Cooks` is a collection. `Cook.Workplace` is mapped onto
/// `Cook.Kitchen` and `Cook.LastName` onto `Cook.Name`. `Cook.Loop` is a
/// relation the mapping never resolves.
#[derive(Debug, Default, Clone, Copy)]
pub struct Restaurant;

struct Column {
    name: &'static str,
    ty: Type,
    is_primary_key: bool,
}

impl Restaurant {
    fn table_name(item_type: &Type) -> Result<&'static str> {
        Ok(match entity_name(item_type)? {
            "Cook" => "CookTable",
            "Kitchen" => "KitchenTable",
            "Restaurant" => "TestDomain.dbo.RestaurantTable",
            other => bail!("type '{other}' is not mapped"),
        })
    }

    fn columns(item_type: &Type) -> Result<Vec<Column>> {
        let columns = match entity_name(item_type)? {
            "Cook" => vec![
                key("ID"),
                column("FirstName", Type::String),
                column("Name", Type::String),
                column("IsFullTimeCook", Type::Bool),
                column("KitchenID", Type::I32),
            ],
            "Kitchen" => vec![
                key("ID"),
                column("Name", Type::String),
                column("RestaurantID", Type::I32),
            ],
            "Restaurant" => vec![key("ID"), column("Name", Type::String)],
            other => bail!("type '{other}' is not mapped"),
        };
        Ok(columns)
    }

    /// Foreign type, key on the originating side and key on the foreign
    /// side of a relation.
    fn relation(member: &Member) -> Option<(&'static str, &'static str, &'static str)> {
        Some(match (member.declaring_type.as_str(), &*member.name) {
            ("Cook", "Kitchen") => ("Kitchen", "KitchenID", "ID"),
            ("Kitchen", "Cooks") => ("Cook", "ID", "KitchenID"),
            ("Kitchen", "Restaurant") => ("Restaurant", "RestaurantID", "ID"),
            _ => return None,
        })
    }
}

impl MappingResolver for Restaurant {
    fn resolve_table_info(
        &self,
        table_info: &UnresolvedTableInfo,
        generator: &mut UniqueIdentifierGenerator,
    ) -> Result<TableInfo> {
        let table_name = Restaurant::table_name(&table_info.item_type)?;
        Ok(TableInfo::resolved_simple(
            table_info.item_type.clone(),
            table_name,
            generator.table_alias(),
        ))
    }

    fn resolve_join_info(
        &self,
        join_info: &UnresolvedJoinInfo,
        generator: &mut UniqueIdentifierGenerator,
    ) -> Result<JoinInfo> {
        let member = &join_info.member;

        match (member.declaring_type.as_str(), &*member.name) {
            ("Cook", "Workplace") => {
                return Ok(JoinInfo::Unresolved(UnresolvedJoinInfo {
                    member: Member::new("Cook", "Kitchen"),
                    ..join_info.clone()
                }))
            }
            ("Cook", "Loop") => return Ok(JoinInfo::Unresolved(join_info.clone())),
            _ => {}
        }

        let Some((foreign_type, left_key, right_key)) = Restaurant::relation(member) else {
            bail!("member '{member}' is not a relation");
        };

        let foreign_type = Type::entity(foreign_type);
        let table_alias = generator.table_alias();
        let foreign_table_info = TableInfo::resolved_simple(
            foreign_type.clone(),
            Restaurant::table_name(&foreign_type)?,
            table_alias.clone(),
        );

        let entity = &join_info.originating_entity;
        let left_key = entity.get_column(Type::I32, left_key, left_key == "ID");
        let right_key = SqlColumn::definition(Type::I32, table_alias, right_key, right_key == "ID");

        Ok(JoinInfo::Resolved(ResolvedJoinInfo::new(
            foreign_table_info,
            left_key.into(),
            right_key.into(),
        )))
    }

    fn resolve_simple_table_info(
        &self,
        table_info: &ResolvedSimpleTableInfo,
        _generator: &mut UniqueIdentifierGenerator,
    ) -> Result<SqlEntity> {
        let alias = &table_info.table_alias;
        let columns = Restaurant::columns(&table_info.item_type)?
            .into_iter()
            .map(|column| {
                SqlColumn::definition(column.ty, alias.clone(), column.name, column.is_primary_key)
            })
            .collect();

        Ok(SqlEntity::definition(
            table_info.item_type.clone(),
            alias.clone(),
            None,
            columns,
        ))
    }

    fn resolve_member_expression(&self, entity: &SqlEntity, member: &Member) -> Result<Expr> {
        let declaring_type = member.declaring_type.as_str();

        match (declaring_type, &*member.name) {
            ("Cook", "LastName") => {
                return Ok(Expr::member(
                    entity.clone(),
                    Member::new("Cook", "Name"),
                    Type::String,
                ))
            }
            ("Cook", "Workplace") | ("Cook", "Loop") => {
                return Ok(Expr::entity_ref_member(
                    entity.clone(),
                    member.clone(),
                    Type::entity("Kitchen"),
                ))
            }
            _ => {}
        }

        if let Some((foreign_type, ..)) = Restaurant::relation(member) {
            return Ok(Expr::entity_ref_member(
                entity.clone(),
                member.clone(),
                Type::entity(foreign_type),
            ));
        }

        let columns = Restaurant::columns(&Type::entity(declaring_type))?;
        let Some(column) = columns.into_iter().find(|column| column.name == &*member.name) else {
            bail!("member '{member}' is not mapped");
        };

        Ok(entity
            .get_column(column.ty, column.name, column.is_primary_key)
            .into())
    }

    fn resolve_constant_expression(&self, value: &Value) -> Result<Expr> {
        match value {
            Value::Object { key, .. } => Ok(Expr::Constant((**key).clone())),
            _ => Ok(Expr::Constant(value.clone())),
        }
    }
}

fn entity_name(item_type: &Type) -> Result<&str> {
    match item_type.as_entity() {
        Some(name) => Ok(name.as_str()),
        None => bail!("type '{item_type}' is not an entity"),
    }
}

fn key(name: &'static str) -> Column {
    Column {
        name,
        ty: Type::I32,
        is_primary_key: true,
    }
}

fn column(name: &'static str, ty: Type) -> Column {
    Column {
        name,
        ty,
        is_primary_key: false,
    }
}
