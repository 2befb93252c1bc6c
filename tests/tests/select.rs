//! Translation of select, where, order-by, join and let clauses.

use tests::{model::*, *};

use pretty_assertions::assert_eq;
use quarry::{
    query::{BodyClause, Expr, JoinClause, LetClause, Ordering, ResultOperator},
    stmt::{BinaryOp, DataInfo, Type, UnaryOp, Value},
};

#[test]
fn select_entity() {
    let command = assert_ok!(translate(&select_all(&cooks())));

    assert_eq!(
        command.text,
        format!("SELECT {} FROM [CookTable] AS [t0]", cook_columns("t0"))
    );
    assert!(command.parameters.is_empty());
    assert_eq!(
        command.column_names,
        ["ID", "FirstName", "Name", "IsFullTimeCook", "KitchenID"]
    );
    assert_eq!(command.data_info, DataInfo::sequence(Type::entity("Cook")));
}

#[test]
fn select_member() {
    let command = assert_ok!(translate(&select_cook_member("Name", Type::String)));

    assert_eq!(
        command.text,
        "SELECT [t0].[Name] AS [value] FROM [CookTable] AS [t0]"
    );
    assert_eq!(command.column_names, ["value"]);
    assert_eq!(command.data_info, DataInfo::sequence(Type::String));
}

#[test]
fn member_mapped_onto_another_member() {
    assert_eq!(
        sql(&select_cook_member("LastName", Type::String)),
        "SELECT [t0].[Name] AS [value] FROM [CookTable] AS [t0]"
    );
}

#[test]
fn qualified_table_name() {
    assert_eq!(
        sql(&{
            let r = from("r", "Restaurant");
            select(&r, r.reference().field("Name", Type::String))
        }),
        "SELECT [t0].[Name] AS [value] FROM [TestDomain].[dbo].[RestaurantTable] AS [t0]"
    );
}

#[test]
fn select_record() {
    let c = cooks();
    let model = select(
        &c,
        Expr::new_record([
            ("First", c.reference().field("FirstName", Type::String)),
            ("Last", c.reference().field("Name", Type::String)),
        ]),
    );

    let command = assert_ok!(translate(&model));
    assert_eq!(
        command.text,
        "SELECT [t0].[FirstName] AS [First],[t0].[Name] AS [Last] FROM [CookTable] AS [t0]"
    );
    assert_eq!(command.column_names, ["First", "Last"]);
}

#[test]
fn where_with_parameter() {
    let c = cooks();
    let model = select_all(&c).with_body_clause(BodyClause::where_(Expr::eq(
        c.reference().field("Name", Type::String),
        Expr::constant("Hugo"),
    )));

    let command = assert_ok!(translate(&model));
    assert_eq!(
        command.text,
        format!(
            "SELECT {} FROM [CookTable] AS [t0] WHERE ([t0].[Name] = @1)",
            cook_columns("t0")
        )
    );
    assert_eq!(command.parameters.len(), 1);
    assert_eq!(command.parameters[0].name, "@1");
    assert_eq!(command.parameters[0].value, Value::from("Hugo"));
}

#[test]
fn where_clauses_are_combined() {
    let c = cooks();
    let model = select(&c, c.reference().field("ID", Type::I32))
        .with_body_clause(BodyClause::where_(Expr::eq(
            c.reference().field("FirstName", Type::String),
            Expr::constant("Hugo"),
        )))
        .with_body_clause(BodyClause::where_(Expr::binary(
            BinaryOp::Gt,
            c.reference().field("KitchenID", Type::I32),
            Expr::constant(3),
        )));

    let command = assert_ok!(translate(&model));
    assert_eq!(
        command.text,
        "SELECT [t0].[ID] AS [value] FROM [CookTable] AS [t0] \
         WHERE (([t0].[FirstName] = @1) AND ([t0].[KitchenID] > @2))"
    );
    assert_eq!(
        command
            .parameters
            .iter()
            .map(|parameter| parameter.value.clone())
            .collect::<Vec<_>>(),
        [Value::from("Hugo"), Value::from(3)]
    );
}

#[test]
fn bool_column_as_filter() {
    let c = cooks();
    let model = select(&c, c.reference().field("ID", Type::I32)).with_body_clause(
        BodyClause::where_(c.reference().field("IsFullTimeCook", Type::Bool)),
    );

    assert_eq!(
        sql(&model),
        "SELECT [t0].[ID] AS [value] FROM [CookTable] AS [t0] WHERE ([t0].[IsFullTimeCook] = 1)"
    );
}

#[test]
fn bool_constant_as_filter() {
    let c = cooks();
    let model = select(&c, c.reference().field("ID", Type::I32))
        .with_body_clause(BodyClause::where_(Expr::constant(true)));

    assert_eq!(
        sql(&model),
        "SELECT [t0].[ID] AS [value] FROM [CookTable] AS [t0] WHERE (1 = 1)"
    );
}

#[test]
fn negated_bool_column_as_filter() {
    let c = cooks();
    let model = select(&c, c.reference().field("ID", Type::I32)).with_body_clause(
        BodyClause::where_(Expr::unary(
            UnaryOp::Not,
            c.reference().field("IsFullTimeCook", Type::Bool),
        )),
    );

    assert_eq!(
        sql(&model),
        "SELECT [t0].[ID] AS [value] FROM [CookTable] AS [t0] \
         WHERE NOT ([t0].[IsFullTimeCook] = 1)"
    );
}

#[test]
fn predicate_as_value() {
    let c = cooks();
    let model = select(
        &c,
        Expr::eq(
            c.reference().field("IsFullTimeCook", Type::Bool),
            Expr::constant(true),
        ),
    );

    let command = assert_ok!(translate(&model));
    assert_eq!(
        command.text,
        "SELECT CASE WHEN ([t0].[IsFullTimeCook] = 1) THEN 1 ELSE 0 END AS [value] \
         FROM [CookTable] AS [t0]"
    );
    assert_eq!(command.data_info, DataInfo::sequence(Type::Bool));
}

#[test]
fn bool_column_as_value() {
    assert_eq!(
        sql(&select_cook_member("IsFullTimeCook", Type::Bool)),
        "SELECT [t0].[IsFullTimeCook] AS [value] FROM [CookTable] AS [t0]"
    );
}

#[test]
fn comparison_with_null() {
    let c = cooks();
    let name = c.reference().field("Name", Type::String);

    let is_null = select(&c, c.reference().field("ID", Type::I32))
        .with_body_clause(BodyClause::where_(Expr::eq(
            name.clone(),
            Expr::constant(Value::Null),
        )));
    assert_eq!(
        sql(&is_null),
        "SELECT [t0].[ID] AS [value] FROM [CookTable] AS [t0] WHERE ([t0].[Name] IS NULL)"
    );

    let is_not_null = select(&c, c.reference().field("ID", Type::I32)).with_body_clause(
        BodyClause::where_(Expr::binary(BinaryOp::Ne, Expr::constant(Value::Null), name)),
    );
    assert_eq!(
        sql(&is_not_null),
        "SELECT [t0].[ID] AS [value] FROM [CookTable] AS [t0] WHERE ([t0].[Name] IS NOT NULL)"
    );
}

#[test]
fn later_ordering_comes_first() {
    let c = cooks();
    let model = select(&c, c.reference().field("ID", Type::I32))
        .with_body_clause(BodyClause::order_by([Ordering::asc(
            c.reference().field("Name", Type::String),
        )]))
        .with_body_clause(BodyClause::order_by([Ordering::desc(
            c.reference().field("FirstName", Type::String),
        )]));

    assert_eq!(
        sql(&model),
        "SELECT [t0].[ID] AS [value] FROM [CookTable] AS [t0] \
         ORDER BY [t0].[FirstName] DESC, [t0].[Name] ASC"
    );
}

#[test]
fn ordering_by_entity_orders_by_its_columns() {
    let k = kitchens();
    let model = select(&k, k.reference().field("ID", Type::I32))
        .with_body_clause(BodyClause::order_by([Ordering::asc(k.reference())]));

    assert_eq!(
        sql(&model),
        "SELECT [t0].[ID] AS [value] FROM [KitchenTable] AS [t0] \
         ORDER BY [t0].[ID] ASC, [t0].[Name] ASC, [t0].[RestaurantID] ASC"
    );
}

#[test]
fn relation_member_adds_left_join() {
    let c = cooks();
    let model = select(
        &c,
        c.reference()
            .field("Kitchen", Type::entity("Kitchen"))
            .field("Name", Type::String),
    );

    assert_eq!(
        sql(&model),
        "SELECT [t1].[Name] AS [value] FROM [CookTable] AS [t0] \
         LEFT OUTER JOIN [KitchenTable] AS [t1] ON ([t0].[KitchenID] = [t1].[ID])"
    );
}

#[test]
fn relation_member_is_joined_once() {
    let c = cooks();
    let kitchen = c.reference().field("Kitchen", Type::entity("Kitchen"));
    let model = select(
        &c,
        Expr::new_record([
            ("Kitchen", kitchen.clone().field("Name", Type::String)),
            ("Restaurant", kitchen.field("RestaurantID", Type::I32)),
        ]),
    );

    assert_eq!(
        sql(&model),
        "SELECT [t1].[Name] AS [Kitchen],[t1].[RestaurantID] AS [Restaurant] \
         FROM [CookTable] AS [t0] \
         LEFT OUTER JOIN [KitchenTable] AS [t1] ON ([t0].[KitchenID] = [t1].[ID])"
    );
}

#[test]
fn nested_relation_members() {
    let c = cooks();
    let model = select(
        &c,
        c.reference()
            .field("Kitchen", Type::entity("Kitchen"))
            .field("Restaurant", Type::entity("Restaurant"))
            .field("Name", Type::String),
    );

    assert_eq!(
        sql(&model),
        "SELECT [t2].[Name] AS [value] FROM [CookTable] AS [t0] \
         LEFT OUTER JOIN [KitchenTable] AS [t1] \
         LEFT OUTER JOIN [TestDomain].[dbo].[RestaurantTable] AS [t2] \
         ON ([t1].[RestaurantID] = [t2].[ID]) \
         ON ([t0].[KitchenID] = [t1].[ID])"
    );
}

#[test]
fn relation_redirected_by_mapping() {
    let c = cooks();
    let model = select(
        &c,
        c.reference()
            .field("Workplace", Type::entity("Kitchen"))
            .field("Name", Type::String),
    );

    assert_eq!(
        sql(&model),
        "SELECT [t1].[Name] AS [value] FROM [CookTable] AS [t0] \
         LEFT OUTER JOIN [KitchenTable] AS [t1] ON ([t0].[KitchenID] = [t1].[ID])"
    );
}

#[test]
fn relation_compared_with_object() {
    let c = cooks();
    let model = select(&c, c.reference().field("ID", Type::I32)).with_body_clause(
        BodyClause::where_(Expr::eq(
            c.reference().field("Kitchen", Type::entity("Kitchen")),
            Expr::constant(Value::object("Kitchen", 3)),
        )),
    );

    let command = assert_ok!(translate(&model));
    assert_eq!(
        command.text,
        "SELECT [t0].[ID] AS [value] FROM [CookTable] AS [t0] \
         LEFT OUTER JOIN [KitchenTable] AS [t1] ON ([t0].[KitchenID] = [t1].[ID]) \
         WHERE ([t1].[ID] = @1)"
    );
    assert_eq!(command.parameters[0].value, Value::from(3));
}

#[test]
fn collection_from_clause() {
    let k = kitchens();
    let c = collection(&k, "c", "Cooks", "Cook");
    let model = select(&k, c.reference().field("Name", Type::String)).with_body_clause(c);

    assert_eq!(
        sql(&model),
        "SELECT [t1].[Name] AS [value] FROM [KitchenTable] AS [t0] \
         CROSS JOIN [CookTable] AS [t1] WHERE ([t0].[ID] = [t1].[KitchenID])"
    );
}

#[test]
fn additional_from_clause() {
    let c = cooks();
    let k = kitchens();
    let model = select(
        &c,
        Expr::new_record([
            ("Cook", c.reference().field("Name", Type::String)),
            ("Kitchen", k.reference().field("Name", Type::String)),
        ]),
    )
    .with_body_clause(k);

    assert_eq!(
        sql(&model),
        "SELECT [t0].[Name] AS [Cook],[t1].[Name] AS [Kitchen] \
         FROM [CookTable] AS [t0] CROSS JOIN [KitchenTable] AS [t1]"
    );
}

#[test]
fn join_clause() {
    let c = cooks();
    let join = JoinClause::new(
        "k",
        Type::entity("Kitchen"),
        Expr::table("Kitchen"),
        |k| {
            (
                c.reference().field("KitchenID", Type::I32),
                k.field("ID", Type::I32),
            )
        },
    );
    let model = select(&c, join.reference().field("Name", Type::String)).with_body_clause(join);

    assert_eq!(
        sql(&model),
        "SELECT [t1].[Name] AS [value] FROM [CookTable] AS [t0] \
         INNER JOIN [KitchenTable] AS [t1] ON ([t0].[KitchenID] = [t1].[ID])"
    );
}

#[test]
fn let_clause() {
    let c = cooks();
    let name = LetClause::new("n", c.reference().field("Name", Type::String));
    let model = select(&c, name.reference()).with_body_clause(name);

    assert_eq!(
        sql(&model),
        "SELECT [t0].[Name] AS [value] FROM [CookTable] AS [t0]"
    );
}

#[test]
fn conditional_projection() {
    let c = cooks();
    let model = select(
        &c,
        Expr::conditional(
            c.reference().field("IsFullTimeCook", Type::Bool),
            c.reference().field("Name", Type::String),
            Expr::constant("part time"),
        ),
    );

    let command = assert_ok!(translate(&model));
    assert_eq!(
        command.text,
        "SELECT CASE WHEN ([t0].[IsFullTimeCook] = 1) THEN [t0].[Name] ELSE @1 END AS [value] \
         FROM [CookTable] AS [t0]"
    );
}

#[test]
fn from_simple_sub_query_selects_table_directly() {
    let inner = select_all(&cooks());
    let x = sub_query("x", Type::entity("Cook"), inner);
    let model = select(&x, x.reference().field("Name", Type::String));

    assert_eq!(
        sql(&model),
        "SELECT [t0].[Name] AS [value] FROM [CookTable] AS [t0]"
    );
}

#[test]
fn member_of_sub_query_record() {
    let c = cooks();
    let inner = select(
        &c,
        Expr::new_record([
            ("Name", c.reference().field("Name", Type::String)),
            ("ID", c.reference().field("ID", Type::I32)),
        ]),
    )
    .with_result_operator(ResultOperator::Take(Expr::constant(5)));
    let x = sub_query("x", Type::Record, inner);
    let model = select(&x, x.reference().field("Name", Type::String));

    assert_eq!(
        sql(&model),
        "SELECT [q0].[Name] AS [value] \
         FROM (SELECT TOP (@1) [t1].[Name] AS [Name],[t1].[ID] AS [ID] FROM [CookTable] AS [t1]) AS [q0]"
    );
}

#[test]
fn entity_of_sub_query() {
    let c = cooks();
    let inner = select_all(&c)
        .with_body_clause(BodyClause::where_(c.reference().field("IsFullTimeCook", Type::Bool)));
    let x = sub_query("x", Type::entity("Cook"), inner);
    let model = select(&x, x.reference().field("Name", Type::String))
        .with_body_clause(BodyClause::where_(Expr::eq(
            x.reference().field("FirstName", Type::String),
            Expr::constant("Hugo"),
        )));

    assert_eq!(
        sql(&model),
        format!(
            "SELECT [q0].[Name] AS [value] FROM (SELECT {} FROM [CookTable] AS [t1] \
             WHERE ([t1].[IsFullTimeCook] = 1)) AS [q0] WHERE ([q0].[FirstName] = @1)",
            cook_columns("t1")
        )
    );
}

#[test]
fn first_or_default_entity_of_sub_query() {
    let k = kitchens();
    let first_cook = cooks_of_kitchen(&k)
        .with_result_operator(ResultOperator::First { or_default: true });
    let model = select(&k, Expr::sub_query(first_cook));

    let command = assert_ok!(translate(&model));
    assert_eq!(
        command.text,
        format!(
            "SELECT {} FROM [KitchenTable] AS [t1] \
             OUTER APPLY (SELECT TOP (1) {} FROM [CookTable] AS [t2] \
             WHERE ([t2].[KitchenID] = [t1].[ID])) AS [q0]",
            cook_columns("q0"),
            cook_columns("t2")
        )
    );
    assert_eq!(command.data_info, DataInfo::sequence(Type::entity("Cook")));
}

#[test]
fn first_entity_of_sub_query() {
    let k = kitchens();
    let first_cook =
        cooks_of_kitchen(&k).with_result_operator(ResultOperator::First { or_default: false });
    let model = select(&k, Expr::sub_query(first_cook));

    assert_eq!(
        sql(&model),
        format!(
            "SELECT {} FROM [KitchenTable] AS [t1] \
             CROSS APPLY (SELECT TOP (1) {} FROM [CookTable] AS [t2] \
             WHERE ([t2].[KitchenID] = [t1].[ID])) AS [q0]",
            cook_columns("q0"),
            cook_columns("t2")
        )
    );
}
