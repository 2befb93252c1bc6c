//! Translation of result operators, including the sub-statements they need
//! when applied after `TOP`, `DISTINCT` or grouping.

use tests::{model::*, *};

use pretty_assertions::assert_eq;
use quarry::{
    query::{BodyClause, Expr, Ordering, QueryModel, ResultOperator},
    stmt::{DataInfo, Type, Value},
};

fn cook_ids() -> QueryModel {
    select_cook_member("ID", Type::I32)
}

#[test]
fn count() {
    let command = assert_ok!(translate(
        &select_all(&cooks()).with_result_operator(ResultOperator::Count)
    ));

    assert_eq!(
        command.text,
        "SELECT COUNT(*) AS [value] FROM [CookTable] AS [t0]"
    );
    assert_eq!(command.data_info, DataInfo::scalar(Type::I32));
    assert_eq!(command.column_names, ["value"]);
}

#[test]
fn long_count() {
    let command = assert_ok!(translate(
        &select_all(&cooks()).with_result_operator(ResultOperator::LongCount)
    ));

    assert_eq!(
        command.text,
        "SELECT COUNT(*) AS [value] FROM [CookTable] AS [t0]"
    );
    assert_eq!(command.data_info, DataInfo::scalar(Type::I64));
}

#[test]
fn count_drops_ordering() {
    let c = cooks();
    let model = select_all(&c)
        .with_body_clause(BodyClause::order_by([Ordering::asc(
            c.reference().field("Name", Type::String),
        )]))
        .with_result_operator(ResultOperator::Count);

    assert_eq!(
        sql(&model),
        "SELECT COUNT(*) AS [value] FROM [CookTable] AS [t0]"
    );
}

#[test]
fn aggregates() {
    for (operator, function, ty) in [
        (ResultOperator::Sum, "SUM", Type::I32),
        (ResultOperator::Min, "MIN", Type::I32),
        (ResultOperator::Max, "MAX", Type::I32),
        (ResultOperator::Average, "AVG", Type::F64),
    ] {
        let command = assert_ok!(translate(&cook_ids().with_result_operator(operator)));

        assert_eq!(
            command.text,
            format!("SELECT {function}([t0].[ID]) AS [value] FROM [CookTable] AS [t0]")
        );
        assert_eq!(command.data_info, DataInfo::scalar(ty));
    }
}

#[test]
fn count_after_take() {
    let model = select_all(&cooks())
        .with_result_operator(ResultOperator::Take(Expr::constant(5)))
        .with_result_operator(ResultOperator::Count);

    let command = assert_ok!(translate(&model));
    assert_eq!(
        command.text,
        format!(
            "SELECT COUNT(*) AS [value] FROM (SELECT TOP (@1) {} FROM [CookTable] AS [t1]) AS [q0]",
            cook_columns("t1")
        )
    );
    assert_eq!(command.parameters[0].value, Value::from(5));
}

#[test]
fn sum_after_take() {
    let model = select_cook_member("KitchenID", Type::I32)
        .with_result_operator(ResultOperator::Take(Expr::constant(5)))
        .with_result_operator(ResultOperator::Sum);

    assert_eq!(
        sql(&model),
        "SELECT SUM([q0].[value]) AS [value] \
         FROM (SELECT TOP (@1) [t1].[KitchenID] AS [value] FROM [CookTable] AS [t1]) AS [q0]"
    );
}

#[test]
fn count_after_distinct() {
    let model = select_cook_member("Name", Type::String)
        .with_result_operator(ResultOperator::Distinct)
        .with_result_operator(ResultOperator::Count);

    assert_eq!(
        sql(&model),
        "SELECT COUNT(*) AS [value] \
         FROM (SELECT DISTINCT [t1].[Name] AS [value] FROM [CookTable] AS [t1]) AS [q0]"
    );
}

#[test]
fn take() {
    let command = assert_ok!(translate(
        &cook_ids().with_result_operator(ResultOperator::Take(Expr::constant(3)))
    ));

    assert_eq!(
        command.text,
        "SELECT TOP (@1) [t0].[ID] AS [value] FROM [CookTable] AS [t0]"
    );
    assert_eq!(command.data_info, DataInfo::sequence(Type::I32));
}

#[test]
fn take_keeps_ordering() {
    let c = cooks();
    let model = select(&c, c.reference().field("ID", Type::I32))
        .with_body_clause(BodyClause::order_by([Ordering::desc(
            c.reference().field("Name", Type::String),
        )]))
        .with_result_operator(ResultOperator::Take(Expr::constant(3)));

    assert_eq!(
        sql(&model),
        "SELECT TOP (@1) [t0].[ID] AS [value] FROM [CookTable] AS [t0] ORDER BY [t0].[Name] DESC"
    );
}

#[test]
fn take_after_take() {
    let model = cook_ids()
        .with_result_operator(ResultOperator::Take(Expr::constant(5)))
        .with_result_operator(ResultOperator::Take(Expr::constant(3)));

    let command = assert_ok!(translate(&model));
    assert_eq!(
        command.text,
        "SELECT TOP (@1) [q0].[value] AS [value] \
         FROM (SELECT TOP (@2) [t1].[ID] AS [value] FROM [CookTable] AS [t1]) AS [q0]"
    );
    assert_eq!(
        command
            .parameters
            .iter()
            .map(|parameter| parameter.value.clone())
            .collect::<Vec<_>>(),
        [Value::from(3), Value::from(5)]
    );
}

#[test]
fn distinct() {
    assert_eq!(
        sql(&select_cook_member("Name", Type::String).with_result_operator(ResultOperator::Distinct)),
        "SELECT DISTINCT [t0].[Name] AS [value] FROM [CookTable] AS [t0]"
    );
}

#[test]
fn first() {
    let command = assert_ok!(translate(
        &cook_ids().with_result_operator(ResultOperator::First { or_default: false })
    ));

    assert_eq!(
        command.text,
        "SELECT TOP (1) [t0].[ID] AS [value] FROM [CookTable] AS [t0]"
    );
    assert_eq!(
        command.data_info,
        DataInfo::First {
            item_type: Type::I32,
            or_default: false
        }
    );
}

#[test]
fn single_or_default() {
    let command = assert_ok!(translate(
        &cook_ids().with_result_operator(ResultOperator::Single { or_default: true })
    ));

    assert_eq!(
        command.text,
        "SELECT TOP (2) [t0].[ID] AS [value] FROM [CookTable] AS [t0]"
    );
    assert_eq!(
        command.data_info,
        DataInfo::Single {
            item_type: Type::I32,
            or_default: true
        }
    );
}

#[test]
fn any() {
    let command = assert_ok!(translate(
        &select_all(&cooks()).with_result_operator(ResultOperator::Any)
    ));

    assert_eq!(
        command.text,
        format!(
            "SELECT CASE WHEN EXISTS((SELECT {} FROM [CookTable] AS [t0])) THEN 1 ELSE 0 END AS [value]",
            cook_columns("t0")
        )
    );
    assert_eq!(command.data_info, DataInfo::scalar(Type::Bool));
}

#[test]
fn all() {
    let c = cooks();
    let model = select_all(&c).with_result_operator(ResultOperator::All(
        c.reference().field("IsFullTimeCook", Type::Bool),
    ));

    assert_eq!(
        sql(&model),
        format!(
            "SELECT CASE WHEN NOT EXISTS((SELECT {} FROM [CookTable] AS [t0] \
             WHERE NOT ([t0].[IsFullTimeCook] = 1))) THEN 1 ELSE 0 END AS [value]",
            cook_columns("t0")
        )
    );
}

#[test]
fn contains_value() {
    let command = assert_ok!(translate(
        &cook_ids().with_result_operator(ResultOperator::Contains(Expr::constant(5)))
    ));

    assert_eq!(
        command.text,
        "SELECT CASE WHEN (@1 IN (SELECT [t0].[ID] AS [value] FROM [CookTable] AS [t0])) \
         THEN 1 ELSE 0 END AS [value]"
    );
    assert_eq!(command.parameters[0].value, Value::from(5));
}

#[test]
fn contains_object() {
    let model = select_all(&cooks()).with_result_operator(ResultOperator::Contains(
        Expr::constant(Value::object("Cook", 7)),
    ));

    let command = assert_ok!(translate(&model));
    assert_eq!(
        command.text,
        "SELECT CASE WHEN (@1 IN (SELECT [t0].[ID] AS [value] FROM [CookTable] AS [t0])) \
         THEN 1 ELSE 0 END AS [value]"
    );
    assert_eq!(command.parameters[0].value, Value::from(7));
}

#[test]
fn default_if_empty() {
    let model = select_all(&cooks()).with_result_operator(ResultOperator::DefaultIfEmpty);

    assert_eq!(
        sql(&model),
        format!(
            "SELECT {} FROM (SELECT NULL AS [Empty]) AS [Empty] \
             OUTER APPLY (SELECT {} FROM [CookTable] AS [t1]) AS [q0]",
            cook_columns("q0"),
            cook_columns("t1")
        )
    );
}

#[test]
fn any_sub_query_in_where() {
    let k = kitchens();
    let c = from("c", "Cook");
    let cooks_of_kitchen = select_all(&c)
        .with_body_clause(BodyClause::where_(Expr::eq(
            c.reference().field("KitchenID", Type::I32),
            k.reference().field("ID", Type::I32),
        )))
        .with_result_operator(ResultOperator::Any);

    let model = select(&k, k.reference().field("Name", Type::String))
        .with_body_clause(BodyClause::where_(Expr::sub_query(cooks_of_kitchen)));

    assert_eq!(
        sql(&model),
        format!(
            "SELECT [t0].[Name] AS [value] FROM [KitchenTable] AS [t0] \
             WHERE EXISTS((SELECT {} FROM [CookTable] AS [t1] WHERE ([t1].[KitchenID] = [t0].[ID])))",
            cook_columns("t1")
        )
    );
}

#[test]
fn count_of_collection_in_projection() {
    let k = kitchens();
    let c = collection(&k, "c", "Cooks", "Cook");
    let count = select_all(&c).with_result_operator(ResultOperator::Count);

    let model = select(
        &k,
        Expr::new_record([
            ("Name", k.reference().field("Name", Type::String)),
            ("Cooks", Expr::sub_query(count)),
        ]),
    );

    assert_eq!(
        sql(&model),
        "SELECT [t0].[Name] AS [Name],\
         (SELECT COUNT(*) AS [value] FROM [CookTable] AS [t1] WHERE ([t0].[ID] = [t1].[KitchenID])) AS [Cooks] \
         FROM [KitchenTable] AS [t0]"
    );
}

#[test]
fn skip_is_not_supported() {
    let model = cook_ids().with_result_operator(ResultOperator::Skip(Expr::constant(5)));

    let err = assert_err!(translate(&model));
    assert!(err.is_not_supported());
    assert_eq!(
        err.to_string(),
        "The result operator 'Skip(5)' is not supported."
    );
}
