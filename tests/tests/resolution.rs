//! Mapping resolution limits, translator configuration and the errors a
//! translation reports.

use tests::{model::*, *};

use pretty_assertions::assert_eq;
use quarry::{
    query::{Expr, ResultOperator},
    stmt::Type,
    Translator,
};

fn translator_with_passes<R: quarry::MappingResolver + 'static>(
    resolver: R,
    passes: usize,
) -> Translator {
    let mut builder = Translator::builder();
    builder.max_resolution_passes(passes);
    assert_ok!(builder.build(resolver))
}

#[test]
fn join_that_never_resolves() {
    let model = select_cook_member("Loop", Type::entity("Kitchen"));

    let err = assert_err!(translate(&model));
    assert!(err.is_invalid_state());
    assert_eq!(
        err.to_string(),
        "resolution of JOIN([t0].Loop) did not converge after 16 passes"
    );
}

#[test]
fn table_resolved_within_pass_limit() {
    let translator = translator_with_passes(Flaky::new(Restaurant, 2), 3);

    assert_eq!(
        assert_ok!(translator.translate(&select_cook_member("Name", Type::String))).text,
        "SELECT [t0].[Name] AS [value] FROM [CookTable] AS [t0]"
    );
}

#[test]
fn table_not_resolved_within_pass_limit() {
    let translator = translator_with_passes(Flaky::new(Restaurant, 3), 3);

    let err = assert_err!(translator.translate(&select_cook_member("Name", Type::String)));
    assert!(err.is_invalid_state());
    assert_eq!(
        err.to_string(),
        "resolution of TABLE(Cook) did not converge after 3 passes"
    );
}

#[test]
fn table_never_resolved() {
    let translator = translator_for(Flaky::never(Restaurant));

    let err = assert_err!(translator.translate(&select_all(&cooks())));
    assert!(err.is_invalid_state());
}

#[test]
fn zero_resolution_passes_are_rejected() {
    let mut builder = Translator::builder();
    builder.max_resolution_passes(0);

    assert_err_msg!(
        builder.build(Restaurant),
        "max_resolution_passes must be at least 1"
    );
}

#[test]
fn custom_alias_prefixes() {
    let translator = {
        let mut builder = Translator::builder();
        builder.alias_prefixes("tab", "sub");
        assert_ok!(builder.build(Restaurant))
    };

    let model = select_cook_member("KitchenID", Type::I32)
        .with_result_operator(ResultOperator::Take(Expr::constant(5)))
        .with_result_operator(ResultOperator::Sum);

    assert_eq!(
        assert_ok!(translator.translate(&model)).text,
        "SELECT SUM([sub0].[value]) AS [value] \
         FROM (SELECT TOP (@1) [tab1].[KitchenID] AS [value] FROM [CookTable] AS [tab1]) AS [sub0]"
    );
}

#[test]
fn translator_is_reusable() {
    let translator = translator();
    let model = select_cook_member("Name", Type::String);

    let first = assert_ok!(translator.translate(&model));
    let second = assert_ok!(translator.translate(&model));

    assert_eq!(first.text, second.text);
    assert_eq!(
        second.text,
        "SELECT [t0].[Name] AS [value] FROM [CookTable] AS [t0]"
    );
}

#[test]
fn translator_is_shared_across_threads() {
    let translator = translator();

    std::thread::scope(|scope| {
        let handles: Vec<_> = ["Name", "FirstName"]
            .into_iter()
            .map(|member| {
                let translator = &translator;
                scope.spawn(move || {
                    translator
                        .translate(&select_cook_member(member, Type::String))
                        .map(|command| command.text)
                })
            })
            .collect();

        let texts: Vec<_> = handles
            .into_iter()
            .map(|handle| assert_ok!(handle.join().unwrap()))
            .collect();

        assert_eq!(
            texts,
            [
                "SELECT [t0].[Name] AS [value] FROM [CookTable] AS [t0]",
                "SELECT [t0].[FirstName] AS [value] FROM [CookTable] AS [t0]",
            ]
        );
    });
}

#[test]
fn unknown_query_source() {
    let c = cooks();
    let k = kitchens();
    let model = select(&c, k.reference().field("Name", Type::String));

    let err = assert_err!(translate(&model));
    assert!(err.is_invalid_query());
    assert!(err.to_string().contains("unknown query source"));
    assert!(err.to_string().ends_with("'k'"));
}

#[test]
fn unmapped_type() {
    let w = from("w", "Waiter");

    assert_err_msg!(translate(&select_all(&w)), "type 'Waiter' is not mapped");
}

#[test]
fn unmapped_member() {
    assert_err_msg!(
        translate(&select_cook_member("Salary", Type::I32)),
        "member 'Cook.Salary' is not mapped"
    );
}

#[test]
fn member_of_single_entity_sub_query() {
    let k = kitchens();
    let only_cook =
        cooks_of_kitchen(&k).with_result_operator(ResultOperator::Single { or_default: true });
    let model = select(&k, Expr::sub_query(only_cook).field("Name", Type::String));

    assert_eq!(
        sql(&model),
        format!(
            "SELECT [q0].[Name] AS [value] FROM [KitchenTable] AS [t1] \
             OUTER APPLY (SELECT TOP (2) {} FROM [CookTable] AS [t2] \
             WHERE ([t2].[KitchenID] = [t1].[ID])) AS [q0]",
            cook_columns("t2")
        )
    );
}
