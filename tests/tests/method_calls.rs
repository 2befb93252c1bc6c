use tests::{model::*, *};

use pretty_assertions::assert_eq;
use quarry::{
    query::{BodyClause, Expr, QueryModel},
    stmt::{self, ExprMethodCall, Method, Type, Value},
    Translator,
};

fn cooks_where(predicate: impl FnOnce(Expr) -> Expr) -> QueryModel {
    let c = cooks();
    let predicate = predicate(c.reference());
    select(&c, c.reference().field("ID", Type::I32))
        .with_body_clause(BodyClause::where_(predicate))
}

fn name(c: Expr) -> Expr {
    c.field("Name", Type::String)
}

fn call(method: Method, instance: Option<Expr>, args: Vec<Expr>, ty: Type) -> Expr {
    Expr::method_call(method, instance, args, ty)
}

fn names(values: &[&str]) -> Expr {
    Expr::constant(Value::list_from_vec(
        values.iter().copied().map(Value::from).collect(),
    ))
}

#[test]
fn string_contains() {
    let model = cooks_where(|c| {
        call(
            Method::instance("String", "Contains"),
            Some(name(c)),
            vec![Expr::constant("ug")],
            Type::Bool,
        )
    });

    let command = assert_ok!(translate(&model));
    assert_eq!(
        command.text,
        "SELECT [t0].[ID] AS [value] FROM [CookTable] AS [t0] \
         WHERE (CHARINDEX(@1, [t0].[Name]) > 0)"
    );
    assert_eq!(command.parameters[0].value, Value::from("ug"));
}

#[test]
fn list_contains() {
    let model = cooks_where(|c| {
        call(
            Method::instance("List", "Contains"),
            Some(names(&["Hugo", "Hans"])),
            vec![name(c)],
            Type::Bool,
        )
    });

    let command = assert_ok!(translate(&model));
    assert_eq!(
        command.text,
        "SELECT [t0].[ID] AS [value] FROM [CookTable] AS [t0] WHERE ([t0].[Name] IN (@1, @2))"
    );
    assert_eq!(
        command
            .parameters
            .iter()
            .map(|parameter| parameter.value.clone())
            .collect::<Vec<_>>(),
        [Value::from("Hugo"), Value::from("Hans")]
    );
}

#[test]
fn static_contains() {
    let model = cooks_where(|c| {
        call(
            Method::static_("Enumerable", "Contains"),
            None,
            vec![names(&["Hugo"]), name(c)],
            Type::Bool,
        )
    });

    assert_eq!(
        sql(&model),
        "SELECT [t0].[ID] AS [value] FROM [CookTable] AS [t0] WHERE ([t0].[Name] IN (@1))"
    );
}

#[test]
fn contains_on_empty_list() {
    let model = cooks_where(|c| {
        call(
            Method::instance("List", "Contains"),
            Some(names(&[])),
            vec![name(c)],
            Type::Bool,
        )
    });

    let command = assert_ok!(translate(&model));
    assert_eq!(
        command.text,
        "SELECT [t0].[ID] AS [value] FROM [CookTable] AS [t0] \
         WHERE ([t0].[Name] IN (SELECT NULL WHERE 1 = 0))"
    );
    assert!(command.parameters.is_empty());
}

#[test]
fn equals() {
    let instance = cooks_where(|c| {
        call(
            Method::instance("String", "Equals"),
            Some(name(c)),
            vec![Expr::constant("Hugo")],
            Type::Bool,
        )
    });
    assert_eq!(
        sql(&instance),
        "SELECT [t0].[ID] AS [value] FROM [CookTable] AS [t0] WHERE ([t0].[Name] = @1)"
    );

    let static_ = cooks_where(|c| {
        call(
            Method::static_("String", "Equals"),
            None,
            vec![c.clone().field("FirstName", Type::String), name(c)],
            Type::Bool,
        )
    });
    assert_eq!(
        sql(&static_),
        "SELECT [t0].[ID] AS [value] FROM [CookTable] AS [t0] \
         WHERE ([t0].[FirstName] = [t0].[Name])"
    );
}

#[test]
fn equals_as_value() {
    let c = cooks();
    let model = select(
        &c,
        call(
            Method::instance("String", "Equals"),
            Some(name(c.reference())),
            vec![Expr::constant("Hugo")],
            Type::Bool,
        ),
    );

    assert_eq!(
        sql(&model),
        "SELECT CASE WHEN ([t0].[Name] = @1) THEN 1 ELSE 0 END AS [value] FROM [CookTable] AS [t0]"
    );
}

#[test]
fn string_case() {
    for (method, function) in [("ToUpper", "UPPER"), ("ToLower", "LOWER")] {
        let c = cooks();
        let model = select(
            &c,
            call(
                Method::instance("String", method),
                Some(name(c.reference())),
                vec![],
                Type::String,
            ),
        );

        assert_eq!(
            sql(&model),
            format!("SELECT {function}([t0].[Name]) AS [value] FROM [CookTable] AS [t0]")
        );
    }
}

#[test]
fn custom_transformer() {
    let translator = {
        let mut builder = Translator::builder();
        builder.method_call_transformer("Trim", |call: ExprMethodCall| match call.instance {
            Some(instance) => Ok(stmt::Expr::func(
                "LTRIM",
                vec![stmt::Expr::func("RTRIM", vec![*instance], Type::String)],
                Type::String,
            )),
            None => Err(quarry::Error::not_supported("static Trim")),
        });
        assert_ok!(builder.build(Restaurant))
    };

    let c = cooks();
    let model = select(
        &c,
        call(
            Method::instance("String", "Trim"),
            Some(name(c.reference())),
            vec![],
            Type::String,
        ),
    );

    assert_eq!(
        assert_ok!(translator.translate(&model)).text,
        "SELECT LTRIM(RTRIM([t0].[Name])) AS [value] FROM [CookTable] AS [t0]"
    );
}

#[test]
fn custom_transformer_replaces_built_in() {
    let translator = {
        let mut builder = Translator::builder();
        builder.method_call_transformer("ToUpper", |call: ExprMethodCall| {
            Ok(stmt::Expr::func("UPPERCASE", call.instance.into_iter().map(|e| *e).collect(), call.ty))
        });
        assert_ok!(builder.build(Restaurant))
    };

    let c = cooks();
    let model = select(
        &c,
        call(
            Method::instance("String", "ToUpper"),
            Some(name(c.reference())),
            vec![],
            Type::String,
        ),
    );

    assert_eq!(
        assert_ok!(translator.translate(&model)).text,
        "SELECT UPPERCASE([t0].[Name]) AS [value] FROM [CookTable] AS [t0]"
    );
}

#[test]
fn unregistered_method() {
    let c = cooks();
    let model = select(
        &c,
        call(
            Method::instance("String", "Trim"),
            Some(name(c.reference())),
            vec![],
            Type::String,
        ),
    );

    let err = assert_err!(translate(&model));
    assert!(err.is_not_supported());
    assert_eq!(
        err.to_string(),
        "The method 'String.Trim' is not supported by this code generator, \
         and no custom transformer has been registered."
    );
}

#[test]
fn unsupported_arity() {
    let model = cooks_where(|c| {
        call(
            Method::static_("String", "Equals"),
            None,
            vec![name(c.clone()), Expr::constant("Hugo"), name(c)],
            Type::Bool,
        )
    });

    let err = assert_err!(translate(&model));
    assert!(err.is_not_supported());
    assert_eq!(
        err.to_string(),
        "Equals function with 3 arguments is not supported."
    );
}

#[test]
fn instance_call_with_static_arguments() {
    let model = cooks_where(|c| {
        call(
            Method::instance("String", "Equals"),
            Some(name(c.clone())),
            vec![Expr::constant("Hugo"), name(c)],
            Type::Bool,
        )
    });

    let err = assert_err!(translate(&model));
    assert!(err.is_not_supported());
    assert_eq!(
        err.to_string(),
        "Equals function with 2 arguments is not supported as an instance call; \
         that form takes 1 argument."
    );
}
