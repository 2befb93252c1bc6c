use super::Expr;

/// Gives an expression an output name: `expr AS [name]`. Without a name the
/// column is called `value`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprNamed {
    pub name: Option<String>,
    pub expr: Box<Expr>,
}

impl ExprNamed {
    pub const DEFAULT_NAME: &'static str = "value";

    pub fn output_name(&self) -> &str {
        self.name.as_deref().unwrap_or(Self::DEFAULT_NAME)
    }
}

impl Expr {
    pub fn named(name: Option<&str>, expr: impl Into<Expr>) -> Expr {
        ExprNamed {
            name: name.map(str::to_string),
            expr: Box::new(expr.into()),
        }
        .into()
    }

    /// Strips a name wrapper, if any.
    pub fn unwrap_named(&self) -> &Expr {
        match self {
            Expr::Named(named) => &named.expr,
            _ => self,
        }
    }
}

impl From<ExprNamed> for Expr {
    fn from(value: ExprNamed) -> Self {
        Expr::Named(value)
    }
}
