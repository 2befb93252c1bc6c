//! The query model: the canonical form of one language-integrated query, as
//! handed over by the front-end parser.

mod clause;
pub use clause::{
    BodyClause, FromClause, GroupClause, JoinClause, LetClause, OrderByClause, Ordering,
    SelectClause, SelectOrGroupClause, WhereClause,
};

mod expr;
pub use expr::{
    Expr, ExprBinary, ExprConditional, ExprConvert, ExprMember, ExprMethodCall, ExprNew,
    ExprUnary, QuerySourceRef,
};

mod model;
pub use model::QueryModel;

mod result_operator;
pub use result_operator::ResultOperator;

mod source;
pub use source::QuerySourceId;

pub mod visit;
pub use visit::Visit;
