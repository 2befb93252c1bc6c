use super::Parameter;

use quarry_core::stmt::Value;
use std::fmt;

pub trait Params {
    fn push(&mut self, value: &Value) -> Placeholder;
}

/// Position of a bound parameter, starting at 1. Renders as `@n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder(pub usize);

impl Params for Vec<Parameter> {
    fn push(&mut self, value: &Value) -> Placeholder {
        let placeholder = Placeholder(self.len() + 1);
        self.push(Parameter {
            name: placeholder.to_string(),
            value: value.clone(),
        });
        placeholder
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}
