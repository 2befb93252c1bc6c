use super::TypeName;

use std::{fmt, sync::Arc};

/// A property of a domain type: a mapped column or a relation.
///
/// Members are compared by declaring type and name, which makes them usable
/// as keys for member-based joins.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Member {
    pub declaring_type: TypeName,
    pub name: Arc<str>,
}

impl Member {
    pub fn new(declaring_type: impl Into<TypeName>, name: impl AsRef<str>) -> Member {
        Member {
            declaring_type: declaring_type.into(),
            name: name.as_ref().into(),
        }
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.declaring_type, self.name)
    }
}

impl fmt::Debug for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// A method invoked from a query, identified by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Method {
    pub declaring_type: TypeName,
    pub name: Arc<str>,
    pub is_static: bool,
}

impl Method {
    pub fn instance(declaring_type: impl Into<TypeName>, name: impl AsRef<str>) -> Method {
        Method {
            declaring_type: declaring_type.into(),
            name: name.as_ref().into(),
            is_static: false,
        }
    }

    pub fn static_(declaring_type: impl Into<TypeName>, name: impl AsRef<str>) -> Method {
        Method {
            declaring_type: declaring_type.into(),
            name: name.as_ref().into(),
            is_static: true,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.declaring_type, self.name)
    }
}
