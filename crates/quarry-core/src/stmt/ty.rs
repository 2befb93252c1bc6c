use std::{fmt, sync::Arc};

/// Name of a domain type, as known to the mapping resolver.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeName(Arc<str>);

impl TypeName {
    pub fn new(name: impl AsRef<str>) -> TypeName {
        TypeName(name.as_ref().into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TypeName {
    fn from(value: &str) -> Self {
        TypeName::new(value)
    }
}

impl From<String> for TypeName {
    fn from(value: String) -> Self {
        TypeName(value.into())
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

/// Static type of an expression or a table's items.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Bool,
    I16,
    I32,
    I64,
    F64,
    Decimal,
    Char,
    String,
    DateTime,
    Guid,

    /// A mapped domain object
    Entity(TypeName),

    /// A sequence of items
    List(Box<Type>),

    /// A grouping of elements under a key
    Grouping { key: Box<Type>, element: Box<Type> },

    /// A projected anonymous record
    Record,
    /// Type of the `null` constant
    Null,
}

impl Type {
    pub fn entity(name: impl Into<TypeName>) -> Type {
        Type::Entity(name.into())
    }

    pub fn list(item: Type) -> Type {
        Type::List(Box::new(item))
    }

    pub fn grouping(key: Type, element: Type) -> Type {
        Type::Grouping {
            key: Box::new(key),
            element: Box::new(element),
        }
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Type::Bool)
    }

    pub fn is_entity(&self) -> bool {
        matches!(self, Type::Entity(_))
    }

    pub fn as_entity(&self) -> Option<&TypeName> {
        match self {
            Type::Entity(name) => Some(name),
            _ => None,
        }
    }

    /// Item type of a sequence type; any other type is its own item type.
    pub fn item_type(&self) -> &Type {
        match self {
            Type::List(item) => item,
            _ => self,
        }
    }

    /// The SQL Server type name used by `CONVERT`, if the type has one.
    pub fn sql_type_name(&self) -> Option<&'static str> {
        Some(match self {
            Type::Bool => "BIT",
            Type::I16 => "SMALLINT",
            Type::I32 => "INT",
            Type::I64 => "BIGINT",
            Type::F64 => "FLOAT",
            Type::Decimal => "DECIMAL",
            Type::Char => "CHAR",
            Type::String => "NVARCHAR(MAX)",
            Type::DateTime => "DATETIME",
            Type::Guid => "UNIQUEIDENTIFIER",
            Type::Entity(_)
            | Type::List(_)
            | Type::Grouping { .. }
            | Type::Record
            | Type::Null => return None,
        })
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Bool => f.write_str("Boolean"),
            Type::I16 => f.write_str("Int16"),
            Type::I32 => f.write_str("Int32"),
            Type::I64 => f.write_str("Int64"),
            Type::F64 => f.write_str("Double"),
            Type::Decimal => f.write_str("Decimal"),
            Type::Char => f.write_str("Char"),
            Type::String => f.write_str("String"),
            Type::DateTime => f.write_str("DateTime"),
            Type::Guid => f.write_str("Guid"),
            Type::Entity(name) => write!(f, "{name}"),
            Type::List(item) => write!(f, "IEnumerable<{item}>"),
            Type::Grouping { key, element } => write!(f, "IGrouping<{key}, {element}>"),
            Type::Record => f.write_str("Record"),
            Type::Null => f.write_str("Null"),
        }
    }
}

impl From<TypeName> for Type {
    fn from(value: TypeName) -> Self {
        Type::Entity(value)
    }
}
