use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq)]
pub enum UnaryOp {
    /// Logical negation for booleans, bitwise complement otherwise
    Not,

    /// Arithmetic negation
    Negate,

    /// Unary plus
    Plus,

    /// Numeric widening or conversion, which has no SQL token
    Convert,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Not => "!".fmt(f),
            UnaryOp::Negate => "-".fmt(f),
            UnaryOp::Plus => "+".fmt(f),
            UnaryOp::Convert => "convert".fmt(f),
        }
    }
}

impl fmt::Debug for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
