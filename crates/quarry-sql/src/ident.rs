use std::fmt;

/// A bracket-quoted identifier. Closing brackets are doubled.
pub(crate) struct Ident<S>(pub(crate) S);

/// A possibly qualified name (`schema.dbo.Table`), each segment quoted.
pub(crate) struct QualifiedIdent<S>(pub(crate) S);

impl<S: AsRef<str>> fmt::Display for Ident<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, part) in self.0.as_ref().split(']').enumerate() {
            if i > 0 {
                f.write_str("]]")?;
            }
            f.write_str(part)?;
        }
        f.write_str("]")
    }
}

impl<S: AsRef<str>> fmt::Display for QualifiedIdent<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.as_ref().split('.').enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", Ident(segment))?;
        }
        Ok(())
    }
}
