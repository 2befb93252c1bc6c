use super::Error;

/// Error when a query model breaks its own structural rules, such as an
/// expression referring to a query source that no clause defines.
#[derive(Debug)]
pub(super) struct InvalidQuery {
    message: Box<str>,
}

impl std::error::Error for InvalidQuery {}

impl core::fmt::Display for InvalidQuery {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid query: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid query error.
    pub fn invalid_query(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidQuery(InvalidQuery {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if the root cause of this error is an invalid query.
    pub fn is_invalid_query(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::InvalidQuery(_))
    }
}
