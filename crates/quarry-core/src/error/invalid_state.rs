use super::Error;

/// Error when the statement tree is in a state an earlier stage should have
/// ruled out.
///
/// This occurs when:
/// - An unresolved table info or expression reaches the generation stage
/// - A table info with a different item type is assigned to a table
/// - Re-entrant resolution does not reach a fixpoint
#[derive(Debug)]
pub(super) struct InvalidState {
    message: Box<str>,
}

impl std::error::Error for InvalidState {}

impl core::fmt::Display for InvalidState {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error {
    /// Creates an internal consistency error.
    pub fn invalid_state(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidState(InvalidState {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if the root cause of this error is an internal
    /// consistency violation.
    pub fn is_invalid_state(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::InvalidState(_))
    }
}
