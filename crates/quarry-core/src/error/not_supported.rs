use super::Error;

/// Error when a construct cannot be translated.
///
/// This occurs when:
/// - An expression kind reaches the SQL generator that it cannot render
/// - A method call has no registered transformer, or an unsupported shape
/// - A result operator has no SQL counterpart
///
/// The message names the offending construct's text and kind.
#[derive(Debug)]
pub(super) struct NotSupported {
    message: Box<str>,
}

impl std::error::Error for NotSupported {}

impl core::fmt::Display for NotSupported {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error {
    /// Creates an unsupported construct error.
    pub fn not_supported(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::NotSupported(NotSupported {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if the root cause of this error is an unsupported
    /// construct.
    pub fn is_not_supported(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::NotSupported(_))
    }
}
