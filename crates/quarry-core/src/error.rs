mod adhoc;
mod invalid_query;
mod invalid_state;
mod not_supported;

use adhoc::AdhocError;
use invalid_query::InvalidQuery;
use invalid_state::InvalidState;
use not_supported::NotSupported;

use std::{fmt, sync::Arc};

/// Returns early with an ad-hoc error built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::err!($($arg)*))
    };
}

/// Creates an ad-hoc error from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur while translating a query.
///
/// Translation failures are never recoverable: any error aborts the whole
/// translation and no partial SQL is produced.
///
/// The error is one pointer wide. Context added with [`Error::context`] is
/// shown before the failure it describes, separated by `": "`.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,

    /// The failure this error adds context to
    cause: Option<Error>,
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    NotSupported(NotSupported),
    InvalidState(InvalidState),
    InvalidQuery(InvalidQuery),

    /// Wraps another error used as context for the cause
    Context(Error),
}

impl Error {
    /// Describes this error with `context`, which is displayed first.
    pub fn context(self, context: impl Into<Error>) -> Error {
        Error {
            inner: Arc::new(ErrorInner {
                kind: ErrorKind::Context(context.into()),
                cause: Some(self),
            }),
        }
    }

    /// Returns the message of the failure itself, without any context.
    pub fn root_message(&self) -> String {
        self.root().kind().to_string()
    }

    fn causes(&self) -> Causes<'_> {
        Causes { next: Some(self) }
    }

    fn root(&self) -> &Error {
        let mut root = self;
        while let Some(cause) = &root.inner.cause {
            root = cause;
        }
        root
    }

    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

struct Causes<'a> {
    next: Option<&'a Error>,
}

impl<'a> Iterator for Causes<'a> {
    type Item = &'a Error;

    fn next(&mut self) -> Option<&'a Error> {
        let err = self.next.take()?;
        self.next = err.inner.cause.as_ref();
        Some(err)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match (&self.inner.cause, self.kind()) {
            (Some(cause), _) => Some(cause),
            (None, ErrorKind::Anyhow(err)) => Some(err.as_ref()),
            (None, _) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.causes().enumerate() {
            if i > 0 {
                f.write_str(": ")?;
            }
            fmt::Display::fmt(err.kind(), f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.debug_list()
                .entries(self.causes().map(|err| err.kind()))
                .finish()
        } else {
            fmt::Display::fmt(self, f)
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Anyhow(err) => fmt::Display::fmt(err, f),
            ErrorKind::Adhoc(err) => fmt::Display::fmt(err, f),
            ErrorKind::NotSupported(err) => fmt::Display::fmt(err, f),
            ErrorKind::InvalidState(err) => fmt::Display::fmt(err, f),
            ErrorKind::InvalidQuery(err) => fmt::Display::fmt(err, f),
            ErrorKind::Context(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Arc::new(ErrorInner { kind, cause: None }),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}
