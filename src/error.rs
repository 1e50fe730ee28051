//! Unified error type.

use std::fmt;

/// A boxed, thread-safe error. Request body errors are converted into this
/// before they reach [`Error`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The error type returned by chainware's fallible operations.
///
/// Application-level errors (401, 404, etc.) are expressed as HTTP
/// [`Response`](crate::Response) values, not as `Error`s. Composition itself
/// never fails. This type surfaces the one infrastructure failure left:
/// reading an incoming request body.
#[derive(Debug)]
pub struct Error(BoxError);

impl Error {
    pub(crate) fn body(e: impl Into<BoxError>) -> Self {
        Self(e.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "request body: {}", self.0)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&*self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn display_names_the_failing_stage() {
        let err = Error::body(std::io::Error::other("connection reset"));
        assert_eq!(err.to_string(), "request body: connection reset");
        assert!(err.source().is_some());
    }
}
