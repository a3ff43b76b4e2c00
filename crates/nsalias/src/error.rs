use std::fmt::{self, Display};

///
/// Error
///
/// Public error envelope returned by every fallible operation in this crate.
/// Module-level errors convert into it via `From`, carrying their rendered
/// message and a stable code.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for Error {}

impl Error {
    #[must_use]
    pub const fn new(code: ErrorCode, message: String) -> Self {
        Self { code, message }
    }

    /// Target-namespace bytes unreachable.
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Fetch, message.into())
    }

    /// Broken invariant or impossible state.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, message.into())
    }

    /// Malformed input (names, namespaces, configuration).
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message.into())
    }

    /// Out-of-scope request the delegate could not satisfy.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message.into())
    }

    /// Bytes are not a well-formed unit container.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Parse, message.into())
    }
}

///
/// ErrorCode
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
#[remain::sorted]
pub enum ErrorCode {
    Fetch,
    Internal,
    InvalidInput,
    NotFound,
    Parse,
}

///
/// TESTS
///
