use failure::{Backtrace, Context, Fail};
use std::fmt;

/// The specific kind of error that can occur.
#[derive(Clone, Eq, PartialEq, Debug, Fail)]
pub enum ErrorKind {
    /// The client configuration is unusable (bad base url, missing keys).
    #[fail(display = "Configuration error: {}", _0)]
    Config(String),
    /// An argument was rejected before any request was sent.
    #[fail(display = "Invalid argument: {}", _0)]
    InvalidArgument(String),
    /// Building or sending the request failed. The transport error is kept as the cause.
    #[fail(display = "Request error")]
    Request,
    /// The API answered with a status outside of the 2xx range.
    #[fail(display = "Unexpected status {}: {}", status, message)]
    Status { status: u16, message: String },
    /// A serialization / deserialization error
    #[fail(display = "Serialization error: {}", _0)]
    SerdeError(String),
    /// An unknown error.
    #[fail(display = "An unknown error occurred.")]
    Unknown,
    /// Hints that destructuring should not be exhaustive.
    ///
    /// This enum may grow additional variants, so this makes sure clients
    /// don't count on exhaustive matching. (Otherwise, adding a new variant
    /// could break existing code.)
    #[doc(hidden)]
    #[fail(display = "Non exhaustive")]
    __Nonexhaustive,
}

/// An error that can occur while talking to Couchbase Cloud
#[derive(Debug)]
pub struct Error {
    inner: Context<ErrorKind>,
}

/// Result alias used by every operation of this crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Return the kind of this error.
    pub fn kind(&self) -> &ErrorKind {
        self.inner.get_context()
    }

    /// The HTTP status code, when the error came from a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        match self.kind() {
            ErrorKind::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl Fail for Error {
    fn cause(&self) -> Option<&dyn Fail> {
        self.inner.cause()
    }

    fn backtrace(&self) -> Option<&Backtrace> {
        self.inner.backtrace()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Context::new(kind),
        }
    }
}

impl From<Context<ErrorKind>> for Error {
    fn from(inner: Context<ErrorKind>) -> Error {
        Error { inner }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Error {
        err.context(ErrorKind::Request).into()
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        ErrorKind::SerdeError(err.to_string()).into()
    }
}
