use std::fmt;
use thiserror::Error;

/// Error returned by signing operations.
///
/// Carries a [`ErrorKind`] for programmatic handling, a human-readable
/// message, and optionally the lower-level error that caused it.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// What went wrong, at the granularity callers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The requested signature version is not supported
    VersionUnsupported,

    /// A credential was found but cannot be used for signing
    CredentialInvalid,

    /// Endpoint is malformed (e.g. carries a protocol prefix)
    EndpointInvalid,

    /// The request carries no usable signing date
    DateInvalid,

    /// Request payload cannot be digested or described
    PayloadInvalid,

    /// The request itself cannot be signed (not presignable, no authority, ...)
    RequestInvalid,

    /// Unexpected errors (I/O, formatting, poisoned locks, etc.)
    Unexpected,
}

impl Error {
    /// Build an error of `kind` carrying `message`.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Attach the lower-level error that caused this one.
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Whether this error is about the credential rather than the request.
    pub fn is_credential_error(&self) -> bool {
        matches!(self.kind, ErrorKind::CredentialInvalid)
    }

    /// Shorthand for [`ErrorKind::VersionUnsupported`].
    pub fn version_unsupported(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::VersionUnsupported, message)
    }

    /// Shorthand for [`ErrorKind::CredentialInvalid`].
    pub fn credential_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CredentialInvalid, message)
    }

    /// Shorthand for [`ErrorKind::EndpointInvalid`].
    pub fn endpoint_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::EndpointInvalid, message)
    }

    /// Shorthand for [`ErrorKind::DateInvalid`].
    pub fn date_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DateInvalid, message)
    }

    /// Shorthand for [`ErrorKind::PayloadInvalid`].
    pub fn payload_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::PayloadInvalid, message)
    }

    /// Shorthand for [`ErrorKind::RequestInvalid`].
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Shorthand for [`ErrorKind::Unexpected`].
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::VersionUnsupported => "unsupported signature version",
            ErrorKind::CredentialInvalid => "invalid credentials",
            ErrorKind::EndpointInvalid => "invalid endpoint",
            ErrorKind::DateInvalid => "missing or invalid date",
            ErrorKind::PayloadInvalid => "invalid payload",
            ErrorKind::RequestInvalid => "invalid request",
            ErrorKind::Unexpected => "unexpected error",
        })
    }
}

/// `Result` specialized to this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::ToStrError> for Error {
    fn from(err: http::header::ToStrError) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUriParts> for Error {
    fn from(err: http::uri::InvalidUriParts) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_roundtrip() {
        let err = Error::date_invalid("request has no Date or x-amz-date header");
        assert_eq!(err.kind(), ErrorKind::DateInvalid);
        assert_eq!(err.to_string(), "request has no Date or x-amz-date header");
        assert!(!err.is_credential_error());
    }

    #[test]
    fn test_credential_error_check() {
        let err = Error::credential_invalid("secret key is empty");
        assert!(err.is_credential_error());
    }

    #[test]
    fn test_with_source_preserves_kind() {
        let inner = anyhow::anyhow!("underlying cause");
        let err = Error::request_invalid("cannot sign").with_source(inner);
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    }
}
