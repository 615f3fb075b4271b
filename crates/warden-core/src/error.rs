//! Error types for Warden.
//!
//! Every crate in the workspace shares this error so that a gated service
//! and the service it wraps return the same type. Errors produced by a
//! wrapped service pass through a gate untouched.

use std::fmt;
use std::path::{Path, PathBuf};

/// Result type alias for Warden operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Warden services.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// No authorizer was attached to the request context.
    #[error("authorizer not found on request context")]
    MissingAuthorizer,

    /// The caller's permissions do not cover the required permission.
    #[error("{permission} is unauthorized")]
    Forbidden {
        /// Text form of the permission that was required
        permission: String,
    },

    /// Malformed input (identifiers, permission strings, ...)
    #[error("Invalid input: {message}")]
    Invalid {
        /// What was wrong with the input
        message: String,
    },

    /// A referenced entity does not exist.
    #[error("Not found: {message}")]
    NotFound {
        /// What could not be found
        message: String,
    },

    /// Failure inside a backing service.
    #[error("Internal error: {message}")]
    Internal {
        /// Human-readable error message
        message: String,
        /// Source error if available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error with the path that caused it
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// TOML parse error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Coarse classification of an [`Error`], for mapping onto outer protocols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Caller identity is missing.
    Unauthorized,
    /// Caller identity is present but lacks permission.
    Forbidden,
    /// Request input was malformed.
    Invalid,
    /// Referenced entity does not exist.
    NotFound,
    /// Server-side failure.
    Internal,
}

impl ErrorCode {
    /// Stable string name of the code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::Invalid => "invalid",
            Self::NotFound => "not found",
            Self::Internal => "internal error",
        }
    }

    /// HTTP status an outer layer would most likely answer with.
    pub fn http_status(&self) -> u16 {
        match self {
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::Invalid => 400,
            Self::NotFound => 404,
            Self::Internal => 500,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Error {
    /// Classify this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::MissingAuthorizer => ErrorCode::Unauthorized,
            Error::Forbidden { .. } => ErrorCode::Forbidden,
            Error::Invalid { .. } => ErrorCode::Invalid,
            Error::NotFound { .. } => ErrorCode::NotFound,
            Error::Internal { .. } | Error::Config { .. } | Error::Io { .. } | Error::Toml(_) => {
                ErrorCode::Internal
            }
        }
    }

    /// Whether the caller is at fault (4xx) rather than the server (5xx).
    pub fn is_client_error(&self) -> bool {
        !matches!(self.code(), ErrorCode::Internal)
    }

    /// Whether this is one of the two authorization failures.
    pub fn is_authorization_error(&self) -> bool {
        matches!(self, Error::MissingAuthorizer | Error::Forbidden { .. })
    }

    /// Returns whether retrying the same call could succeed.
    ///
    /// The permission set attached to a request cannot change while the
    /// request is in flight, so authorization failures never are.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Internal { .. } => true,
            Error::Io { .. } => true,
            Error::MissingAuthorizer => false,
            Error::Forbidden { .. } => false,
            Error::Invalid { .. } => false,
            Error::NotFound { .. } => false,
            Error::Config { .. } => false,
            Error::Toml(_) => false,
        }
    }

    /// Creates a forbidden error for the given permission.
    pub fn forbidden(permission: impl fmt::Display) -> Self {
        Error::Forbidden {
            permission: permission.to_string(),
        }
    }

    /// Creates a new invalid-input error.
    pub fn invalid<S: Into<String>>(message: S) -> Self {
        Error::Invalid {
            message: message.into(),
        }
    }

    /// Creates a new not-found error.
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Error::NotFound {
            message: message.into(),
        }
    }

    /// Creates a new internal error with a message.
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Error::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new internal error with a message and source error.
    pub fn internal_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Internal {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path it happened on.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
