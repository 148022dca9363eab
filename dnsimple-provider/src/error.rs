use serde::{Deserialize, Serialize};

/// Unified error type for all DNSimple API operations.
///
/// Every variant is serializable for structured error reporting. None of the
/// variants ever carries the API token: messages come from the registrar's
/// response body or from the transport layer, never from request headers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The API token was rejected (HTTP 401).
    InvalidCredentials {
        /// Original error message from the registrar, if available.
        raw_message: Option<String>,
    },

    /// The referenced resource does not exist (HTTP 404).
    NotFound {
        /// Human-readable description of the missing resource.
        resource: String,
        /// Original error message from the registrar, if available.
        raw_message: Option<String>,
    },

    /// The registrar answered a well-formed request with a non-success status.
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Registrar-supplied message, or the raw body when it was not JSON.
        message: String,
    },

    /// Account discovery returned no usable account.
    AccountUnavailable {
        /// Why discovery failed.
        detail: String,
    },

    /// The registrar's response did not have the expected shape.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },
}

impl ProviderError {
    /// Whether this is expected behavior (bad input, missing resource, etc.), used for log levels.
    ///
    /// `true` should be logged at `warn`, `false` at `error`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. } | Self::NotFound { .. } | Self::ApiError { .. }
        )
    }

    /// HTTP status associated with this error, when one was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::InvalidCredentials { .. } => Some(401),
            Self::NotFound { .. } => Some(404),
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => write!(f, "Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "Request timeout: {detail}"),
            Self::InvalidCredentials { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Authentication failed (HTTP 401): {msg}")
                } else {
                    write!(f, "Authentication failed (HTTP 401)")
                }
            }
            Self::NotFound {
                resource,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "{resource} not found: {msg}")
                } else {
                    write!(f, "{resource} not found")
                }
            }
            Self::ApiError { status, message } => write!(f, "HTTP {status}: {message}"),
            Self::AccountUnavailable { detail } => {
                write!(f, "Account discovery failed: {detail}")
            }
            Self::ParseError { detail } => write!(f, "Unexpected response shape: {detail}"),
            Self::SerializationError { detail } => write!(f, "Serialization error: {detail}"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
