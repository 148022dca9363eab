//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use dnsimple_provider::ProviderError;

/// Core layer error type
///
/// `Display` renders `<category>: <detail>`; the dispatcher prefixes the
/// operation name. No variant ever carries the API token.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// No credential source yielded a token
    #[error("credential error: {0}")]
    CredentialError(String),

    /// Account discovery failed or found no usable account
    #[error("account error: {0}")]
    AccountError(String),

    /// Caller-supplied arguments are missing, malformed or out of range
    #[error("validation error: {0}")]
    ValidationError(String),

    /// Referenced domain or record does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// The registrar rejected a well-formed request, or could not be reached
    #[error("api error: {message}")]
    ApiError {
        /// HTTP status when the registrar answered
        status: Option<u16>,
        message: String,
    },

    /// No handler is registered under this name
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// Local token cache could not be read or written
    #[error("storage error: {0}")]
    StorageError(String),

    /// serialization error
    #[error("serialization error: {0}")]
    SerializationError(String),
}

impl CoreError {
    /// Whether it is expected behavior (caller input, missing resource, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ValidationError(_)
            | Self::NotFound(_)
            | Self::UnknownOperation(_)
            | Self::CredentialError(_) => true,
            Self::ApiError { status, .. } => status.is_some_and(|s| (400..500).contains(&s)),
            Self::AccountError(_) | Self::StorageError(_) | Self::SerializationError(_) => false,
        }
    }

    /// Short machine-readable category name.
    pub fn category(&self) -> &'static str {
        match self {
            Self::CredentialError(_) => "CredentialError",
            Self::AccountError(_) => "AccountError",
            Self::ValidationError(_) => "ValidationError",
            Self::NotFound(_) => "NotFoundError",
            Self::ApiError { .. } => "ApiError",
            Self::UnknownOperation(_) => "UnknownOperationError",
            Self::StorageError(_) => "StorageError",
            Self::SerializationError(_) => "SerializationError",
        }
    }
}

impl From<ProviderError> for CoreError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::NotFound { .. } => Self::NotFound(err.to_string()),
            ProviderError::AccountUnavailable { detail } => Self::AccountError(detail),
            ProviderError::SerializationError { detail } => Self::SerializationError(detail),
            other => Self::ApiError {
                status: other.status(),
                message: other.to_string(),
            },
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
