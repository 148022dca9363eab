//! DNSimple error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::DnsimpleClient;

/// DNSimple reports failures through HTTP status alone; the body carries a
/// `message` and sometimes per-field `errors`.
/// Reference: <https://developer.dnsimple.com/v2/#response-codes>
impl ProviderErrorMapper for DnsimpleClient {
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.status {
            401 => ProviderError::InvalidCredentials {
                raw_message: Some(raw.message),
            },
            404 => ProviderError::NotFound {
                resource: context.describe(),
                raw_message: Some(raw.message),
            },
            status => ProviderError::ApiError {
                status,
                message: raw.message,
            },
        }
    }
}
