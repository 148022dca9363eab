//! Token cache abstraction Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::ApiToken;

/// Local token cache
///
/// Implementations must restrict access to the owning user.
#[async_trait]
pub trait TokenCache: Send + Sync {
    /// Load the cached token; `Ok(None)` when nothing is cached.
    async fn load(&self) -> CoreResult<Option<ApiToken>>;

    /// Persist a token, replacing any previous one.
    async fn store(&self, token: &ApiToken) -> CoreResult<()>;
}
