//! Secret manager abstraction Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::SecretItem;

/// Secret Manager Trait
///
/// Platform implementation:
/// - MCP server: `OnePasswordCli` (the `op` command-line tool)
#[async_trait]
pub trait SecretSource: Send + Sync {
    /// Whether the integration can be used in this environment (binary present, etc.).
    ///
    /// When `false` the resolver skips this source without calling `read_field`.
    fn is_available(&self) -> bool;

    /// Read one field of one item.
    ///
    /// # Returns
    /// * `Ok(Some(value))` - the item has a non-empty field with this label
    /// * `Ok(None)` - no such item or field
    /// * `Err(_)` - the secret manager itself failed
    async fn read_field(&self, item: &SecretItem, field: &str) -> CoreResult<Option<String>>;
}
