//! `.env`-file token cache
//!
//! Holds a single `DNSIMPLE_API_TOKEN=<token>` line in the server's config
//! directory. The file is owner read/write only.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use dnsimple_core::error::{CoreError, CoreResult};
use dnsimple_core::services::TOKEN_ENV_VAR;
use dnsimple_core::traits::TokenCache;
use dnsimple_core::types::ApiToken;
use tokio::io::AsyncWriteExt;

const CACHE_FILE_NAME: &str = ".env";
const MAX_CACHE_FILE_SIZE: u64 = 64 * 1024;

/// Token cache backed by `<config dir>/.env`.
pub struct FileTokenCache {
    path: PathBuf,
}

impl FileTokenCache {
    #[must_use]
    pub fn new(config_dir: &Path) -> Self {
        Self {
            path: config_dir.join(CACHE_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Find the token line, stripping one layer of matching quotes.
fn parse_token(content: &str) -> Option<ApiToken> {
    let prefix = format!("{TOKEN_ENV_VAR}=");
    content.lines().map(str::trim).find_map(|line| {
        let value = line.strip_prefix(&prefix)?.trim();
        let value = ['"', '\'']
            .into_iter()
            .find_map(|q| value.strip_prefix(q).and_then(|v| v.strip_suffix(q)))
            .unwrap_or(value);
        ApiToken::new(value)
    })
}

#[cfg(unix)]
async fn restrict_to_owner(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600)).await
}

#[cfg(not(unix))]
#[allow(clippy::unused_async)]
async fn restrict_to_owner(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

#[async_trait]
impl TokenCache for FileTokenCache {
    async fn load(&self) -> CoreResult<Option<ApiToken>> {
        let metadata = match tokio::fs::metadata(&self.path).await {
            Ok(m) => m,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No token cache at {}", self.path.display());
                return Ok(None);
            }
            Err(e) => {
                return Err(CoreError::StorageError(format!(
                    "failed to read {}: {e}",
                    self.path.display()
                )))
            }
        };

        if metadata.len() > MAX_CACHE_FILE_SIZE {
            return Err(CoreError::StorageError(format!(
                "{} is too large: {} bytes (max: {MAX_CACHE_FILE_SIZE} bytes)",
                self.path.display(),
                metadata.len()
            )));
        }

        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            CoreError::StorageError(format!("failed to read {}: {e}", self.path.display()))
        })?;
        Ok(parse_token(&content))
    }

    async fn store(&self, token: &ApiToken) -> CoreResult<()> {
        let storage_error =
            |e: std::io::Error| CoreError::StorageError(format!("failed to write {}: {e}", self.path.display()));

        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir).await.map_err(storage_error)?;
        }

        let mut options = tokio::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o600);

        let mut file = options.open(&self.path).await.map_err(storage_error)?;
        // An existing file keeps its old mode through open(); tighten it first.
        restrict_to_owner(&self.path).await.map_err(storage_error)?;

        let line = format!("{TOKEN_ENV_VAR}={}\n", token.expose());
        file.write_all(line.as_bytes()).await.map_err(storage_error)?;
        file.flush().await.map_err(storage_error)?;

        tracing::info!("Cached DNSimple API token in {}", self.path.display());
        Ok(())
    }
}
