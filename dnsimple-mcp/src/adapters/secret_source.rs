//! 1Password CLI secret source
//!
//! Shells out to `op`. Lookups by title use `op item get`; lookups by URL
//! host list items first and pick the first whose URL mentions the host.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use dnsimple_core::error::{CoreError, CoreResult};
use dnsimple_core::traits::SecretSource;
use dnsimple_core::types::SecretItem;
use serde::Deserialize;

/// Substrings `op` prints when an item or field simply does not exist.
const ABSENT_MARKERS: [&str; 3] = ["isn't an item", "isn't a field", "not found"];

#[derive(Debug, Deserialize)]
struct ListedItem {
    id: String,
    #[serde(default)]
    urls: Vec<ItemUrl>,
}

#[derive(Debug, Deserialize)]
struct ItemUrl {
    #[serde(default)]
    href: String,
}

/// Secret source backed by the 1Password command-line tool.
pub struct OnePasswordCli {
    binary: PathBuf,
}

impl OnePasswordCli {
    #[must_use]
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Run `op` and return stdout, `None` when `op` reports the item/field is absent.
    async fn run(&self, args: &[&str]) -> CoreResult<Option<String>> {
        let output = tokio::process::Command::new(&self.binary)
            .args(args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                CoreError::CredentialError(format!(
                    "failed to run {}: {e}",
                    self.binary.display()
                ))
            })?;

        if output.status.success() {
            return Ok(Some(String::from_utf8_lossy(&output.stdout).into_owned()));
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        if ABSENT_MARKERS.iter().any(|m| stderr.contains(m)) {
            return Ok(None);
        }
        Err(CoreError::CredentialError(format!(
            "1Password CLI exited with {}: {}",
            output.status,
            stderr.trim()
        )))
    }

    async fn item_id_for_host(&self, host: &str) -> CoreResult<Option<String>> {
        let Some(listing) = self.run(&["item", "list", "--format", "json"]).await? else {
            return Ok(None);
        };
        let items: Vec<ListedItem> = serde_json::from_str(&listing).map_err(|e| {
            CoreError::CredentialError(format!("unexpected 1Password item listing: {e}"))
        })?;
        Ok(items
            .into_iter()
            .find(|item| item.urls.iter().any(|u| u.href.contains(host)))
            .map(|item| item.id))
    }

    async fn field_of(&self, item: &str, field: &str) -> CoreResult<Option<String>> {
        let selector = format!("label={field}");
        let value = self
            .run(&["item", "get", item, "--fields", &selector, "--reveal"])
            .await?;
        Ok(value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty()))
    }
}

/// Whether `binary` resolves to an existing file, directly or through `PATH`.
fn is_executable_present(binary: &Path) -> bool {
    if binary.components().count() > 1 {
        return binary.is_file();
    }
    std::env::var_os("PATH")
        .is_some_and(|paths| std::env::split_paths(&paths).any(|dir| dir.join(binary).is_file()))
}

#[async_trait]
impl SecretSource for OnePasswordCli {
    fn is_available(&self) -> bool {
        is_executable_present(&self.binary)
    }

    async fn read_field(&self, item: &SecretItem, field: &str) -> CoreResult<Option<String>> {
        match item {
            SecretItem::Title(title) => self.field_of(title, field).await,
            SecretItem::UrlHost(host) => match self.item_id_for_host(host).await? {
                Some(id) => self.field_of(&id, field).await,
                None => Ok(None),
            },
        }
    }
}
