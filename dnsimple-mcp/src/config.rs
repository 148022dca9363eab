//! Server configuration from the process environment.

use std::path::PathBuf;

use anyhow::{bail, Context};
use dnsimple_core::services::TOKEN_ENV_VAR;
use dnsimple_provider::DNSIMPLE_API_BASE;

pub const API_BASE_ENV_VAR: &str = "DNSIMPLE_API_BASE";
pub const CONFIG_DIR_ENV_VAR: &str = "DNSIMPLE_MCP_CONFIG_DIR";
pub const OP_BINARY_ENV_VAR: &str = "DNSIMPLE_MCP_OP_BINARY";

const CONFIG_DIR_NAME: &str = "dnsimple-mcp";
const DEFAULT_OP_BINARY: &str = "op";

/// Settings the MCP host passes through the environment block.
#[derive(Clone)]
pub struct McpConfig {
    /// Raw value of `DNSIMPLE_API_TOKEN`
    pub env_token: Option<String>,
    pub api_base: String,
    /// Directory holding the token cache file
    pub config_dir: PathBuf,
    pub op_binary: PathBuf,
}

impl std::fmt::Debug for McpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("McpConfig")
            .field("env_token", &self.env_token.as_ref().map(|_| "[REDACTED]"))
            .field("api_base", &self.api_base)
            .field("config_dir", &self.config_dir)
            .field("op_binary", &self.op_binary)
            .finish()
    }
}

impl McpConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_base = get(API_BASE_ENV_VAR)
            .map_or_else(|| DNSIMPLE_API_BASE.to_string(), |v| v.trim().to_string());
        if !api_base.starts_with("https://") {
            bail!("{API_BASE_ENV_VAR} must be an https:// URL, got '{api_base}'");
        }

        let config_dir = match get(CONFIG_DIR_ENV_VAR) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::config_dir()
                .context("could not determine the user config directory; set DNSIMPLE_MCP_CONFIG_DIR")?
                .join(CONFIG_DIR_NAME),
        };

        let op_binary = get(OP_BINARY_ENV_VAR).map_or_else(|| PathBuf::from(DEFAULT_OP_BINARY), PathBuf::from);

        Ok(Self {
            env_token: get(TOKEN_ENV_VAR),
            api_base,
            config_dir,
            op_binary,
        })
    }
}
