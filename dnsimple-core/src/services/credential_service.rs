//! Credential resolution

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::traits::{SecretSource, TokenCache};
use crate::types::{ApiToken, CredentialSource, ResolvedToken, SecretItem};

/// Environment variable holding the token.
pub const TOKEN_ENV_VAR: &str = "DNSIMPLE_API_TOKEN";
/// Secret manager item title tried first.
pub const SECRET_ITEM_TITLE: &str = "DNSimple";
/// Secret manager URL host tried second.
pub const SECRET_ITEM_HOST: &str = "dnsimple.com";
/// Field labels that may hold the token, in lookup order.
pub const SECRET_FIELD_NAMES: [&str; 4] = ["access token", "api_token", "token", "api token"];

/// Resolves the API token from, in order: the environment, the secret
/// manager, the local cache.
///
/// A secret manager hit is written to the cache so later runs skip the
/// secret manager.
pub struct CredentialResolver {
    env_token: Option<String>,
    secret_source: Option<Arc<dyn SecretSource>>,
    cache: Option<Arc<dyn TokenCache>>,
}

impl CredentialResolver {
    /// # Arguments
    /// * `env_token` - value of [`TOKEN_ENV_VAR`], if set
    #[must_use]
    pub fn new(env_token: Option<String>) -> Self {
        Self {
            env_token,
            secret_source: None,
            cache: None,
        }
    }

    #[must_use]
    pub fn with_secret_source(mut self, source: Arc<dyn SecretSource>) -> Self {
        self.secret_source = Some(source);
        self
    }

    #[must_use]
    pub fn with_cache(mut self, cache: Arc<dyn TokenCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Resolve the token; fails with `CredentialError` when no source has one.
    pub async fn resolve_token(&self) -> CoreResult<ResolvedToken> {
        if let Some(token) = self.env_token.as_deref().and_then(ApiToken::new) {
            return Ok(ResolvedToken {
                token,
                source: CredentialSource::Environment,
            });
        }

        if let Some(token) = self.from_secret_manager().await {
            self.remember(&token).await;
            return Ok(ResolvedToken {
                token,
                source: CredentialSource::SecretManager,
            });
        }

        if let Some(cache) = &self.cache {
            match cache.load().await {
                Ok(Some(token)) => {
                    return Ok(ResolvedToken {
                        token,
                        source: CredentialSource::Cache,
                    });
                }
                Ok(None) => {}
                Err(e) => log::warn!("Token cache unreadable: {e}"),
            }
        }

        Err(CoreError::CredentialError(format!(
            "no DNSimple API token found; set {TOKEN_ENV_VAR} or store the token in 1Password \
             as an item titled '{SECRET_ITEM_TITLE}'"
        )))
    }

    async fn from_secret_manager(&self) -> Option<ApiToken> {
        let source = self.secret_source.as_ref()?;
        if !source.is_available() {
            log::debug!("Secret manager not available, skipping");
            return None;
        }

        let items = [
            SecretItem::Title(SECRET_ITEM_TITLE.to_string()),
            SecretItem::UrlHost(SECRET_ITEM_HOST.to_string()),
        ];
        for item in &items {
            for field in SECRET_FIELD_NAMES {
                match source.read_field(item, field).await {
                    Ok(Some(value)) => {
                        if let Some(token) = ApiToken::new(value) {
                            log::debug!("Found token in {item}, field '{field}'");
                            return Some(token);
                        }
                    }
                    Ok(None) => {}
                    Err(e) => {
                        log::warn!("Secret manager lookup failed for {item}: {e}");
                        break;
                    }
                }
            }
        }
        None
    }

    async fn remember(&self, token: &ApiToken) {
        let Some(cache) = &self.cache else {
            return;
        };
        if let Err(e) = cache.store(token).await {
            log::warn!("Failed to cache token: {e}");
        }
    }
}
