//! Registrar client factory

use std::sync::Arc;

use async_trait::async_trait;
use dnsimple_provider::{DnsimpleClient, RegistrarApi, DNSIMPLE_API_BASE};

use crate::error::{CoreError, CoreResult};
use crate::types::ApiToken;

/// Builds a registrar client once a token is known.
#[async_trait]
pub trait RegistrarConnector: Send + Sync {
    async fn connect(&self, token: &ApiToken) -> CoreResult<Arc<dyn RegistrarApi>>;
}

/// Connector for the real DNSimple API.
#[derive(Debug, Clone)]
pub struct DnsimpleConnector {
    base_url: String,
}

impl DnsimpleConnector {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for DnsimpleConnector {
    fn default() -> Self {
        Self::new(DNSIMPLE_API_BASE)
    }
}

#[async_trait]
impl RegistrarConnector for DnsimpleConnector {
    async fn connect(&self, token: &ApiToken) -> CoreResult<Arc<dyn RegistrarApi>> {
        let client = DnsimpleClient::with_base_url(token.expose(), self.base_url.as_str())
            .map_err(CoreError::from)?;
        Ok(Arc::new(client))
    }
}

/// Connector that hands out an already-built client, ignoring the token.
#[derive(Clone)]
pub struct StaticConnector {
    registrar: Arc<dyn RegistrarApi>,
}

impl StaticConnector {
    #[must_use]
    pub fn new(registrar: Arc<dyn RegistrarApi>) -> Self {
        Self { registrar }
    }
}

#[async_trait]
impl RegistrarConnector for StaticConnector {
    async fn connect(&self, _token: &ApiToken) -> CoreResult<Arc<dyn RegistrarApi>> {
        Ok(Arc::clone(&self.registrar))
    }
}
