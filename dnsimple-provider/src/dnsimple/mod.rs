//! DNSimple v2 API client

mod api;
mod error;
mod http;

use std::fmt;

use reqwest::Client;

use crate::error::Result;
use crate::http_client::create_http_client;

/// Production API root.
pub const DNSIMPLE_API_BASE: &str = "https://api.dnsimple.com/v2";
/// Largest page size the list endpoints accept.
pub(crate) const MAX_PAGE_SIZE: u32 = 100;

/// DNSimple API client
///
/// Holds one HTTP client and the bearer token. Cheap to share behind an `Arc`.
pub struct DnsimpleClient {
    pub(crate) client: Client,
    pub(crate) api_token: String,
    pub(crate) base_url: String,
}

impl DnsimpleClient {
    /// Client for the production API.
    pub fn new(api_token: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_token, DNSIMPLE_API_BASE)
    }

    /// Client for an alternate API root (sandbox, test server).
    ///
    /// A trailing `/` on `base_url` is ignored.
    pub fn with_base_url(api_token: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let base_url: String = base_url.into();
        Ok(Self {
            client: create_http_client()?,
            api_token: api_token.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl fmt::Debug for DnsimpleClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DnsimpleClient")
            .field("base_url", &self.base_url)
            .field("api_token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}
