use super::*;

use dnsimple_core::services::CredentialResolver;
use dnsimple_core::DnsimpleConnector;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_TOKEN: &str = "dnsimple_mcp_test_token_0123456789";
pub const ACCOUNT_ID: u64 = 1010;

/// A mock DNSimple API with `/whoami` already answering.
pub struct MockApi {
    pub server: MockServer,
}

impl MockApi {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/whoami"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"user": null, "account": {"id": ACCOUNT_ID, "email": "ops@example.com"}}
            })))
            .mount(&server)
            .await;
        Self { server }
    }

    /// `/v2/{ACCOUNT_ID}{tail}`
    pub fn account_path(tail: &str) -> String {
        format!("/v2/{ACCOUNT_ID}{tail}")
    }

    pub async fn respond(&self, http_method: &str, tail: &str, status: u16, body: Value) {
        Mock::given(method(http_method))
            .and(path(Self::account_path(tail)))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub fn context(&self) -> Arc<ServiceContext> {
        Arc::new(ServiceContext::new(
            CredentialResolver::new(Some(TEST_TOKEN.to_string())),
            Arc::new(DnsimpleConnector::new(format!("{}/v2", self.server.uri()))),
        ))
    }

    pub fn mcp(&self) -> DnsimpleMcp {
        DnsimpleMcp::new(self.context())
    }
}

/// A server with no token source at all.
pub fn server_without_token() -> DnsimpleMcp {
    DnsimpleMcp::new(Arc::new(ServiceContext::new(
        CredentialResolver::new(None),
        Arc::new(DnsimpleConnector::new("https://127.0.0.1:9/v2")),
    )))
}

pub fn domain_json(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "account_id": ACCOUNT_ID,
        "registrant_id": 2715,
        "name": name,
        "unicode_name": name,
        "state": "registered",
        "auto_renew": true,
        "expires_at": "2027-01-16T22:08:07Z"
    })
}

pub fn record_json(id: u64, name: &str, record_type: &str, content: &str) -> Value {
    json!({
        "id": id,
        "zone_id": "example.com",
        "name": name,
        "content": content,
        "ttl": 3600,
        "priority": null,
        "type": record_type
    })
}

pub fn page(data: Value) -> Value {
    let count = data.as_array().map_or(0, Vec::len);
    json!({
        "data": data,
        "pagination": {"current_page": 1, "per_page": 100, "total_entries": count, "total_pages": 1}
    })
}

pub fn prices_json(name: &str, renewal: f64) -> Value {
    json!({
        "data": {
            "domain": name,
            "premium": false,
            "registration_price": renewal,
            "renewal_price": renewal,
            "transfer_price": renewal
        }
    })
}

pub fn result_text(result: &CallToolResult) -> &str {
    result
        .content
        .first()
        .and_then(|c| c.raw.as_text())
        .map(|t| t.text.as_str())
        .unwrap()
}

pub fn result_json(result: &CallToolResult) -> Value {
    serde_json::from_str(result_text(result)).unwrap()
}
