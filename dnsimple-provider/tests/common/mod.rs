//! Shared test helpers: a mock DNSimple API and response fixtures

#![allow(dead_code)]

use dnsimple_provider::DnsimpleClient;
use serde_json::{Value, json};
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "dnsimple_test_token_0123456789";
pub const ACCOUNT_ID: u64 = 1010;

/// Assert that a `Result` is `Ok` and unwrap the value (fails the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Assert that a `Result` is `Err` and unwrap the error (fails the test otherwise).
#[macro_export]
macro_rules! require_err {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_err(), "expected Err(..), got {res:?}");
        let Err(err) = res else {
            return;
        };
        err
    }};
}

/// A mock server plus a client pointed at it.
pub struct TestContext {
    pub server: MockServer,
    pub client: DnsimpleClient,
}

impl TestContext {
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let client = DnsimpleClient::with_base_url(TEST_TOKEN, format!("{}/v2", server.uri()))
            .unwrap_or_else(|e| panic!("client construction failed: {e}"));
        Self { server, client }
    }

    /// `/v2/{ACCOUNT_ID}{tail}`
    pub fn account_path(tail: &str) -> String {
        format!("/v2/{ACCOUNT_ID}{tail}")
    }
}

pub fn bearer() -> String {
    format!("Bearer {TEST_TOKEN}")
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
        "private_whois": false,
        "expires_at": "2027-01-16T22:08:07Z",
        "created_at": "2020-01-16T22:01:45Z",
        "updated_at": "2024-01-16T22:08:07Z"
    })
}

pub fn record_json(id: u64, name: &str, record_type: &str, content: &str) -> Value {
    json!({
        "id": id,
        "zone_id": "example.com",
        "parent_id": null,
        "name": name,
        "content": content,
        "ttl": 3600,
        "priority": null,
        "type": record_type,
        "regions": ["global"],
        "system_record": false,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    })
}

pub fn page(data: Value, current_page: u32, total_pages: u32) -> Value {
    let count = data.as_array().map_or(0, Vec::len);
    json!({
        "data": data,
        "pagination": {
            "current_page": current_page,
            "per_page": 100,
            "total_entries": count,
            "total_pages": total_pages
        }
    })
}
