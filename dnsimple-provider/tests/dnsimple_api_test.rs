//! DNSimple client tests against a local mock API
//!
//! ```bash
//! cargo test -p dnsimple-provider --test dnsimple_api_test
//! ```

mod common;

use common::{
    ACCOUNT_ID, TEST_TOKEN, TestContext, bearer, domain_json, page, record_json,
};
use dnsimple_provider::{
    DnsRecordType, ProviderError, RecordFilter, RegistrarApi, TransferRequest, ZoneRecordRequest,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

// ============ Account discovery ============

#[tokio::test]
async fn discover_account_from_whoami() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/v2/whoami"))
        .and(header("Authorization", bearer().as_str()))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"user": null, "account": {"id": ACCOUNT_ID, "email": "ops@example.com"}}
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let id = require_ok!(ctx.client.discover_account_id().await);
    assert_eq!(id, ACCOUNT_ID);
}

#[tokio::test]
async fn discover_account_falls_back_to_accounts_list() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/v2/whoami"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"user": {"id": 7, "email": "me@example.com"}, "account": null}
        })))
        .mount(&ctx.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 42, "email": "first@example.com"}, {"id": 43}]
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let id = require_ok!(ctx.client.discover_account_id().await);
    assert_eq!(id, 42);
}

#[tokio::test]
async fn discover_account_with_no_accounts_is_unavailable() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/v2/whoami"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"account": null}})),
        )
        .mount(&ctx.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&ctx.server)
        .await;

    let err = require_err!(ctx.client.discover_account_id().await);
    assert!(
        matches!(err, ProviderError::AccountUnavailable { .. }),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn discover_account_without_data_key_is_unavailable() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/v2/whoami"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&ctx.server)
        .await;

    let err = require_err!(ctx.client.discover_account_id().await);
    assert!(
        matches!(err, ProviderError::AccountUnavailable { .. }),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn rejected_token_is_never_echoed() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path("/v2/whoami"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": format!("Authentication failed for token {TEST_TOKEN}")
        })))
        .mount(&ctx.server)
        .await;

    let err = require_err!(ctx.client.discover_account_id().await);
    assert!(
        matches!(err, ProviderError::InvalidCredentials { .. }),
        "unexpected error: {err:?}"
    );
    let shown = err.to_string();
    assert!(!shown.contains(TEST_TOKEN), "token leaked: {shown}");
    assert!(shown.contains("[REDACTED]"));
    let serialized = serde_json::to_string(&err).unwrap();
    assert!(!serialized.contains(TEST_TOKEN));
}

// ============ Domains ============

#[tokio::test]
async fn list_domains_collects_every_page() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path(TestContext::account_path("/domains")))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            json!([domain_json(1, "example.com"), domain_json(2, "example.net")]),
            1,
            2,
        )))
        .expect(1)
        .mount(&ctx.server)
        .await;
    Mock::given(method("GET"))
        .and(path(TestContext::account_path("/domains")))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page(json!([domain_json(3, "test.org")]), 2, 2)),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;

    let domains = require_ok!(ctx.client.list_domains(ACCOUNT_ID).await);
    let names: Vec<_> = domains.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["example.com", "example.net", "test.org"]);
    assert!(domains[0].expires_at.is_some());
    assert_eq!(domains[0].registrant_id, Some(2715));
}

#[tokio::test]
async fn get_missing_domain_is_not_found() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path(TestContext::account_path("/domains/missing.com")))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "Domain `missing.com` not found"})),
        )
        .mount(&ctx.server)
        .await;

    let err = require_err!(ctx.client.get_domain(ACCOUNT_ID, "missing.com").await);
    assert!(
        matches!(&err, ProviderError::NotFound { resource, .. } if resource == "Domain 'missing.com'"),
        "unexpected error: {err:?}"
    );
}

// ============ Zone records ============

#[tokio::test]
async fn list_records_sends_filters() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path(TestContext::account_path("/zones/example.com/records")))
        .and(query_param("name", "www"))
        .and(query_param("type", "A"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            json!([record_json(11, "www", "A", "192.0.2.1")]),
            1,
            1,
        )))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let filter = RecordFilter {
        name: Some("www".to_string()),
        record_type: Some("A".to_string()),
    };
    let records = require_ok!(
        ctx.client
            .list_zone_records(ACCOUNT_ID, "example.com", &filter)
            .await
    );
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, 11);
    assert_eq!(records[0].content, "192.0.2.1");
}

#[tokio::test]
async fn create_record_posts_body_and_returns_record() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .and(path(TestContext::account_path("/zones/example.com/records")))
        .and(body_json(json!({
            "name": "",
            "type": "MX",
            "content": "mx.example.com",
            "ttl": 3600,
            "priority": 10
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {
                "id": 99, "zone_id": "example.com", "name": "", "type": "MX",
                "content": "mx.example.com", "ttl": 3600, "priority": 10
            }
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let request = ZoneRecordRequest {
        name: String::new(),
        record_type: DnsRecordType::Mx,
        content: "mx.example.com".to_string(),
        ttl: 3600,
        priority: Some(10),
    };
    let record = require_ok!(
        ctx.client
            .create_zone_record(ACCOUNT_ID, "example.com", &request)
            .await
    );
    assert_eq!(record.id, 99);
    assert_eq!(record.priority, Some(10));
}

#[tokio::test]
async fn update_record_patches_by_id() {
    let ctx = TestContext::new().await;
    Mock::given(method("PATCH"))
        .and(path(TestContext::account_path("/zones/example.com/records/11")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": record_json(11, "www", "A", "198.51.100.7")
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let request = ZoneRecordRequest {
        name: "www".to_string(),
        record_type: DnsRecordType::A,
        content: "198.51.100.7".to_string(),
        ttl: 3600,
        priority: None,
    };
    let record = require_ok!(
        ctx.client
            .update_zone_record(ACCOUNT_ID, "example.com", 11, &request)
            .await
    );
    assert_eq!(record.content, "198.51.100.7");
}

#[tokio::test]
async fn delete_record_accepts_empty_204() {
    let ctx = TestContext::new().await;
    Mock::given(method("DELETE"))
        .and(path(TestContext::account_path("/zones/example.com/records/11")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&ctx.server)
        .await;

    require_ok!(
        ctx.client
            .delete_zone_record(ACCOUNT_ID, "example.com", 11)
            .await
    );
}

#[tokio::test]
async fn delete_missing_record_names_record_and_zone() {
    let ctx = TestContext::new().await;
    Mock::given(method("DELETE"))
        .and(path(TestContext::account_path("/zones/example.com/records/404")))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "Record `404` not found"})),
        )
        .mount(&ctx.server)
        .await;

    let err = require_err!(
        ctx.client
            .delete_zone_record(ACCOUNT_ID, "example.com", 404)
            .await
    );
    assert_eq!(
        err.to_string(),
        "Record '404' in zone 'example.com' not found: Record `404` not found"
    );
}

#[tokio::test]
async fn non_json_error_body_is_passed_through() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path(TestContext::account_path("/zones/example.com/records")))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream gateway failure"))
        .mount(&ctx.server)
        .await;

    let err = require_err!(
        ctx.client
            .list_zone_records(ACCOUNT_ID, "example.com", &RecordFilter::default())
            .await
    );
    assert!(
        matches!(&err, ProviderError::ApiError { status: 502, message } if message == "upstream gateway failure"),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn malformed_success_body_is_parse_error() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path(TestContext::account_path("/domains/example.com")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"id": "nope"}})))
        .mount(&ctx.server)
        .await;

    let err = require_err!(ctx.client.get_domain(ACCOUNT_ID, "example.com").await);
    assert!(
        matches!(err, ProviderError::ParseError { .. }),
        "unexpected error: {err:?}"
    );
}

// ============ Registrar ============

#[tokio::test]
async fn domain_prices_fill_in_domain_name() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path(TestContext::account_path(
            "/registrar/domains/example.com/prices",
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "domain": "example.com",
                "premium": false,
                "registration_price": 14.0,
                "renewal_price": 15.0,
                "transfer_price": 14.5
            }
        })))
        .mount(&ctx.server)
        .await;

    let prices = require_ok!(ctx.client.get_domain_prices(ACCOUNT_ID, "example.com").await);
    assert_eq!(prices.domain, "example.com");
    assert!((prices.renewal_price - 15.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn disable_auto_renewal_deletes_resource() {
    let ctx = TestContext::new().await;
    Mock::given(method("DELETE"))
        .and(path(TestContext::account_path(
            "/registrar/domains/example.com/auto_renewal",
        )))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&ctx.server)
        .await;

    require_ok!(ctx.client.disable_auto_renewal(ACCOUNT_ID, "example.com").await);
}

#[tokio::test]
async fn transfer_without_registrant_omits_field() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .and(path(TestContext::account_path(
            "/registrar/domains/example.com/transfers",
        )))
        .and(body_json(json!({"auth_code": "xyz-123"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {
                "id": 361, "domain_id": 182, "registrant_id": 2715,
                "state": "transferring", "auto_renew": false, "whois_privacy": false,
                "status_description": null
            }
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let request = TransferRequest {
        auth_code: "xyz-123".to_string(),
        registrant_id: None,
    };
    let transfer = require_ok!(
        ctx.client
            .transfer_domain(ACCOUNT_ID, "example.com", &request)
            .await
    );
    assert_eq!(transfer.id, 361);
    assert_eq!(transfer.state, "transferring");
}

#[tokio::test]
async fn locked_domain_transfer_surfaces_registrar_message() {
    let ctx = TestContext::new().await;
    Mock::given(method("POST"))
        .and(path(TestContext::account_path(
            "/registrar/domains/example.com/transfers",
        )))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "The domain is locked at the current registrar"
        })))
        .mount(&ctx.server)
        .await;

    let request = TransferRequest {
        auth_code: "xyz-123".to_string(),
        registrant_id: Some(2715),
    };
    let err = require_err!(
        ctx.client
            .transfer_domain(ACCOUNT_ID, "example.com", &request)
            .await
    );
    assert_eq!(
        err.to_string(),
        "HTTP 400: The domain is locked at the current registrar"
    );
}

#[tokio::test]
async fn whois_privacy_get_and_enable() {
    let ctx = TestContext::new().await;
    Mock::given(method("GET"))
        .and(path(TestContext::account_path(
            "/registrar/domains/example.com/whois_privacy",
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": 1, "domain_id": 2, "expires_on": null, "enabled": null}
        })))
        .mount(&ctx.server)
        .await;
    Mock::given(method("PUT"))
        .and(path(TestContext::account_path(
            "/registrar/domains/example.com/whois_privacy",
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": 1, "domain_id": 2, "expires_on": "2027-02-13", "enabled": true}
        })))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let status = require_ok!(ctx.client.get_whois_privacy(ACCOUNT_ID, "example.com").await);
    assert_eq!(status.enabled, None);

    let status = require_ok!(
        ctx.client
            .enable_whois_privacy(ACCOUNT_ID, "example.com")
            .await
    );
    assert_eq!(status.enabled, Some(true));
    assert_eq!(status.expires_on.as_deref(), Some("2027-02-13"));
}
