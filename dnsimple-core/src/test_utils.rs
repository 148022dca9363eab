//! Test helpers: an in-memory registrar and mock credential collaborators.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dnsimple_provider::{
    Domain, DomainPrices, DomainTransfer, ProviderError, RecordFilter, RegistrarApi,
    TransferRequest, WhoisPrivacy, ZoneRecord, ZoneRecordRequest,
};
use tokio::sync::RwLock;

use crate::error::CoreResult;
use crate::services::{CredentialResolver, ServiceContext};
use crate::traits::{RegistrarConnector, SecretSource, StaticConnector, TokenCache};
use crate::types::{ApiToken, SecretItem};

type ProviderResult<T> = Result<T, ProviderError>;

// ===== MockRegistrar =====

#[derive(Default)]
struct RegistrarState {
    domains: Vec<Domain>,
    prices: HashMap<String, f64>,
    records: HashMap<String, Vec<ZoneRecord>>,
    whois: HashMap<String, WhoisPrivacy>,
    locked: Vec<String>,
    last_transfer: Option<TransferRequest>,
    next_id: u64,
    fail_discovery: bool,
}

/// In-memory registrar keyed by domain name.
pub struct MockRegistrar {
    state: Mutex<RegistrarState>,
    calls: Mutex<HashMap<&'static str, usize>>,
}

fn not_found(resource: String) -> ProviderError {
    ProviderError::NotFound {
        resource,
        raw_message: Some("Not found".to_string()),
    }
}

impl MockRegistrar {
    pub const ACCOUNT_ID: u64 = 1010;

    pub fn new() -> Self {
        Self {
            state: Mutex::new(RegistrarState {
                next_id: 100,
                ..RegistrarState::default()
            }),
            calls: Mutex::new(HashMap::new()),
        }
    }

    /// A registered domain with auto-renew on and the given renewal price.
    pub fn add_domain(&self, name: &str, renewal_price: f64) {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        let expires_at = DateTime::parse_from_rfc3339("2027-01-16T22:08:07Z")
            .unwrap()
            .with_timezone(&Utc);
        state.domains.push(Domain {
            id,
            name: name.to_string(),
            expires_at: Some(expires_at),
            auto_renew: true,
            registrant_id: Some(2715),
        });
        state.prices.insert(name.to_string(), renewal_price);
    }

    /// A hosted-only domain: no expiry, no registrant, no prices.
    pub fn add_hosted_domain(&self, name: &str) {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        state.domains.push(Domain {
            id,
            name: name.to_string(),
            expires_at: None,
            auto_renew: false,
            registrant_id: None,
        });
    }

    pub fn add_record(&self, zone: &str, name: &str, record_type: &str, content: &str) -> u64 {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        state.records.entry(zone.to_string()).or_default().push(ZoneRecord {
            id,
            name: name.to_string(),
            record_type: record_type.to_string(),
            content: content.to_string(),
            ttl: 3600,
            priority: None,
        });
        id
    }

    pub fn records_named(&self, zone: &str, name: &str, record_type: &str) -> Vec<ZoneRecord> {
        self.state
            .lock()
            .unwrap()
            .records
            .get(zone)
            .map(|records| {
                records
                    .iter()
                    .filter(|r| r.name == name && r.record_type == record_type)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Subsequent transfers of this domain are refused by the registrar.
    pub fn lock_domain(&self, name: &str) {
        self.state.lock().unwrap().locked.push(name.to_string());
    }

    pub fn fail_discovery(&self, fail: bool) {
        self.state.lock().unwrap().fail_discovery = fail;
    }

    pub fn auto_renew(&self, name: &str) -> bool {
        self.state
            .lock()
            .unwrap()
            .domains
            .iter()
            .find(|d| d.name == name)
            .is_some_and(|d| d.auto_renew)
    }

    pub fn last_transfer(&self) -> Option<TransferRequest> {
        self.state.lock().unwrap().last_transfer.clone()
    }

    /// Number of calls made to one trait method.
    pub fn calls(&self, method: &str) -> usize {
        self.calls.lock().unwrap().get(method).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }

    fn record_call(&self, method: &'static str) {
        *self.calls.lock().unwrap().entry(method).or_insert(0) += 1;
    }

    fn find_domain(&self, name: &str) -> ProviderResult<Domain> {
        self.state
            .lock()
            .unwrap()
            .domains
            .iter()
            .find(|d| d.name == name)
            .cloned()
            .ok_or_else(|| not_found(format!("Domain '{name}'")))
    }
}

impl RegistrarState {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

#[async_trait]
impl RegistrarApi for MockRegistrar {
    async fn discover_account_id(&self) -> ProviderResult<u64> {
        self.record_call("discover_account_id");
        if self.state.lock().unwrap().fail_discovery {
            return Err(ProviderError::AccountUnavailable {
                detail: "no accounts".to_string(),
            });
        }
        Ok(Self::ACCOUNT_ID)
    }

    async fn list_domains(&self, _account_id: u64) -> ProviderResult<Vec<Domain>> {
        self.record_call("list_domains");
        Ok(self.state.lock().unwrap().domains.clone())
    }

    async fn get_domain(&self, _account_id: u64, domain: &str) -> ProviderResult<Domain> {
        self.record_call("get_domain");
        self.find_domain(domain)
    }

    async fn list_zone_records(
        &self,
        _account_id: u64,
        zone: &str,
        filter: &RecordFilter,
    ) -> ProviderResult<Vec<ZoneRecord>> {
        self.record_call("list_zone_records");
        let state = self.state.lock().unwrap();
        Ok(state
            .records
            .get(zone)
            .map(|records| {
                records
                    .iter()
                    .filter(|r| filter.name.as_ref().is_none_or(|n| r.name == *n))
                    .filter(|r| filter.record_type.as_ref().is_none_or(|t| r.record_type == *t))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn create_zone_record(
        &self,
        _account_id: u64,
        zone: &str,
        record: &ZoneRecordRequest,
    ) -> ProviderResult<ZoneRecord> {
        self.record_call("create_zone_record");
        let mut state = self.state.lock().unwrap();
        let created = ZoneRecord {
            id: state.next_id(),
            name: record.name.clone(),
            record_type: record.record_type.as_str().to_string(),
            content: record.content.clone(),
            ttl: record.ttl,
            priority: record.priority,
        };
        state
            .records
            .entry(zone.to_string())
            .or_default()
            .push(created.clone());
        Ok(created)
    }

    async fn update_zone_record(
        &self,
        _account_id: u64,
        zone: &str,
        record_id: u64,
        record: &ZoneRecordRequest,
    ) -> ProviderResult<ZoneRecord> {
        self.record_call("update_zone_record");
        let mut state = self.state.lock().unwrap();
        let existing = state
            .records
            .get_mut(zone)
            .and_then(|records| records.iter_mut().find(|r| r.id == record_id))
            .ok_or_else(|| not_found(format!("Record '{record_id}' in zone '{zone}'")))?;
        existing.content.clone_from(&record.content);
        existing.ttl = record.ttl;
        existing.priority = record.priority;
        Ok(existing.clone())
    }

    async fn delete_zone_record(
        &self,
        _account_id: u64,
        zone: &str,
        record_id: u64,
    ) -> ProviderResult<()> {
        self.record_call("delete_zone_record");
        let mut state = self.state.lock().unwrap();
        let records = state.records.entry(zone.to_string()).or_default();
        let before = records.len();
        records.retain(|r| r.id != record_id);
        if records.len() == before {
            return Err(not_found(format!("Record '{record_id}' in zone '{zone}'")));
        }
        Ok(())
    }

    async fn get_domain_prices(
        &self,
        _account_id: u64,
        domain: &str,
    ) -> ProviderResult<DomainPrices> {
        self.record_call("get_domain_prices");
        let renewal_price = self
            .state
            .lock()
            .unwrap()
            .prices
            .get(domain)
            .copied()
            .ok_or_else(|| not_found(format!("Domain '{domain}'")))?;
        Ok(DomainPrices {
            domain: domain.to_string(),
            registration_price: renewal_price,
            renewal_price,
            transfer_price: renewal_price,
        })
    }

    async fn disable_auto_renewal(&self, _account_id: u64, domain: &str) -> ProviderResult<()> {
        self.record_call("disable_auto_renewal");
        let mut state = self.state.lock().unwrap();
        let found = state
            .domains
            .iter_mut()
            .find(|d| d.name == domain)
            .ok_or_else(|| not_found(format!("Domain '{domain}'")))?;
        found.auto_renew = false;
        Ok(())
    }

    async fn transfer_domain(
        &self,
        _account_id: u64,
        domain: &str,
        request: &TransferRequest,
    ) -> ProviderResult<DomainTransfer> {
        self.record_call("transfer_domain");
        let mut state = self.state.lock().unwrap();
        if state.locked.iter().any(|d| d == domain) {
            return Err(ProviderError::ApiError {
                status: 400,
                message: "The domain is locked at the current registrar".to_string(),
            });
        }
        state.last_transfer = Some(request.clone());
        Ok(DomainTransfer {
            id: state.next_id(),
            domain_id: state.next_id(),
            state: "transferring".to_string(),
            auto_renew: false,
            whois_privacy: false,
        })
    }

    async fn get_whois_privacy(
        &self,
        _account_id: u64,
        domain: &str,
    ) -> ProviderResult<WhoisPrivacy> {
        self.record_call("get_whois_privacy");
        self.state
            .lock()
            .unwrap()
            .whois
            .get(domain)
            .cloned()
            .ok_or_else(|| not_found(format!("Domain '{domain}'")))
    }

    async fn enable_whois_privacy(
        &self,
        _account_id: u64,
        domain: &str,
    ) -> ProviderResult<WhoisPrivacy> {
        self.record_call("enable_whois_privacy");
        let status = WhoisPrivacy {
            domain_id: None,
            enabled: Some(true),
            expires_on: Some("2027-01-16".to_string()),
        };
        self.state
            .lock()
            .unwrap()
            .whois
            .insert(domain.to_string(), status.clone());
        Ok(status)
    }
}

// ===== Connectors =====

/// Connector that counts how often a client is built.
pub struct CountingConnector {
    inner: StaticConnector,
    connects: AtomicUsize,
}

impl CountingConnector {
    pub fn new(registrar: Arc<MockRegistrar>) -> Self {
        Self {
            inner: StaticConnector::new(registrar),
            connects: AtomicUsize::new(0),
        }
    }

    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RegistrarConnector for CountingConnector {
    async fn connect(&self, token: &ApiToken) -> CoreResult<Arc<dyn RegistrarApi>> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        self.inner.connect(token).await
    }
}

/// A context with a fixed token, backed by `registrar`.
pub fn context_with(registrar: Arc<MockRegistrar>) -> ServiceContext {
    ServiceContext::new(
        CredentialResolver::new(Some("test-token".to_string())),
        Arc::new(StaticConnector::new(registrar)),
    )
}

// ===== MockSecretSource =====

pub struct MockSecretSource {
    fields: HashMap<(String, String), String>,
    available: bool,
    lookups: RwLock<usize>,
}

impl MockSecretSource {
    pub fn empty() -> Self {
        Self {
            fields: HashMap::new(),
            available: true,
            lookups: RwLock::new(0),
        }
    }

    pub fn with_field(item: SecretItem, field: &str, value: &str) -> Self {
        let mut source = Self::empty();
        source
            .fields
            .insert((item.to_string(), field.to_string()), value.to_string());
        source
    }

    #[must_use]
    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    pub async fn lookups(&self) -> usize {
        *self.lookups.read().await
    }
}

#[async_trait]
impl SecretSource for MockSecretSource {
    fn is_available(&self) -> bool {
        self.available
    }

    async fn read_field(&self, item: &SecretItem, field: &str) -> CoreResult<Option<String>> {
        *self.lookups.write().await += 1;
        Ok(self
            .fields
            .get(&(item.to_string(), field.to_string()))
            .cloned())
    }
}

// ===== MockTokenCache =====

pub struct MockTokenCache {
    token: RwLock<Option<ApiToken>>,
    stored: RwLock<Option<String>>,
}

impl MockTokenCache {
    pub fn empty() -> Self {
        Self {
            token: RwLock::new(None),
            stored: RwLock::new(None),
        }
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: RwLock::new(ApiToken::new(token)),
            stored: RwLock::new(None),
        }
    }

    /// The last token written through `store`.
    pub async fn stored(&self) -> Option<String> {
        self.stored.read().await.clone()
    }
}

#[async_trait]
impl TokenCache for MockTokenCache {
    async fn load(&self) -> CoreResult<Option<ApiToken>> {
        Ok(self.token.read().await.clone())
    }

    async fn store(&self, token: &ApiToken) -> CoreResult<()> {
        *self.stored.write().await = Some(token.expose().to_string());
        *self.token.write().await = Some(token.clone());
        Ok(())
    }
}
