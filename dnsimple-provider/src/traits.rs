use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{
    Domain, DomainPrices, DomainTransfer, RecordFilter, TransferRequest, WhoisPrivacy,
    ZoneRecord, ZoneRecordRequest,
};

/// Raw API error (internal use)
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// HTTP status code
    pub status: u16,
    /// Registrar message, already scrubbed of the token
    pub message: String,
}

impl RawApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// Error context (internal use)
/// Describes what the failed request was about, for `NotFound` messages.
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    pub domain: Option<String>,
    pub record_id: Option<String>,
}

impl ErrorContext {
    pub fn domain(domain: &str) -> Self {
        Self {
            domain: Some(domain.to_string()),
            record_id: None,
        }
    }

    pub fn record(zone: &str, record_id: u64) -> Self {
        Self {
            domain: Some(zone.to_string()),
            record_id: Some(record_id.to_string()),
        }
    }

    /// Human-readable name of the resource, e.g. `Record '42' in zone 'example.com'`.
    pub fn describe(&self) -> String {
        match (&self.record_id, &self.domain) {
            (Some(id), Some(zone)) => format!("Record '{id}' in zone '{zone}'"),
            (Some(id), None) => format!("Record '{id}'"),
            (None, Some(domain)) => format!("Domain '{domain}'"),
            (None, None) => "Resource".to_string(),
        }
    }
}

/// Error mapping trait (internal use)
/// Maps a non-success HTTP answer onto [`ProviderError`].
pub(crate) trait ProviderErrorMapper {
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// Shortcut: parse error
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            detail: detail.to_string(),
        }
    }
}

/// Operations the DNSimple v2 API exposes to this server.
///
/// Every account-scoped call takes the account id explicitly; discovering it
/// once and reusing it is the caller's job.
#[async_trait]
pub trait RegistrarApi: Send + Sync {
    /// Identify the account the token belongs to.
    ///
    /// Tries `/whoami` first, then falls back to the first entry of `/accounts`.
    async fn discover_account_id(&self) -> Result<u64>;

    /// All domains in the account, every page collected.
    async fn list_domains(&self, account_id: u64) -> Result<Vec<Domain>>;

    async fn get_domain(&self, account_id: u64, domain: &str) -> Result<Domain>;

    /// All records in a zone matching `filter`, every page collected.
    async fn list_zone_records(
        &self,
        account_id: u64,
        zone: &str,
        filter: &RecordFilter,
    ) -> Result<Vec<ZoneRecord>>;

    async fn create_zone_record(
        &self,
        account_id: u64,
        zone: &str,
        record: &ZoneRecordRequest,
    ) -> Result<ZoneRecord>;

    async fn update_zone_record(
        &self,
        account_id: u64,
        zone: &str,
        record_id: u64,
        record: &ZoneRecordRequest,
    ) -> Result<ZoneRecord>;

    async fn delete_zone_record(&self, account_id: u64, zone: &str, record_id: u64)
    -> Result<()>;

    async fn get_domain_prices(&self, account_id: u64, domain: &str) -> Result<DomainPrices>;

    async fn disable_auto_renewal(&self, account_id: u64, domain: &str) -> Result<()>;

    async fn transfer_domain(
        &self,
        account_id: u64,
        domain: &str,
        request: &TransferRequest,
    ) -> Result<DomainTransfer>;

    async fn get_whois_privacy(&self, account_id: u64, domain: &str) -> Result<WhoisPrivacy>;

    async fn enable_whois_privacy(&self, account_id: u64, domain: &str) -> Result<WhoisPrivacy>;
}
