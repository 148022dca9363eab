//! Operation result shapes

use serde::Serialize;

use dnsimple_provider::{Domain, DomainTransfer, WhoisPrivacy, ZoneRecord};

/// Currency of every DNSimple price.
pub const PRICE_CURRENCY: &str = "USD";

// ============ Domains ============

/// A domain normalized for output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainSummary {
    pub id: u64,
    pub name: String,
    /// ISO-8601, `null` for hosted-only domains
    pub expires_at: Option<String>,
    pub auto_renew: bool,
    pub registrant_id: Option<u64>,
}

impl From<&Domain> for DomainSummary {
    fn from(d: &Domain) -> Self {
        Self {
            id: d.id,
            name: d.name.clone(),
            expires_at: d.expires_at.map(|t| t.to_rfc3339()),
            auto_renew: d.auto_renew,
            registrant_id: d.registrant_id,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListDomainsResult {
    pub account_id: u64,
    pub count: usize,
    pub domains: Vec<DomainSummary>,
}

// ============ Pricing ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceOperation {
    Register,
    Renew,
    Transfer,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceEntry {
    pub operation: PriceOperation,
    pub price: f64,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DomainCostEntry {
    pub domain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_info: Option<DomainSummary>,
    pub prices: Vec<PriceEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DomainCostsResult {
    pub account_id: u64,
    pub domains: Vec<DomainCostEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingStatus {
    Priced,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct RenewalCostEntry {
    pub domain: String,
    pub expires_at: Option<String>,
    pub auto_renew: Option<bool>,
    pub renewal_price: Option<f64>,
    pub currency: Option<String>,
    pub status: PricingStatus,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RenewalCostsResult {
    pub account_id: u64,
    pub total_domains: usize,
    pub priced_domains: usize,
    /// Sum over priced domains, rounded to cents
    pub total_annual_renewal_cost: f64,
    pub currency: String,
    pub domains: Vec<RenewalCostEntry>,
}

// ============ DNS records ============

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordSummary {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    pub ttl: u32,
    pub priority: Option<u32>,
}

impl From<ZoneRecord> for RecordSummary {
    fn from(r: ZoneRecord) -> Self {
        Self {
            id: r.id,
            name: r.name,
            record_type: r.record_type,
            content: r.content,
            ttl: r.ttl,
            priority: r.priority,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListDnsRecordsResult {
    pub domain: String,
    pub count: usize,
    pub records: Vec<RecordSummary>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordAction {
    Created,
    Updated,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigureDnsRecordResult {
    pub success: bool,
    pub action: RecordAction,
    pub record: RecordSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteDnsRecordResult {
    pub success: bool,
    pub message: String,
}

// ============ Registrar ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AutorenewStatus {
    Disabled,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct AutorenewEntry {
    pub domain: String,
    pub status: AutorenewStatus,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DisableAutorenewResult {
    pub results: Vec<AutorenewEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferSummary {
    pub id: u64,
    pub domain_id: u64,
    pub state: String,
    pub auto_renew: bool,
    pub whois_privacy: bool,
}

impl From<DomainTransfer> for TransferSummary {
    fn from(t: DomainTransfer) -> Self {
        Self {
            id: t.id,
            domain_id: t.domain_id,
            state: t.state,
            auto_renew: t.auto_renew,
            whois_privacy: t.whois_privacy,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TransferDomainResult {
    pub success: bool,
    pub transfer: TransferSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct WhoisPrivacyResult {
    pub domain: String,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whois_privacy: Option<WhoisPrivacy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WhoisPrivacyAction {
    AlreadyEnabled,
    Enabled,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnableWhoisPrivacyResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    pub domain: String,
    pub status: WhoisPrivacyAction,
    pub message: String,
    pub whois_privacy: WhoisPrivacy,
}
