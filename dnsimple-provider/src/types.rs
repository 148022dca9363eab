use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============ Record types ============

/// DNS record types that can be created or updated through this client.
///
/// Listing is not restricted to these: records of any other type (SOA, CAA,
/// ...) come back with their type as a plain string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DnsRecordType {
    A,
    Aaaa,
    Cname,
    Mx,
    Txt,
    Ns,
    Srv,
    Alias,
}

impl DnsRecordType {
    /// All writable record types, in display order.
    pub const ALL: [Self; 8] = [
        Self::A,
        Self::Aaaa,
        Self::Cname,
        Self::Mx,
        Self::Txt,
        Self::Ns,
        Self::Srv,
        Self::Alias,
    ];

    /// Wire name of the type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Txt => "TXT",
            Self::Ns => "NS",
            Self::Srv => "SRV",
            Self::Alias => "ALIAS",
        }
    }

    /// Only MX and SRV records carry a priority.
    pub fn uses_priority(self) -> bool {
        matches!(self, Self::Mx | Self::Srv)
    }
}

impl fmt::Display for DnsRecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a writable record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRecordType(pub String);

impl fmt::Display for UnknownRecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported record type '{}'", self.0)
    }
}

impl std::error::Error for UnknownRecordType {}

impl FromStr for DnsRecordType {
    type Err = UnknownRecordType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownRecordType(s.to_string()))
    }
}

// ============ Registrar resources ============

/// An account the token can act on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: u64,
}

/// A domain registered with (or hosted at) the registrar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub id: u64,
    pub name: String,
    /// Registration expiry; absent for hosted-only domains.
    #[serde(default, with = "crate::utils::datetime")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub auto_renew: bool,
    #[serde(default)]
    pub registrant_id: Option<u64>,
}

/// A single DNS record in a zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneRecord {
    pub id: u64,
    /// Relative name; empty string for the zone apex.
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    pub ttl: u32,
    #[serde(default)]
    pub priority: Option<u32>,
}

/// Registrar price list for one domain, all amounts in USD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainPrices {
    #[serde(default)]
    pub domain: String,
    pub registration_price: f64,
    pub renewal_price: f64,
    pub transfer_price: f64,
}

/// A registrar transfer order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainTransfer {
    pub id: u64,
    pub domain_id: u64,
    pub state: String,
    #[serde(default)]
    pub auto_renew: bool,
    #[serde(default)]
    pub whois_privacy: bool,
}

/// WHOIS privacy status of a registered domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhoisPrivacy {
    #[serde(default)]
    pub domain_id: Option<u64>,
    /// `None` while the privacy service has been purchased but never toggled.
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub expires_on: Option<String>,
}

// ============ Requests ============

/// Body for record create and update calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneRecordRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: DnsRecordType,
    pub content: String,
    pub ttl: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
}

/// Server-side filter for record listing. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    /// Exact relative name; `Some("")` selects the apex.
    pub name: Option<String>,
    pub record_type: Option<String>,
}

/// Body for an inbound transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferRequest {
    pub auth_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registrant_id: Option<u64>,
}

// ============ Response envelopes ============

/// Every single-object DNSimple response wraps its payload in `data`.
#[derive(Debug, Deserialize)]
pub(crate) struct DataResponse<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
}

/// List responses add a `pagination` block; absent means a single page.
#[derive(Debug, Deserialize)]
pub(crate) struct PaginatedResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// `/whoami` answers with either an account or a user (for OAuth tokens).
#[derive(Debug, Deserialize)]
pub(crate) struct WhoamiData {
    #[serde(default)]
    pub account: Option<Account>,
}
