//! Operation parameter schemas
//!
//! Input structures for every operation. All derive `Deserialize` and
//! `JsonSchema` so the same types drive argument parsing and the published
//! tool schemas.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An identifier the caller may send either as a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum FlexibleId {
    Number(i64),
    Text(String),
}

impl FlexibleId {
    /// Parse into a positive integer id.
    pub fn to_positive(&self) -> Option<u64> {
        match self {
            Self::Number(n) => u64::try_from(*n).ok().filter(|n| *n > 0),
            Self::Text(s) => s.trim().parse::<u64>().ok().filter(|n| *n > 0),
        }
    }
}

impl fmt::Display for FlexibleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Parameters for `list_domains`.
///
/// This operation takes no parameters, but an empty struct is needed for the schema.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListDomainsParams {}

/// Parameters for `get_domain_costs` and `get_renewal_costs`.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct DomainSelectionParams {
    /// Domains to price; omitted or empty means every domain in the account.
    #[schemars(
        description = "Domain names to check (e.g. [\"example.com\"]). Omit or pass an empty list for all domains in the account"
    )]
    #[serde(default)]
    pub domain_names: Option<Vec<String>>,
}

/// Parameters for `list_dns_records`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListDnsRecordsParams {
    #[schemars(description = "The domain (zone) name, e.g. example.com")]
    pub domain_name: String,

    #[schemars(description = "Only records with this exact name; use \"@\" for the zone apex")]
    #[serde(default)]
    pub name: Option<String>,

    #[schemars(description = "Only records of this type (A, AAAA, CNAME, MX, TXT, NS, SRV, ALIAS, ...)")]
    #[serde(default, rename = "type")]
    pub record_type: Option<String>,
}

/// Parameters for `configure_dns_record`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ConfigureDnsRecordParams {
    #[schemars(description = "The domain (zone) name, e.g. example.com")]
    pub domain_name: String,

    #[schemars(description = "Record name relative to the zone, e.g. \"www\"; use \"@\" for the zone apex")]
    pub name: String,

    #[schemars(description = "Record type: A, AAAA, CNAME, MX, TXT, NS, SRV or ALIAS")]
    #[serde(rename = "type")]
    pub record_type: String,

    #[schemars(description = "Record content, e.g. an IP address or target host name")]
    pub content: String,

    #[schemars(description = "Time to live in seconds, 60-604800 (default: 3600)")]
    #[serde(default)]
    pub ttl: Option<i64>,

    #[schemars(description = "Priority; required for MX and SRV records, ignored otherwise")]
    #[serde(default)]
    pub priority: Option<i64>,
}

/// Parameters for `delete_dns_record`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteDnsRecordParams {
    #[schemars(description = "The domain (zone) name, e.g. example.com")]
    pub domain_name: String,

    #[schemars(description = "ID of the record to delete (number or numeric string)")]
    pub record_id: FlexibleId,
}

/// Parameters for `disable_autorenew`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DisableAutorenewParams {
    #[schemars(description = "Domain names to disable auto-renewal for (at least one)")]
    pub domain_names: Vec<String>,
}

/// Parameters for `transfer_domain`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TransferDomainParams {
    #[schemars(description = "The domain name to transfer in, e.g. example.com")]
    pub domain_name: String,

    #[schemars(description = "Authorization (EPP) code from the current registrar")]
    pub auth_code: String,

    #[schemars(description = "Registrant contact ID; the account default is used when omitted")]
    #[serde(default)]
    pub registrant_id: Option<FlexibleId>,
}

/// Parameters for `get_whois_privacy` and `enable_whois_privacy`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WhoisPrivacyParams {
    #[schemars(description = "The registered domain name, e.g. example.com")]
    pub domain_name: String,
}
