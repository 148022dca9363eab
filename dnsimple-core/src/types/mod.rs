//! Type definition module

mod credential;
mod params;
mod results;

pub use credential::{ApiToken, CredentialSource, ResolvedToken, SecretItem};
pub use params::{
    ConfigureDnsRecordParams, DeleteDnsRecordParams, DisableAutorenewParams,
    DomainSelectionParams, FlexibleId, ListDnsRecordsParams, ListDomainsParams,
    TransferDomainParams, WhoisPrivacyParams,
};
pub use results::{
    AutorenewEntry, AutorenewStatus, ConfigureDnsRecordResult, DeleteDnsRecordResult,
    DisableAutorenewResult, DomainCostEntry, DomainCostsResult, DomainSummary,
    EnableWhoisPrivacyResult, ListDnsRecordsResult, ListDomainsResult, PriceEntry,
    PriceOperation, PricingStatus, RecordAction, RecordSummary, RenewalCostEntry,
    RenewalCostsResult, TransferDomainResult, TransferSummary, WhoisPrivacyAction,
    WhoisPrivacyResult, PRICE_CURRENCY,
};

// Re-export provider library public types
pub use dnsimple_provider::{
    DnsRecordType, Domain, DomainPrices, DomainTransfer, RecordFilter, TransferRequest,
    WhoisPrivacy, ZoneRecord, ZoneRecordRequest,
};
