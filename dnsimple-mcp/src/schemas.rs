//! MCP tool parameter schemas
//!
//! The parameter structs live in `dnsimple-core` so the dispatcher can decode
//! the same shapes; they derive `Deserialize` and `JsonSchema` as rmcp requires.

pub use dnsimple_core::types::{
    ConfigureDnsRecordParams, DeleteDnsRecordParams, DisableAutorenewParams,
    DomainSelectionParams, ListDnsRecordsParams, ListDomainsParams, TransferDomainParams,
    WhoisPrivacyParams,
};
