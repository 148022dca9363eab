//! # dnsimple-provider
//!
//! A typed client for the [DNSimple](https://dnsimple.com/) v2 API, covering
//! the registrar and zone endpoints an automation client needs: accounts,
//! domains, prices, zone records, auto-renewal, transfers and WHOIS privacy.
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)* — Use rustls.
//! - **`native-tls`** — Use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dnsimple_provider::{DnsimpleClient, RecordFilter, RegistrarApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DnsimpleClient::new("your-token")?;
//!
//!     // The account id is needed by every account-scoped call.
//!     let account_id = client.discover_account_id().await?;
//!
//!     for domain in client.list_domains(account_id).await? {
//!         println!("{} (auto-renew: {})", domain.name, domain.auto_renew);
//!     }
//!
//!     let records = client
//!         .list_zone_records(account_id, "example.com", &RecordFilter::default())
//!         .await?;
//!     for record in &records {
//!         println!("{} {} -> {}", record.name, record.record_type, record.content);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::InvalidCredentials`] — the token was rejected (HTTP 401)
//! - [`ProviderError::NotFound`] — domain or record does not exist (HTTP 404)
//! - [`ProviderError::ApiError`] — any other non-success status, with the registrar's message
//! - [`ProviderError::NetworkError`] / [`ProviderError::Timeout`] — transport failures
//!
//! Nothing is retried. The API token never appears in an error message.

mod dnsimple;
mod error;
mod http_client;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export the client
pub use dnsimple::{DNSIMPLE_API_BASE, DnsimpleClient};

// Re-export core trait only (internal traits are not exported)
pub use traits::RegistrarApi;

// Re-export types
pub use types::{
    Account, DnsRecordType, Domain, DomainPrices, DomainTransfer, RecordFilter, TransferRequest,
    UnknownRecordType, WhoisPrivacy, ZoneRecord, ZoneRecordRequest,
};

// Re-export utils modules
pub use utils::{datetime, log_sanitizer};
