//! DNSimple Core Library
//!
//! Business logic for managing a DNSimple account:
//! - Credential resolution (environment, secret manager, local cache)
//! - Account discovery and session memoization
//! - Domain listing and pricing
//! - DNS record management
//! - Registrar operations (auto-renewal, transfers, WHOIS privacy)
//! - A name-keyed operation dispatcher with a uniform error shape
//!
//! Platform concerns (secret manager, token cache file) are abstracted
//! through traits and implemented by the server crate.

pub mod dispatcher;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod test_utils;

pub use dispatcher::{ErrorPayload, Operation, OperationDispatcher, OperationRequest};
pub use error::{CoreError, CoreResult};
pub use services::{CredentialResolver, ServiceContext};
pub use traits::{DnsimpleConnector, RegistrarConnector, SecretSource, StaticConnector, TokenCache};
