//! Collaborator abstraction trait definitions

mod registrar_connector;
mod secret_source;
mod token_cache;

pub use registrar_connector::{DnsimpleConnector, RegistrarConnector, StaticConnector};
pub use secret_source::SecretSource;
pub use token_cache::TokenCache;

pub use dnsimple_provider::RegistrarApi;
