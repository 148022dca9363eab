//! Business logic service layer

mod credential_service;
mod dns_service;
mod domain_service;
mod pricing_service;
mod registrar_service;

pub use credential_service::{
    CredentialResolver, SECRET_FIELD_NAMES, SECRET_ITEM_HOST, SECRET_ITEM_TITLE, TOKEN_ENV_VAR,
};
pub use dns_service::DnsService;
pub use domain_service::DomainService;
pub use pricing_service::PricingService;
pub use registrar_service::RegistrarService;

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::error::{CoreError, CoreResult};
use crate::traits::{RegistrarApi, RegistrarConnector};

/// An authenticated registrar client bound to the discovered account.
#[derive(Clone)]
pub struct Session {
    pub registrar: Arc<dyn RegistrarApi>,
    pub account_id: u64,
}

/// Service context - holds all dependencies
///
/// The token and the account id are resolved on first use and memoized for
/// the lifetime of the context. A failed resolution is not memoized; the next
/// operation tries again.
pub struct ServiceContext {
    credentials: CredentialResolver,
    connector: Arc<dyn RegistrarConnector>,
    registrar: OnceCell<Arc<dyn RegistrarApi>>,
    account_id: OnceCell<u64>,
}

impl ServiceContext {
    /// Create a service context
    #[must_use]
    pub fn new(credentials: CredentialResolver, connector: Arc<dyn RegistrarConnector>) -> Self {
        Self {
            credentials,
            connector,
            registrar: OnceCell::new(),
            account_id: OnceCell::new(),
        }
    }

    /// The registrar client, connecting with a freshly resolved token on first call.
    pub async fn registrar(&self) -> CoreResult<Arc<dyn RegistrarApi>> {
        self.registrar
            .get_or_try_init(|| async {
                let resolved = self.credentials.resolve_token().await?;
                log::info!("Using DNSimple API token from {}", resolved.source);
                self.connector.connect(&resolved.token).await
            })
            .await
            .cloned()
    }

    /// The account id, discovered on first call.
    pub async fn account_id(&self) -> CoreResult<u64> {
        let registrar = self.registrar().await?;
        self.account_id
            .get_or_try_init(|| async {
                let id = registrar.discover_account_id().await.map_err(|e| {
                    CoreError::AccountError(format!("could not determine the DNSimple account: {e}"))
                })?;
                log::info!("Using DNSimple account {id}");
                Ok(id)
            })
            .await
            .copied()
    }

    /// Registrar client plus account id, for account-scoped calls.
    pub async fn session(&self) -> CoreResult<Session> {
        let registrar = self.registrar().await?;
        let account_id = self.account_id().await?;
        Ok(Session {
            registrar,
            account_id,
        })
    }
}
