//! Domain listing service

use std::sync::Arc;

use crate::error::CoreResult;
use crate::services::{ServiceContext, Session};
use crate::types::{Domain, DomainSummary, ListDomainsResult};
use crate::utils::validation;

/// A domain picked for a batch operation.
///
/// `domain` is filled when the name came from the account listing; for
/// caller-supplied names it is `None` and looked up per item.
#[derive(Debug, Clone)]
pub(crate) struct SelectedDomain {
    pub name: String,
    pub domain: Option<Domain>,
}

/// Domain listing service
pub struct DomainService {
    ctx: Arc<ServiceContext>,
}

impl DomainService {
    /// Create a domain service instance
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// List every domain in the account.
    pub async fn list_domains(&self) -> CoreResult<ListDomainsResult> {
        let session = self.ctx.session().await?;
        let domains = session
            .registrar
            .list_domains(session.account_id)
            .await?;

        let domains: Vec<DomainSummary> = domains.iter().map(DomainSummary::from).collect();
        Ok(ListDomainsResult {
            account_id: session.account_id,
            count: domains.len(),
            domains,
        })
    }
}

/// The domain-selection rule shared by the pricing operations.
///
/// An omitted or empty list selects every domain in the account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DomainSelection {
    All,
    Named(Vec<String>),
}

impl DomainSelection {
    /// Validate caller-supplied names. Makes no registrar call.
    pub(crate) fn parse(names: Option<Vec<String>>) -> CoreResult<Self> {
        let names = names.unwrap_or_default();
        if names.is_empty() {
            return Ok(Self::All);
        }
        names
            .iter()
            .map(|raw| validation::domain_name(raw))
            .collect::<CoreResult<Vec<_>>>()
            .map(Self::Named)
    }

    /// Turn the selection into concrete domains, listing the account for `All`.
    pub(crate) async fn resolve(self, session: &Session) -> CoreResult<Vec<SelectedDomain>> {
        match self {
            Self::All => {
                let domains = session
                    .registrar
                    .list_domains(session.account_id)
                    .await?;
                Ok(domains
                    .into_iter()
                    .map(|d| SelectedDomain {
                        name: d.name.clone(),
                        domain: Some(d),
                    })
                    .collect())
            }
            Self::Named(names) => Ok(names
                .into_iter()
                .map(|name| SelectedDomain { name, domain: None })
                .collect()),
        }
    }
}
