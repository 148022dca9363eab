//! Registrar operations: auto-renewal, transfers, WHOIS privacy

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{
    AutorenewEntry, AutorenewStatus, DisableAutorenewParams, DisableAutorenewResult,
    EnableWhoisPrivacyResult, TransferDomainParams, TransferDomainResult, TransferRequest,
    WhoisPrivacyAction, WhoisPrivacyParams, WhoisPrivacyResult,
};
use crate::utils::validation;

/// Registrar operations service
pub struct RegistrarService {
    ctx: Arc<ServiceContext>,
}

impl RegistrarService {
    /// Create a registrar service instance
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Turn auto-renewal off for each domain independently.
    ///
    /// The call succeeds as long as the list is non-empty; each entry reports
    /// its own outcome.
    pub async fn disable_autorenew(
        &self,
        params: DisableAutorenewParams,
    ) -> CoreResult<DisableAutorenewResult> {
        if params.domain_names.is_empty() {
            return Err(CoreError::ValidationError(
                "domain_names must contain at least one domain".to_string(),
            ));
        }

        let session = self.ctx.session().await?;
        let mut results = Vec::with_capacity(params.domain_names.len());
        for raw in &params.domain_names {
            let outcome = match validation::domain_name(raw) {
                Ok(domain) => session
                    .registrar
                    .disable_auto_renewal(session.account_id, &domain)
                    .await
                    .map(|()| domain)
                    .map_err(CoreError::from),
                Err(e) => Err(e),
            };

            results.push(match outcome {
                Ok(domain) => {
                    log::info!("Disabled auto-renewal for {domain}");
                    AutorenewEntry {
                        domain,
                        status: AutorenewStatus::Disabled,
                        error: None,
                    }
                }
                Err(e) => {
                    log::warn!("Could not disable auto-renewal for {raw}: {e}");
                    AutorenewEntry {
                        domain: raw.clone(),
                        status: AutorenewStatus::Error,
                        error: Some(e.to_string()),
                    }
                }
            });
        }

        Ok(DisableAutorenewResult { results })
    }

    /// Start an inbound transfer. Lock state is left to the registrar to enforce.
    pub async fn transfer_domain(
        &self,
        params: TransferDomainParams,
    ) -> CoreResult<TransferDomainResult> {
        let domain = validation::domain_name(&params.domain_name)?;
        let request = TransferRequest {
            auth_code: validation::required("auth_code", &params.auth_code)?,
            registrant_id: params
                .registrant_id
                .as_ref()
                .map(|id| validation::positive_id("registrant_id", id))
                .transpose()?,
        };

        let session = self.ctx.session().await?;
        let transfer = session
            .registrar
            .transfer_domain(session.account_id, &domain, &request)
            .await?;
        log::info!("Transfer {} started for {domain} ({})", transfer.id, transfer.state);

        Ok(TransferDomainResult {
            success: true,
            transfer: transfer.into(),
        })
    }

    /// Current WHOIS privacy state. A registrar 404 means privacy was never purchased.
    pub async fn whois_privacy(&self, params: WhoisPrivacyParams) -> CoreResult<WhoisPrivacyResult> {
        let domain = validation::domain_name(&params.domain_name)?;

        let session = self.ctx.session().await?;
        match session
            .registrar
            .get_whois_privacy(session.account_id, &domain)
            .await
            .map_err(CoreError::from)
        {
            Ok(status) => Ok(WhoisPrivacyResult {
                domain,
                enabled: status.enabled.unwrap_or(false),
                expires_on: status.expires_on.clone(),
                whois_privacy: Some(status),
                message: None,
            }),
            Err(CoreError::NotFound(_)) => Ok(WhoisPrivacyResult {
                domain,
                enabled: false,
                expires_on: None,
                whois_privacy: None,
                message: Some("WHOIS privacy has not been purchased for this domain".to_string()),
            }),
            Err(e) => Err(e),
        }
    }

    /// Enable WHOIS privacy, purchasing it if needed. No write when already enabled.
    pub async fn enable_whois_privacy(
        &self,
        params: WhoisPrivacyParams,
    ) -> CoreResult<EnableWhoisPrivacyResult> {
        let domain = validation::domain_name(&params.domain_name)?;

        let session = self.ctx.session().await?;
        match session
            .registrar
            .get_whois_privacy(session.account_id, &domain)
            .await
            .map_err(CoreError::from)
        {
            Ok(status) if status.enabled == Some(true) => {
                return Ok(EnableWhoisPrivacyResult {
                    success: None,
                    domain,
                    status: WhoisPrivacyAction::AlreadyEnabled,
                    message: "WHOIS privacy is already enabled".to_string(),
                    whois_privacy: status,
                });
            }
            Ok(_) | Err(CoreError::NotFound(_)) => {}
            Err(e) => return Err(e),
        }

        let status = session
            .registrar
            .enable_whois_privacy(session.account_id, &domain)
            .await?;
        log::info!("Enabled WHOIS privacy for {domain}");

        Ok(EnableWhoisPrivacyResult {
            success: Some(true),
            domain,
            status: WhoisPrivacyAction::Enabled,
            message: "WHOIS privacy enabled".to_string(),
            whois_privacy: status,
        })
    }
}
