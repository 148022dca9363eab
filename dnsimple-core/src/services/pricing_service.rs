//! Domain pricing service
//!
//! Both operations are batch operations: a failure for one domain lands in
//! that domain's entry and never aborts the rest.

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::domain_service::{DomainSelection, SelectedDomain};
use crate::services::{ServiceContext, Session};
use crate::types::{
    Domain, DomainCostEntry, DomainCostsResult, DomainPrices, DomainSummary, PriceEntry,
    PriceOperation, PricingStatus, RenewalCostEntry, RenewalCostsResult, PRICE_CURRENCY,
};

/// Domain pricing service
pub struct PricingService {
    ctx: Arc<ServiceContext>,
}

impl PricingService {
    /// Create a pricing service instance
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Register, renew and transfer prices for each selected domain.
    pub async fn domain_costs(&self, names: Option<Vec<String>>) -> CoreResult<DomainCostsResult> {
        let selection = DomainSelection::parse(names)?;
        let session = self.ctx.session().await?;
        let selected = selection.resolve(&session).await?;

        let mut entries = Vec::with_capacity(selected.len());
        for item in selected {
            let domain_info = known_or_lookup(&session, &item)
                .await
                .as_ref()
                .map(DomainSummary::from);

            let entry = match session
                .registrar
                .get_domain_prices(session.account_id, &item.name)
                .await
            {
                Ok(prices) => DomainCostEntry {
                    domain: item.name,
                    domain_info,
                    prices: price_entries(&prices),
                    error: None,
                },
                Err(e) => {
                    let e = CoreError::from(e);
                    log::warn!("Pricing lookup failed for {}: {e}", item.name);
                    DomainCostEntry {
                        domain: item.name,
                        domain_info,
                        prices: Vec::new(),
                        error: Some(e.to_string()),
                    }
                }
            };
            entries.push(entry);
        }

        Ok(DomainCostsResult {
            account_id: session.account_id,
            domains: entries,
        })
    }

    /// Annual renewal price per domain plus the total over priced domains.
    pub async fn renewal_costs(
        &self,
        names: Option<Vec<String>>,
    ) -> CoreResult<RenewalCostsResult> {
        let selection = DomainSelection::parse(names)?;
        let session = self.ctx.session().await?;
        let selected = selection.resolve(&session).await?;
        let total_domains = selected.len();

        let mut entries = Vec::with_capacity(total_domains);
        let mut total_cents: i64 = 0;
        for item in selected {
            let domain = known_or_lookup(&session, &item).await;
            let expires_at = domain
                .as_ref()
                .and_then(|d| d.expires_at.map(|t| t.to_rfc3339()));
            let auto_renew = domain.as_ref().map(|d| d.auto_renew);

            let entry = match session
                .registrar
                .get_domain_prices(session.account_id, &item.name)
                .await
            {
                Ok(prices) => {
                    total_cents += to_cents(prices.renewal_price);
                    RenewalCostEntry {
                        domain: item.name,
                        expires_at,
                        auto_renew,
                        renewal_price: Some(prices.renewal_price),
                        currency: Some(PRICE_CURRENCY.to_string()),
                        status: PricingStatus::Priced,
                        error: None,
                    }
                }
                Err(e) => {
                    let e = CoreError::from(e);
                    log::warn!("Renewal price lookup failed for {}: {e}", item.name);
                    RenewalCostEntry {
                        domain: item.name,
                        expires_at,
                        auto_renew,
                        renewal_price: None,
                        currency: None,
                        status: PricingStatus::Error,
                        error: Some(e.to_string()),
                    }
                }
            };
            entries.push(entry);
        }

        let priced_domains = entries
            .iter()
            .filter(|e| e.status == PricingStatus::Priced)
            .count();

        Ok(RenewalCostsResult {
            account_id: session.account_id,
            total_domains,
            priced_domains,
            total_annual_renewal_cost: from_cents(total_cents),
            currency: PRICE_CURRENCY.to_string(),
            domains: entries,
        })
    }
}

/// The domain record from the listing, or a lookup for caller-supplied names.
///
/// A failed lookup (typically a domain not in this account) yields `None`.
async fn known_or_lookup(session: &Session, item: &SelectedDomain) -> Option<Domain> {
    if let Some(domain) = &item.domain {
        return Some(domain.clone());
    }
    match session
        .registrar
        .get_domain(session.account_id, &item.name)
        .await
    {
        Ok(domain) => Some(domain),
        Err(e) => {
            log::debug!("No domain record for {}: {e}", item.name);
            None
        }
    }
}

fn price_entries(prices: &DomainPrices) -> Vec<PriceEntry> {
    [
        (PriceOperation::Register, prices.registration_price),
        (PriceOperation::Renew, prices.renewal_price),
        (PriceOperation::Transfer, prices.transfer_price),
    ]
    .into_iter()
    .map(|(operation, price)| PriceEntry {
        operation,
        price,
        currency: PRICE_CURRENCY.to_string(),
    })
    .collect()
}

#[allow(clippy::cast_possible_truncation)]
fn to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

#[allow(clippy::cast_precision_loss)]
fn from_cents(cents: i64) -> f64 {
    cents as f64 / 100.0
}
