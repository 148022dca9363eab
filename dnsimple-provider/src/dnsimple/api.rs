//! DNSimple `RegistrarApi` trait implementation

use async_trait::async_trait;
use urlencoding::encode;

use crate::error::{ProviderError, Result};
use crate::traits::{ErrorContext, RegistrarApi};
use crate::types::{
    Account, Domain, DomainPrices, DomainTransfer, RecordFilter, TransferRequest, WhoamiData,
    WhoisPrivacy, ZoneRecord, ZoneRecordRequest,
};

use super::DnsimpleClient;

impl DnsimpleClient {
    fn registrar_path(account_id: u64, domain: &str, tail: &str) -> String {
        format!("/{account_id}/registrar/domains/{}/{tail}", encode(domain))
    }

    fn records_path(account_id: u64, zone: &str) -> String {
        format!("/{account_id}/zones/{}/records", encode(zone))
    }
}

#[async_trait]
impl RegistrarApi for DnsimpleClient {
    async fn discover_account_id(&self) -> Result<u64> {
        let whoami: WhoamiData = self
            .get("/whoami", ErrorContext::default())
            .await
            .map_err(|e| match e {
                ProviderError::ParseError { detail } => ProviderError::AccountUnavailable {
                    detail: format!("invalid /whoami response: {detail}"),
                },
                other => other,
            })?;

        if let Some(account) = whoami.account {
            log::debug!("[dnsimple] Using account {} from /whoami", account.id);
            return Ok(account.id);
        }

        let accounts: Vec<Account> = self
            .get("/accounts", ErrorContext::default())
            .await
            .map_err(|e| match e {
                ProviderError::ParseError { detail } => ProviderError::AccountUnavailable {
                    detail: format!("invalid /accounts response: {detail}"),
                },
                other => other,
            })?;

        let account = accounts
            .first()
            .ok_or_else(|| ProviderError::AccountUnavailable {
                detail: "no accounts found for this token".to_string(),
            })?;
        log::debug!("[dnsimple] Using first of {} accounts", accounts.len());
        Ok(account.id)
    }

    async fn list_domains(&self, account_id: u64) -> Result<Vec<Domain>> {
        self.get_all_pages(
            &format!("/{account_id}/domains"),
            &[],
            ErrorContext::default(),
        )
        .await
    }

    async fn get_domain(&self, account_id: u64, domain: &str) -> Result<Domain> {
        self.get(
            &format!("/{account_id}/domains/{}", encode(domain)),
            ErrorContext::domain(domain),
        )
        .await
    }

    async fn list_zone_records(
        &self,
        account_id: u64,
        zone: &str,
        filter: &RecordFilter,
    ) -> Result<Vec<ZoneRecord>> {
        let mut query = Vec::new();
        if let Some(name) = &filter.name {
            query.push(("name", name.clone()));
        }
        if let Some(record_type) = &filter.record_type {
            query.push(("type", record_type.clone()));
        }
        self.get_all_pages(
            &Self::records_path(account_id, zone),
            &query,
            ErrorContext::domain(zone),
        )
        .await
    }

    async fn create_zone_record(
        &self,
        account_id: u64,
        zone: &str,
        record: &ZoneRecordRequest,
    ) -> Result<ZoneRecord> {
        self.post(
            &Self::records_path(account_id, zone),
            record,
            ErrorContext::domain(zone),
        )
        .await
    }

    async fn update_zone_record(
        &self,
        account_id: u64,
        zone: &str,
        record_id: u64,
        record: &ZoneRecordRequest,
    ) -> Result<ZoneRecord> {
        self.patch(
            &format!("{}/{record_id}", Self::records_path(account_id, zone)),
            record,
            ErrorContext::record(zone, record_id),
        )
        .await
    }

    async fn delete_zone_record(
        &self,
        account_id: u64,
        zone: &str,
        record_id: u64,
    ) -> Result<()> {
        self.delete(
            &format!("{}/{record_id}", Self::records_path(account_id, zone)),
            ErrorContext::record(zone, record_id),
        )
        .await
    }

    async fn get_domain_prices(&self, account_id: u64, domain: &str) -> Result<DomainPrices> {
        let mut prices: DomainPrices = self
            .get(
                &Self::registrar_path(account_id, domain, "prices"),
                ErrorContext::domain(domain),
            )
            .await?;
        if prices.domain.is_empty() {
            prices.domain = domain.to_string();
        }
        Ok(prices)
    }

    async fn disable_auto_renewal(&self, account_id: u64, domain: &str) -> Result<()> {
        self.delete(
            &Self::registrar_path(account_id, domain, "auto_renewal"),
            ErrorContext::domain(domain),
        )
        .await
    }

    async fn transfer_domain(
        &self,
        account_id: u64,
        domain: &str,
        request: &TransferRequest,
    ) -> Result<DomainTransfer> {
        self.post(
            &Self::registrar_path(account_id, domain, "transfers"),
            request,
            ErrorContext::domain(domain),
        )
        .await
    }

    async fn get_whois_privacy(&self, account_id: u64, domain: &str) -> Result<WhoisPrivacy> {
        self.get(
            &Self::registrar_path(account_id, domain, "whois_privacy"),
            ErrorContext::domain(domain),
        )
        .await
    }

    async fn enable_whois_privacy(&self, account_id: u64, domain: &str) -> Result<WhoisPrivacy> {
        self.put_empty(
            &Self::registrar_path(account_id, domain, "whois_privacy"),
            ErrorContext::domain(domain),
        )
        .await
    }
}
