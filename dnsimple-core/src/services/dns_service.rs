//! DNS record management service

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::{
    ConfigureDnsRecordParams, ConfigureDnsRecordResult, DeleteDnsRecordParams,
    DeleteDnsRecordResult, ListDnsRecordsParams, ListDnsRecordsResult, RecordAction,
    RecordFilter, RecordSummary, ZoneRecord, ZoneRecordRequest,
};
use crate::utils::validation;

/// DNS record management service
pub struct DnsService {
    ctx: Arc<ServiceContext>,
}

impl DnsService {
    /// Create a DNS service instance
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// List records in a zone, optionally narrowed by exact name and type.
    pub async fn list_records(&self, params: ListDnsRecordsParams) -> CoreResult<ListDnsRecordsResult> {
        let domain = validation::domain_name(&params.domain_name)?;
        let filter = RecordFilter {
            name: params
                .name
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(validation::record_name),
            record_type: params
                .record_type
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_ascii_uppercase),
        };

        let session = self.ctx.session().await?;
        let records = session
            .registrar
            .list_zone_records(session.account_id, &domain, &filter)
            .await?;

        let records: Vec<RecordSummary> = records
            .into_iter()
            .filter(|r| matches_filter(r, &filter))
            .map(RecordSummary::from)
            .collect();

        Ok(ListDnsRecordsResult {
            domain,
            count: records.len(),
            records,
        })
    }

    /// Create the `(name, type)` record, or update it when exactly one exists.
    pub async fn configure_record(
        &self,
        params: ConfigureDnsRecordParams,
    ) -> CoreResult<ConfigureDnsRecordResult> {
        let domain = validation::domain_name(&params.domain_name)?;
        let record_type = validation::record_type(&params.record_type)?;
        let request = ZoneRecordRequest {
            name: validation::record_name(&params.name),
            record_type,
            content: validation::non_blank("content", &params.content)?,
            ttl: validation::ttl(params.ttl)?,
            priority: validation::priority(record_type, params.priority)?,
        };

        let session = self.ctx.session().await?;
        let filter = RecordFilter {
            name: Some(request.name.clone()),
            record_type: Some(record_type.as_str().to_string()),
        };
        let existing: Vec<ZoneRecord> = session
            .registrar
            .list_zone_records(session.account_id, &domain, &filter)
            .await?
            .into_iter()
            .filter(|r| matches_filter(r, &filter))
            .collect();

        let (action, record) = match existing.as_slice() {
            [] => {
                let record = session
                    .registrar
                    .create_zone_record(session.account_id, &domain, &request)
                    .await?;
                log::info!("Created {record_type} record {} in {domain}", record.id);
                (RecordAction::Created, record)
            }
            [current] => {
                let record = session
                    .registrar
                    .update_zone_record(session.account_id, &domain, current.id, &request)
                    .await?;
                log::info!("Updated {record_type} record {} in {domain}", record.id);
                (RecordAction::Updated, record)
            }
            many => {
                let ids: Vec<String> = many.iter().map(|r| r.id.to_string()).collect();
                return Err(CoreError::ValidationError(format!(
                    "{} {record_type} records named '{}' exist in {domain} (ids: {}); \
                     delete the extras before configuring",
                    many.len(),
                    display_name(&request.name),
                    ids.join(", ")
                )));
            }
        };

        Ok(ConfigureDnsRecordResult {
            success: true,
            action,
            record: record.into(),
        })
    }

    /// Delete one record by id.
    pub async fn delete_record(
        &self,
        params: DeleteDnsRecordParams,
    ) -> CoreResult<DeleteDnsRecordResult> {
        let domain = validation::domain_name(&params.domain_name)?;
        let record_id = validation::positive_id("record_id", &params.record_id)?;

        let session = self.ctx.session().await?;
        session
            .registrar
            .delete_zone_record(session.account_id, &domain, record_id)
            .await?;
        log::info!("Deleted record {record_id} from {domain}");

        Ok(DeleteDnsRecordResult {
            success: true,
            message: format!("Record {record_id} deleted from {domain}"),
        })
    }
}

fn matches_filter(record: &ZoneRecord, filter: &RecordFilter) -> bool {
    filter.name.as_ref().is_none_or(|n| record.name == *n)
        && filter
            .record_type
            .as_ref()
            .is_none_or(|t| record.record_type.eq_ignore_ascii_case(t))
}

fn display_name(name: &str) -> &str {
    if name.is_empty() {
        "@"
    } else {
        name
    }
}
