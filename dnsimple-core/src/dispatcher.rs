//! Operation dispatch
//!
//! A fixed table from operation name to handler. Every call ends either in a
//! JSON result or in an [`ErrorPayload`] of the form
//! `{"error": "<operation>: <category>: <detail>"}`.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{CoreError, CoreResult};
use crate::services::{DnsService, DomainService, PricingService, RegistrarService, ServiceContext};
use crate::types::{
    ConfigureDnsRecordParams, DeleteDnsRecordParams, DisableAutorenewParams,
    DomainSelectionParams, ListDnsRecordsParams, ListDomainsParams, TransferDomainParams,
    WhoisPrivacyParams,
};

/// Every operation the adapter exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListDomains,
    GetDomainCosts,
    GetRenewalCosts,
    ListDnsRecords,
    ConfigureDnsRecord,
    DeleteDnsRecord,
    DisableAutorenew,
    TransferDomain,
    GetWhoisPrivacy,
    EnableWhoisPrivacy,
}

impl Operation {
    pub const ALL: [Self; 10] = [
        Self::ListDomains,
        Self::GetDomainCosts,
        Self::GetRenewalCosts,
        Self::ListDnsRecords,
        Self::ConfigureDnsRecord,
        Self::DeleteDnsRecord,
        Self::DisableAutorenew,
        Self::TransferDomain,
        Self::GetWhoisPrivacy,
        Self::EnableWhoisPrivacy,
    ];

    /// Wire name of the operation.
    pub fn name(self) -> &'static str {
        match self {
            Self::ListDomains => "list_domains",
            Self::GetDomainCosts => "get_domain_costs",
            Self::GetRenewalCosts => "get_renewal_costs",
            Self::ListDnsRecords => "list_dns_records",
            Self::ConfigureDnsRecord => "configure_dns_record",
            Self::DeleteDnsRecord => "delete_dns_record",
            Self::DisableAutorenew => "disable_autorenew",
            Self::TransferDomain => "transfer_domain",
            Self::GetWhoisPrivacy => "get_whois_privacy",
            Self::EnableWhoisPrivacy => "enable_whois_privacy",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| CoreError::UnknownOperation(s.to_string()))
    }
}

/// A typed operation invocation.
#[derive(Debug, Clone)]
pub enum OperationRequest {
    ListDomains(ListDomainsParams),
    GetDomainCosts(DomainSelectionParams),
    GetRenewalCosts(DomainSelectionParams),
    ListDnsRecords(ListDnsRecordsParams),
    ConfigureDnsRecord(ConfigureDnsRecordParams),
    DeleteDnsRecord(DeleteDnsRecordParams),
    DisableAutorenew(DisableAutorenewParams),
    TransferDomain(TransferDomainParams),
    GetWhoisPrivacy(WhoisPrivacyParams),
    EnableWhoisPrivacy(WhoisPrivacyParams),
}

impl OperationRequest {
    /// Build a request from an operation and its raw JSON arguments.
    ///
    /// `null` arguments are treated as `{}`. Arguments that do not fit the
    /// operation's schema are a `ValidationError`.
    pub fn from_call(operation: Operation, arguments: Value) -> CoreResult<Self> {
        let arguments = if arguments.is_null() {
            Value::Object(serde_json::Map::new())
        } else {
            arguments
        };

        Ok(match operation {
            Operation::ListDomains => Self::ListDomains(parse(arguments)?),
            Operation::GetDomainCosts => Self::GetDomainCosts(parse(arguments)?),
            Operation::GetRenewalCosts => Self::GetRenewalCosts(parse(arguments)?),
            Operation::ListDnsRecords => Self::ListDnsRecords(parse(arguments)?),
            Operation::ConfigureDnsRecord => Self::ConfigureDnsRecord(parse(arguments)?),
            Operation::DeleteDnsRecord => Self::DeleteDnsRecord(parse(arguments)?),
            Operation::DisableAutorenew => Self::DisableAutorenew(parse(arguments)?),
            Operation::TransferDomain => Self::TransferDomain(parse(arguments)?),
            Operation::GetWhoisPrivacy => Self::GetWhoisPrivacy(parse(arguments)?),
            Operation::EnableWhoisPrivacy => Self::EnableWhoisPrivacy(parse(arguments)?),
        })
    }

    pub fn operation(&self) -> Operation {
        match self {
            Self::ListDomains(_) => Operation::ListDomains,
            Self::GetDomainCosts(_) => Operation::GetDomainCosts,
            Self::GetRenewalCosts(_) => Operation::GetRenewalCosts,
            Self::ListDnsRecords(_) => Operation::ListDnsRecords,
            Self::ConfigureDnsRecord(_) => Operation::ConfigureDnsRecord,
            Self::DeleteDnsRecord(_) => Operation::DeleteDnsRecord,
            Self::DisableAutorenew(_) => Operation::DisableAutorenew,
            Self::TransferDomain(_) => Operation::TransferDomain,
            Self::GetWhoisPrivacy(_) => Operation::GetWhoisPrivacy,
            Self::EnableWhoisPrivacy(_) => Operation::EnableWhoisPrivacy,
        }
    }
}

fn parse<P: DeserializeOwned>(arguments: Value) -> CoreResult<P> {
    serde_json::from_value(arguments)
        .map_err(|e| CoreError::ValidationError(format!("invalid arguments: {e}")))
}

fn to_json<T: Serialize>(result: &T) -> CoreResult<Value> {
    serde_json::to_value(result).map_err(|e| CoreError::SerializationError(e.to_string()))
}

/// Uniform failure shape returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorPayload {
    pub error: String,
}

impl ErrorPayload {
    fn new(operation: Operation, err: &CoreError) -> Self {
        Self {
            error: format!("{operation}: {err}"),
        }
    }
}

impl fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.error)
    }
}

/// Routes operation requests to their handlers.
pub struct OperationDispatcher {
    domains: DomainService,
    pricing: PricingService,
    dns: DnsService,
    registrar: RegistrarService,
}

impl OperationDispatcher {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            domains: DomainService::new(Arc::clone(&ctx)),
            pricing: PricingService::new(Arc::clone(&ctx)),
            dns: DnsService::new(Arc::clone(&ctx)),
            registrar: RegistrarService::new(ctx),
        }
    }

    /// Run one operation and return its JSON result.
    pub async fn execute(&self, request: OperationRequest) -> CoreResult<Value> {
        match request {
            OperationRequest::ListDomains(_) => to_json(&self.domains.list_domains().await?),
            OperationRequest::GetDomainCosts(p) => {
                to_json(&self.pricing.domain_costs(p.domain_names).await?)
            }
            OperationRequest::GetRenewalCosts(p) => {
                to_json(&self.pricing.renewal_costs(p.domain_names).await?)
            }
            OperationRequest::ListDnsRecords(p) => to_json(&self.dns.list_records(p).await?),
            OperationRequest::ConfigureDnsRecord(p) => {
                to_json(&self.dns.configure_record(p).await?)
            }
            OperationRequest::DeleteDnsRecord(p) => to_json(&self.dns.delete_record(p).await?),
            OperationRequest::DisableAutorenew(p) => {
                to_json(&self.registrar.disable_autorenew(p).await?)
            }
            OperationRequest::TransferDomain(p) => {
                to_json(&self.registrar.transfer_domain(p).await?)
            }
            OperationRequest::GetWhoisPrivacy(p) => {
                to_json(&self.registrar.whois_privacy(p).await?)
            }
            OperationRequest::EnableWhoisPrivacy(p) => {
                to_json(&self.registrar.enable_whois_privacy(p).await?)
            }
        }
    }

    /// Run one operation, shaping any failure into an [`ErrorPayload`].
    pub async fn dispatch(&self, request: OperationRequest) -> Result<Value, ErrorPayload> {
        let operation = request.operation();
        log::debug!("Dispatching {operation}");
        self.execute(request).await.map_err(|e| {
            if e.is_expected() {
                log::warn!("{operation} failed: {e}");
            } else {
                log::error!("{operation} failed: {e}");
            }
            ErrorPayload::new(operation, &e)
        })
    }

    /// Run an operation by name with raw JSON arguments.
    pub async fn invoke(&self, name: &str, arguments: Value) -> Result<Value, ErrorPayload> {
        let operation = name.parse::<Operation>().map_err(|e| {
            log::warn!("Rejected call: {e}");
            ErrorPayload {
                error: e.to_string(),
            }
        })?;
        let request = OperationRequest::from_call(operation, arguments).map_err(|e| {
            log::warn!("{operation} rejected: {e}");
            ErrorPayload::new(operation, &e)
        })?;
        self.dispatch(request).await
    }
}
