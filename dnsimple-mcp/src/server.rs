//! MCP Server implementation for DNSimple.
//!
//! Exposes 10 tools backed by the core operation dispatcher. Operation
//! failures come back as tool results flagged as errors, carrying
//! `{"error": "<operation>: <category>: <detail>"}`.

use std::sync::Arc;

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};

use dnsimple_core::{OperationDispatcher, OperationRequest, ServiceContext};

use crate::schemas::{
    ConfigureDnsRecordParams, DeleteDnsRecordParams, DisableAutorenewParams,
    DomainSelectionParams, ListDnsRecordsParams, ListDomainsParams, TransferDomainParams,
    WhoisPrivacyParams,
};

/// Sanitize error messages to prevent sensitive information leakage.
///
/// Logs the full error to stderr but returns a generic message to the client.
fn sanitize_internal_error(error: impl std::fmt::Display, context: &str) -> McpError {
    tracing::error!("{context} error: {error}");
    McpError::internal_error(
        format!("{context} failed - check server logs for details"),
        None,
    )
}

/// MCP Server for DNSimple.
///
/// Gives AI agents domain listing, pricing, DNS record and registrar
/// operations on the account the API token belongs to.
#[derive(Clone)]
pub struct DnsimpleMcp {
    /// Routes each tool call to its operation handler.
    dispatcher: Arc<OperationDispatcher>,
    /// Tool router generated by macro.
    tool_router: ToolRouter<Self>,
}

impl DnsimpleMcp {
    /// Create a new MCP server instance.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            dispatcher: Arc::new(OperationDispatcher::new(ctx)),
            tool_router: Self::tool_router(),
        }
    }

    /// Dispatch one operation and wrap its outcome as a tool result.
    async fn run(&self, request: OperationRequest) -> Result<CallToolResult, McpError> {
        let operation = request.operation();
        match self.dispatcher.dispatch(request).await {
            Ok(value) => {
                let json = serde_json::to_string_pretty(&value).map_err(|e| {
                    sanitize_internal_error(e, &format!("Serialize {operation} result"))
                })?;
                Ok(CallToolResult::success(vec![Content::text(json)]))
            }
            Err(payload) => {
                let json = serde_json::to_string(&payload).map_err(|e| {
                    sanitize_internal_error(e, &format!("Serialize {operation} error"))
                })?;
                Ok(CallToolResult::error(vec![Content::text(json)]))
            }
        }
    }
}

#[tool_router]
impl DnsimpleMcp {
    #[tool(
        description = "List all domains in the DNSimple account with expiry date, auto-renew flag and registrant id"
    )]
    async fn list_domains(
        &self,
        Parameters(params): Parameters<ListDomainsParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run(OperationRequest::ListDomains(params)).await
    }

    #[tool(
        description = "Get register, renew and transfer prices (USD) for the given domains, or for every domain in the account when none are given"
    )]
    async fn get_domain_costs(
        &self,
        Parameters(params): Parameters<DomainSelectionParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run(OperationRequest::GetDomainCosts(params)).await
    }

    #[tool(
        description = "Get the annual renewal price per domain and the total renewal cost (USD); domains that cannot be priced are flagged and left out of the total"
    )]
    async fn get_renewal_costs(
        &self,
        Parameters(params): Parameters<DomainSelectionParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run(OperationRequest::GetRenewalCosts(params)).await
    }

    #[tool(
        description = "List DNS records in a zone, optionally filtered by exact record name (use @ for the apex) and type"
    )]
    async fn list_dns_records(
        &self,
        Parameters(params): Parameters<ListDnsRecordsParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run(OperationRequest::ListDnsRecords(params)).await
    }

    #[tool(
        description = "Create a DNS record, or update it if exactly one record with the same name and type exists. Types: A, AAAA, CNAME, MX, TXT, NS, SRV, ALIAS. TTL 60-604800 (default 3600); priority required for MX and SRV"
    )]
    async fn configure_dns_record(
        &self,
        Parameters(params): Parameters<ConfigureDnsRecordParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run(OperationRequest::ConfigureDnsRecord(params)).await
    }

    #[tool(description = "Delete a DNS record by its id")]
    async fn delete_dns_record(
        &self,
        Parameters(params): Parameters<DeleteDnsRecordParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run(OperationRequest::DeleteDnsRecord(params)).await
    }

    #[tool(
        description = "Turn off auto-renewal for each listed domain; every domain reports its own outcome"
    )]
    async fn disable_autorenew(
        &self,
        Parameters(params): Parameters<DisableAutorenewParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run(OperationRequest::DisableAutorenew(params)).await
    }

    #[tool(
        description = "Start transferring a domain into the account using its authorization code; the domain must be unlocked at the current registrar"
    )]
    async fn transfer_domain(
        &self,
        Parameters(params): Parameters<TransferDomainParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run(OperationRequest::TransferDomain(params)).await
    }

    #[tool(description = "Show whether WHOIS privacy is enabled for a domain")]
    async fn get_whois_privacy(
        &self,
        Parameters(params): Parameters<WhoisPrivacyParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run(OperationRequest::GetWhoisPrivacy(params)).await
    }

    #[tool(
        description = "Enable WHOIS privacy for a domain, purchasing it if needed; does nothing when already enabled"
    )]
    async fn enable_whois_privacy(
        &self,
        Parameters(params): Parameters<WhoisPrivacyParams>,
    ) -> Result<CallToolResult, McpError> {
        self.run(OperationRequest::EnableWhoisPrivacy(params)).await
    }
}

#[tool_handler]
impl ServerHandler for DnsimpleMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "DNSimple MCP Server - Manage the domains of one DNSimple account. \
                 Use list_domains to see domains, get_domain_costs and get_renewal_costs for pricing, \
                 list_dns_records, configure_dns_record and delete_dns_record for DNS, \
                 and disable_autorenew, transfer_domain, get_whois_privacy and enable_whois_privacy \
                 for registrar settings. Failed calls return {\"error\": \"...\"}."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
#[path = "test_mocks.rs"]
#[allow(clippy::unwrap_used, clippy::panic)]
pub(crate) mod test_mocks;

#[cfg(test)]
#[path = "server_tests.rs"]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests;

#[cfg(test)]
#[path = "client_integration_tests.rs"]
#[allow(clippy::unwrap_used, clippy::panic)]
mod client_integration_tests;
