//! DNSimple HTTP request methods

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::types::{DataResponse, PaginatedResponse};
use crate::utils::log_sanitizer::{redact_secret, truncate_for_log};

use super::{DnsimpleClient, MAX_PAGE_SIZE};

impl DnsimpleClient {
    /// Send one request and return the body of a 2xx answer.
    ///
    /// Any other status is mapped through [`ProviderErrorMapper`] with the
    /// token scrubbed from the registrar's message.
    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
        context: ErrorContext,
    ) -> Result<String> {
        let url = format!("{}{path}", self.base_url);
        let mut request = self
            .client
            .request(method.clone(), &url)
            .bearer_auth(&self.api_token)
            .header("Accept", "application/json");
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            let body_json =
                serde_json::to_string(body).map_err(|e| ProviderError::SerializationError {
                    detail: e.to_string(),
                })?;
            log::debug!("[dnsimple] Request Body: {} bytes", body_json.len());
            request = request
                .header("Content-Type", "application/json")
                .body(body_json);
        }

        let (status, text) = HttpUtils::execute_request(request, method.as_str(), path).await?;

        if (200..300).contains(&status) {
            return Ok(text);
        }

        let message = redact_secret(&HttpUtils::error_message(status, &text), &self.api_token);
        let err = self.map_error(RawApiError::new(status, message), context);
        if err.is_expected() {
            log::warn!("[dnsimple] {method} {path} failed: {err}");
        } else {
            log::error!("[dnsimple] {method} {path} failed: {err}");
        }
        Err(err)
    }

    fn unwrap_data<T: DeserializeOwned>(&self, text: &str) -> Result<T> {
        let envelope: DataResponse<T> = serde_json::from_str(text).map_err(|e| {
            log::error!("[dnsimple] Unexpected response: {}", truncate_for_log(text));
            self.parse_error(e)
        })?;
        Ok(envelope.data)
    }

    /// Execute GET request
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        context: ErrorContext,
    ) -> Result<T> {
        let text = self
            .send::<()>(Method::GET, path, &[], None, context)
            .await?;
        self.unwrap_data(&text)
    }

    /// Execute GET request over every page of a list endpoint.
    ///
    /// `query` is sent on every page alongside `page` and `per_page`.
    pub(crate) async fn get_all_pages<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        context: ErrorContext,
    ) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut page: u32 = 1;

        loop {
            let mut page_query: Vec<(&str, String)> = query.to_vec();
            page_query.push(("page", page.to_string()));
            page_query.push(("per_page", MAX_PAGE_SIZE.to_string()));

            let text = self
                .send::<()>(Method::GET, path, &page_query, None, context.clone())
                .await?;
            let response: PaginatedResponse<T> = HttpUtils::parse_json(&text)?;
            items.extend(response.data);

            match response.pagination {
                Some(p) if p.current_page < p.total_pages => page = p.current_page + 1,
                _ => break,
            }
        }

        Ok(items)
    }

    /// Execute POST request
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        context: ErrorContext,
    ) -> Result<T> {
        let text = self
            .send(Method::POST, path, &[], Some(body), context)
            .await?;
        self.unwrap_data(&text)
    }

    /// Execute PATCH request
    pub(crate) async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        context: ErrorContext,
    ) -> Result<T> {
        let text = self
            .send(Method::PATCH, path, &[], Some(body), context)
            .await?;
        self.unwrap_data(&text)
    }

    /// Execute PUT request without a body
    pub(crate) async fn put_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        context: ErrorContext,
    ) -> Result<T> {
        let text = self
            .send::<()>(Method::PUT, path, &[], None, context)
            .await?;
        self.unwrap_data(&text)
    }

    /// Execute DELETE request; the response body (usually empty) is ignored.
    pub(crate) async fn delete(&self, path: &str, context: ErrorContext) -> Result<()> {
        self.send::<()>(Method::DELETE, path, &[], None, context)
            .await?;
        Ok(())
    }
}
