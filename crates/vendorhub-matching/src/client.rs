//! HTTP client for the remote supplier matching endpoint.
//!
//! Wraps `reqwest` with a single `POST` operation. The endpoint receives the
//! search form as JSON and answers with a JSON list of supplier records,
//! which is decoded leniently into [`SupplierMatch`] values.

use std::time::Duration;

use reqwest::{Client, Url};
use vendorhub_core::{AppConfig, SearchRequest, SupplierMatch};

use crate::error::MatchingError;

/// Client for the remote matching service.
///
/// Use [`MatchingClient::from_config`] in the binary or
/// [`MatchingClient::new`] to point at a mock server in tests.
pub struct MatchingClient {
    client: Client,
    endpoint: Url,
}

impl MatchingClient {
    /// Creates a client for `endpoint`.
    ///
    /// `timeout_secs` of `None` leaves the request without a deadline, so a
    /// search waits for as long as the service takes to settle.
    ///
    /// # Errors
    ///
    /// Returns [`MatchingError::InvalidEndpoint`] if `endpoint` is not an
    /// absolute `http`/`https` URL, or [`MatchingError::Http`] if the
    /// underlying `reqwest::Client` cannot be constructed.
    pub fn new(
        endpoint: &str,
        user_agent: &str,
        timeout_secs: Option<u64>,
    ) -> Result<Self, MatchingError> {
        let endpoint_url = Url::parse(endpoint).map_err(|e| MatchingError::InvalidEndpoint {
            endpoint: endpoint.to_owned(),
            reason: e.to_string(),
        })?;
        if !matches!(endpoint_url.scheme(), "http" | "https") {
            return Err(MatchingError::InvalidEndpoint {
                endpoint: endpoint.to_owned(),
                reason: format!("unsupported scheme '{}'", endpoint_url.scheme()),
            });
        }

        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint: endpoint_url,
        })
    }

    /// Creates a client from the endpoint, user agent and timeout in `config`.
    ///
    /// # Errors
    ///
    /// Same as [`MatchingClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, MatchingError> {
        Self::new(
            &config.endpoint,
            &config.user_agent,
            config.request_timeout_secs,
        )
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Posts the search form and returns the suppliers in service order.
    ///
    /// An empty list is a valid answer. Records are read with
    /// [`SupplierMatch::from_value`], so a record with missing or mistyped
    /// fields does not fail the call.
    ///
    /// # Errors
    ///
    /// - [`MatchingError::Http`] if the request cannot be sent or the body
    ///   cannot be read.
    /// - [`MatchingError::UnexpectedStatus`] on any non-2xx status.
    /// - [`MatchingError::Deserialize`] if the body is not a JSON list.
    pub async fn find_suppliers(
        &self,
        request: &SearchRequest,
    ) -> Result<Vec<SupplierMatch>, MatchingError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            product = %request.product,
            quantity = %request.quantity,
            location = %request.location,
            "posting supplier search"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MatchingError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.endpoint.to_string(),
            });
        }

        let body = response.text().await?;
        let records = decode_suppliers(&body).map_err(|e| MatchingError::Deserialize {
            context: self.endpoint.to_string(),
            source: e,
        })?;

        tracing::debug!(count = records.len(), "decoded supplier matches");
        Ok(records)
    }
}

/// Decodes a response body into supplier records.
///
/// The body must be a JSON array; each element is read independently.
fn decode_suppliers(body: &str) -> Result<Vec<SupplierMatch>, serde_json::Error> {
    let values: Vec<serde_json::Value> = serde_json::from_str(body)?;
    Ok(values.iter().map(SupplierMatch::from_value).collect())
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
