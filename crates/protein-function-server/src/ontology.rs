//! GO term name lookup against a QuickGO-compatible ontology service.
//!
//! Lookups are best effort: every failure resolves to the unknown-term
//! sentinel and never fails the prediction.

use std::time::Duration;

use serde::Deserialize;

use protein_function::UNKNOWN_GO_TERM;

use crate::types::{ServiceError, ServiceResult};

#[derive(Deserialize)]
struct TermsResponse {
    results: Vec<TermResult>,
}

#[derive(Deserialize)]
struct TermResult {
    name: String,
}

/// Why a lookup fell back to the sentinel.
#[derive(thiserror::Error, Debug)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(String),
}

/// HTTP client for the ontology service.
#[derive(Clone)]
pub struct OntologyClient {
    client: reqwest::Client,
    base_url: String,
}

impl OntologyClient {
    /// Create a client. `timeout` bounds each lookup end to end.
    pub fn new(base_url: &str, timeout: Duration) -> ServiceResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("protein-function-server/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ServiceError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve the display name for a GO term, or the sentinel on any failure.
    pub async fn term_name(&self, go_term: &str) -> String {
        match self.lookup(go_term).await {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!("GO term lookup for {go_term} failed: {e}");
                UNKNOWN_GO_TERM.to_string()
            }
        }
    }

    /// Fetch the display name for a GO term. No retries.
    pub async fn lookup(&self, go_term: &str) -> Result<String, LookupError> {
        let url = format!("{}/terms/{go_term}", self.base_url);
        let resp = self.client.get(&url).send().await?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body: TermsResponse = resp
            .json()
            .await
            .map_err(|e| LookupError::Malformed(e.to_string()))?;

        body.results
            .into_iter()
            .next()
            .map(|term| term.name)
            .ok_or_else(|| LookupError::Malformed("empty results".to_string()))
    }
}
