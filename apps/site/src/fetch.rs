//! Upstream retrieval of the CV document.
//!
//! `AppState` holds an `Arc<dyn DocumentSource>` so the pipeline and the
//! router tests can run against a stub instead of a live upstream.

use async_trait::async_trait;
use reqwest::Client;

use crate::errors::AppError;

/// The response body of the upstream document, before parsing.
#[derive(Debug, Clone)]
pub struct RawDocument(pub String);

#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Issues the single GET for the CV document.
    ///
    /// A non-success status is `AppError::FetchFailed`; a transport failure
    /// is `AppError::Network`. No retry in either case.
    async fn fetch_raw(&self) -> Result<RawDocument, AppError>;
}

/// Production source: one GET against the configured document URL.
pub struct HttpDocumentSource {
    http: Client,
    url: String,
}

impl HttpDocumentSource {
    pub fn new(http: Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }
}

#[async_trait]
impl DocumentSource for HttpDocumentSource {
    async fn fetch_raw(&self) -> Result<RawDocument, AppError> {
        let response = self.http.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::FetchFailed(format!(
                "{} returned {status}",
                self.url
            )));
        }
        Ok(RawDocument(response.text().await?))
    }
}
