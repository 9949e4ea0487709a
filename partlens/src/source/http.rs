//! HTTP client for a remote vision-analysis endpoint.
//!
//! The endpoint accepts raw image bytes on `POST {base}/analyze` and returns
//! an [`AnalysisSnapshot`] as JSON; `GET {base}/health` serves as the
//! availability probe.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::{AnalysisSnapshot, SourceOptions, VisionError, VisionSource};

const DEFAULT_BASE_URL: &str = "http://localhost:8090";
const ANALYZE_TIMEOUT_SECS: u64 = 30;

pub struct HttpSource {
    client: Client,
    base_url: String,
    options: SourceOptions,
}

impl HttpSource {
    /// Create a source against the default local endpoint.
    pub fn new(base_url: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(ANALYZE_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            options: SourceOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SourceOptions) -> Self {
        self.options = options;
        self
    }
}

#[async_trait]
impl VisionSource for HttpSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn is_available(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::warn!("vision endpoint {} unreachable: {}", self.base_url, e);
                false
            }
        }
    }

    async fn analyze(&self, image: &[u8]) -> Result<AnalysisSnapshot, VisionError> {
        let url = format!("{}/analyze", self.base_url);
        let response = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(image.to_vec())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(VisionError::ApiError {
                status: response.status().as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let snapshot: AnalysisSnapshot = response
            .json()
            .await
            .map_err(|e| VisionError::Parse(e.to_string()))?;

        Ok(self.options.apply(snapshot))
    }
}
