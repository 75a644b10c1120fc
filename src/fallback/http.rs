use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::SemanticFallback;
use super::error::{FallbackError, FallbackResult};

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    master_key: Option<String>,
}

/// Fallback backed by an HTTP search service.
///
/// Sends `POST {base_url}/search` with `{"text": ...}` and expects
/// `{"master_key": ...}` back.
#[derive(Debug, Clone)]
pub struct HttpSemanticFallback {
    client: reqwest::Client,
    search_url: String,
}

impl HttpSemanticFallback {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: impl AsRef<str>, client: reqwest::Client) -> Self {
        let base_url = base_url.as_ref().trim_end_matches('/');
        Self {
            client,
            search_url: format!("{base_url}/search"),
        }
    }

    pub fn search_url(&self) -> &str {
        &self.search_url
    }
}

impl SemanticFallback for HttpSemanticFallback {
    #[instrument(skip_all, fields(url = %self.search_url))]
    async fn search(&self, text: &str) -> FallbackResult<String> {
        let response = self
            .client
            .post(&self.search_url)
            .json(&SearchRequest { text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FallbackError::Status {
                status: status.as_u16(),
                url: self.search_url.clone(),
            });
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| FallbackError::InvalidResponse(e.to_string()))?;

        let master_key = body
            .master_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| FallbackError::InvalidResponse("missing master_key".to_string()))?;

        debug!(%master_key, "fallback returned provisional key");
        Ok(master_key)
    }
}
