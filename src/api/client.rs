use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::api::models::{BibleResponse, BibleSummary, BiblesResponse, Passage, PassageResponse};
use crate::api::text::clean_text;
use crate::core::reference::ScriptureReference;
use crate::registry::store::BookRegistry;
use crate::registry::translations;

/// Production API.Bible endpoint
pub const BASE_URL: &str = "https://rest.api.bible/v1";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("API key is required")]
    MissingKey,

    #[error("Invalid reference format")]
    InvalidReference,

    #[error("Verse not found in this translation")]
    VerseNotFound,

    #[error("Invalid or expired API key. Please check your BIBLE_API_KEY at https://scripture.api.bible")]
    Unauthorized,

    #[error("API error: {0}")]
    Status(StatusCode),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Client for the API.Bible passage service
///
/// Owns the HTTP connection pool and a memoized copy of the editions
/// listing; everything else is stateless.
pub struct BibleApiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    bibles: OnceCell<Vec<BibleSummary>>,
}

impl BibleApiClient {
    /// Create a client; the key is trimmed and must be non-empty
    pub fn new(api_key: &str) -> Result<Self, ApiError> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(ApiError::MissingKey);
        }

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            api_key: api_key.to_string(),
            base_url: BASE_URL.to_string(),
            bibles: OnceCell::new(),
        })
    }

    /// List available Bible editions
    ///
    /// Fetched once per client and memoized; a failed fetch is not cached,
    /// so the next call retries.
    pub async fn available_bibles(&self) -> Result<&[BibleSummary], ApiError> {
        let bibles = self
            .bibles
            .get_or_try_init(|| async {
                let response = self
                    .http
                    .get(format!("{}/bibles", self.base_url))
                    .header("api-key", &self.api_key)
                    .send()
                    .await?;

                let status = response.status();
                if !status.is_success() {
                    return Err(status_error(status));
                }

                let body: BiblesResponse = response.json().await?;
                debug!(count = body.data.len(), "fetched editions listing");
                Ok(body.data)
            })
            .await?;

        Ok(bibles.as_slice())
    }

    /// Editions for one language, by ISO 639-3 id
    pub async fn bibles_for_language(
        &self,
        language_id: &str,
    ) -> Result<Vec<BibleSummary>, ApiError> {
        Ok(self
            .available_bibles()
            .await?
            .iter()
            .filter(|bible| bible.language.id == language_id)
            .cloned()
            .collect())
    }

    /// Fetch the text of a passage from one edition
    pub async fn passage(
        &self,
        bible_id: &str,
        reference: &ScriptureReference,
        registry: &BookRegistry,
    ) -> Result<Passage, ApiError> {
        let token = reference
            .api_token(registry)
            .ok_or(ApiError::InvalidReference)?;

        let url = format!("{}/bibles/{bible_id}/passages/{token}", self.base_url);
        debug!(%url, "fetching passage");

        let response = self
            .http
            .get(&url)
            .query(&[("content-type", "text")])
            .header("api-key", &self.api_key)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => return Err(ApiError::VerseNotFound),
            StatusCode::UNAUTHORIZED => return Err(ApiError::Unauthorized),
            status => return Err(ApiError::Status(status)),
        }

        let body: PassageResponse = response.json().await?;
        let translation = self.translation_label(bible_id).await;

        Ok(Passage {
            text: clean_text(&body.data.content),
            reference: body.data.reference,
            translation,
        })
    }

    /// Short display label for an edition: the static table first, the
    /// abbreviation reported by the API as fallback, the raw id last
    async fn translation_label(&self, bible_id: &str) -> String {
        if let Some(label) = translations::display_name(bible_id) {
            return label.to_string();
        }

        match self.bible_info(bible_id).await {
            Ok(info) => info
                .abbreviation
                .unwrap_or_else(|| bible_id.to_string()),
            Err(error) => {
                warn!(%error, bible_id, "could not fetch edition info");
                bible_id.to_string()
            }
        }
    }

    async fn bible_info(&self, bible_id: &str) -> Result<BibleSummary, ApiError> {
        let response = self
            .http
            .get(format!("{}/bibles/{bible_id}", self.base_url))
            .header("api-key", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status));
        }

        let body: BibleResponse = response.json().await?;
        Ok(body.data)
    }
}

fn status_error(status: StatusCode) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        other => ApiError::Status(other),
    }
}
