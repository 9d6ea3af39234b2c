/// Recommendation client — the only module that talks to the remote
/// recommendation service.
///
/// One POST per submission. No retries, no caching, no cancellation: callers
/// that need a degraded result on failure go through the controller, which
/// owns the swallow policy.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::recommendation::{RecommendationRecord, RecommendationRequest};

/// Endpoint used when no override is configured.
pub const DEFAULT_ENDPOINT: &str = "https://emotional-ofelia-nivya-f673d23e.koyeb.app/recommend";
const USER_AGENT: &str = concat!("recommender/", env!("CARGO_PKG_VERSION"));
const BODY_PREVIEW_CHARS: usize = 200;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("Malformed response (status {status}): {source}; body starts with {preview:?}")]
    Malformed {
        status: u16,
        preview: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Response envelope. Both an absent key and an explicit `null` mean "no results".
#[derive(Debug, Deserialize)]
struct RecommendationsEnvelope {
    #[serde(default)]
    recommendations: Option<Vec<RecommendationRecord>>,
}

/// The seam between the controller and the network. Implement this to swap
/// the transport without touching the controller or the view.
#[async_trait]
pub trait RecommendationService: Send + Sync {
    async fn submit(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<RecommendationRecord>, ClientError>;
}

/// JSON-over-HTTP client for the recommendation endpoint.
#[derive(Clone)]
pub struct HttpRecommendationClient {
    client: Client,
    endpoint: Url,
}

impl HttpRecommendationClient {
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(ClientError::Transport)?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl RecommendationService for HttpRecommendationClient {
    async fn submit(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<RecommendationRecord>, ClientError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            // Status alone is not a failure; the body decides.
            warn!("Recommendation service returned {status}");
        }

        let body = response.text().await.map_err(ClientError::Body)?;
        let records = parse_recommendations(&body).map_err(|source| ClientError::Malformed {
            status: status.as_u16(),
            preview: preview(&body),
            source,
        })?;

        debug!(
            "Recommendation call succeeded: status={}, records={}",
            status,
            records.len()
        );
        Ok(records)
    }
}

/// Reads the `recommendations` array out of a response body.
fn parse_recommendations(body: &str) -> Result<Vec<RecommendationRecord>, serde_json::Error> {
    let envelope: RecommendationsEnvelope = serde_json::from_str(body)?;
    Ok(envelope.recommendations.unwrap_or_default())
}

fn preview(body: &str) -> String {
    let mut preview: String = body.chars().take(BODY_PREVIEW_CHARS).collect();
    if body.chars().count() > BODY_PREVIEW_CHARS {
        preview.push('…');
    }
    preview
}
