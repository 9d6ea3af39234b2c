use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::Url;

use crate::client::DEFAULT_ENDPOINT;
use crate::controller::ResponseOrdering;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration loaded from environment variables.
/// Every variable is optional; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: Url,
    pub timeout: Duration,
    pub ordering: ResponseOrdering,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup("RECOMMENDER_API_URL").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let timeout_secs = match lookup("RECOMMENDER_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .context("RECOMMENDER_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            bail!("RECOMMENDER_TIMEOUT_SECS must be greater than zero");
        }
        let ordering = match lookup("RECOMMENDER_RESPONSE_ORDERING") {
            Some(raw) => ResponseOrdering::from_str(&raw)?,
            None => ResponseOrdering::default(),
        };

        Ok(Config {
            endpoint: parse_endpoint(&endpoint)?,
            timeout: Duration::from_secs(timeout_secs),
            ordering,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

/// Accepts absolute http(s) URLs only.
pub fn parse_endpoint(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).with_context(|| format!("Invalid endpoint URL '{raw}'"))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => bail!("Endpoint '{raw}' must use http or https, not '{other}'"),
    }
}
