use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::Value;

const STATS_URL: &str = "https://api.chess.com/pub/player";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct ChessClient {
    http: Client,
}

impl ChessClient {
    pub fn new() -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build chess.com HTTP client")?;
        Ok(Self { http })
    }

    /// Fetch the public rating stats for `username`. The payload is returned
    /// raw; callers pick out the fields they trust.
    pub async fn player_stats(&self, username: &str) -> Result<Value> {
        let url = format!("{STATS_URL}/{username}/stats");

        let response = self
            .http
            .get(&url)
            .header("User-Agent", format!("chess-com-box (@{username})"))
            .send()
            .await
            .with_context(|| format!("request to {url} failed"))?;

        if !response.status().is_success() {
            anyhow::bail!(
                "chess.com API returned HTTP {}",
                response.status().as_u16()
            );
        }

        response
            .json()
            .await
            .context("failed to parse chess.com stats response")
    }
}
