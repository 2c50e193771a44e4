use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;

const GISTS_URL: &str = "https://api.github.com/gists";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct GistClient {
    token: String,
    http: Client,
}

impl GistClient {
    pub fn new(token: String) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build GitHub HTTP client")?;
        Ok(Self { token, http })
    }

    /// Replace `filename`'s content in the gist.
    pub async fn update_file(&self, gist_id: &str, filename: &str, content: &str) -> Result<()> {
        let body = serde_json::json!({
            "files": { filename: { "content": content } }
        });

        let response = self
            .http
            .patch(format!("{GISTS_URL}/{gist_id}"))
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github.v3+json")
            .header("User-Agent", "chess-com-box")
            .json(&body)
            .send()
            .await
            .context("request to the GitHub gist API failed")?;

        if !response.status().is_success() {
            anyhow::bail!("GitHub API returned HTTP {}", response.status().as_u16());
        }

        Ok(())
    }
}
