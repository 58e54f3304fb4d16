use crate::domain::model::RepoSummary;
use crate::utils::error::{HarvestError, Result};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

const USER_AGENT: &str = concat!("commit-mail-finder/", env!("CARGO_PKG_VERSION"));

/// Thin wrapper over the two GitHub REST endpoints this tool consumes.
/// The base URL is configurable so tests can point it at a mock server.
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl GithubClient {
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("Making API request to: {}", url);

        let mut request = self.client.get(&url).header("User-Agent", USER_AGENT);
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("token {}", token));
        }

        let response = request.send().await?;
        tracing::debug!("API response status: {}", response.status());

        match response.status() {
            StatusCode::OK => Ok(response.json().await?),
            StatusCode::FORBIDDEN => Err(HarvestError::RateLimited),
            status => Err(HarvestError::UpstreamStatus {
                status: status.as_u16(),
            }),
        }
    }

    /// First page of `GET /repos/{owner}/{repo}/commits`. Elements are kept
    /// as raw JSON so one malformed record can be skipped without discarding
    /// the rest of the page.
    pub async fn list_commits(&self, owner: &str, repo: &str) -> Result<Vec<serde_json::Value>> {
        self.get_json(&format!("/repos/{}/{}/commits", owner, repo))
            .await
    }

    /// First page of `GET /users/{username}/repos`.
    pub async fn list_repos(&self, username: &str) -> Result<Vec<RepoSummary>> {
        self.get_json(&format!("/users/{}/repos", username)).await
    }
}
