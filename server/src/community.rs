//! # Community Theme Registry Client
//!
//! Fetches the directory listing of the community theme repository from the
//! GitHub contents API. The response body is handed back untouched; parsing
//! it is left to the dashboard frontend.
//!
//! When GitHub is unreachable or rate limits the request, a small mock
//! listing shaped like a contents API response is returned instead so the
//! frontend always has something to render. Only a missing repository is
//! reported as an error.

use crate::common::HttpError;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::{Value, json};
use std::time::Duration;
use thiserror::Error;

const DEFAULT_API_BASE: &str = "https://api.github.com";
const DEFAULT_USER_AGENT: &str = "Vigilance-Theme-Loader";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Location of the community registry and how to reach it.
#[derive(Debug, Clone)]
pub struct CommunityConfig {
    pub api_base: String,
    pub owner: String,
    pub repo: String,
    pub themes_path: String,
    pub user_agent: String,
    pub timeout: Duration,
    /// Optional GitHub token; raises the API rate limit when present.
    pub token: Option<String>,
}

impl Default for CommunityConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            owner: "brendlij".to_string(),
            repo: "vigilance-community".to_string(),
            themes_path: "themes".to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            token: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum CommunityError {
    #[error("Community themes repository {owner}/{repo} not found on GitHub")]
    RepositoryNotFound { owner: String, repo: String },
}

impl CommunityError {
    pub fn user_message(&self) -> String {
        match self {
            CommunityError::RepositoryNotFound { .. } => {
                "Community themes repository not found on GitHub".to_string()
            }
        }
    }
}

/// Result of a registry fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum CommunityListing {
    /// Raw JSON body returned by GitHub.
    Live(String),
    /// Stand-in listing used when GitHub could not be asked.
    Fallback(Value),
}

impl CommunityListing {
    pub fn is_fallback(&self) -> bool {
        matches!(self, CommunityListing::Fallback(_))
    }

    /// Body to send to the API client.
    pub fn into_body(self) -> String {
        match self {
            CommunityListing::Live(body) => body,
            CommunityListing::Fallback(value) => value.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CommunityClient {
    client: reqwest::Client,
    config: CommunityConfig,
}

impl CommunityClient {
    pub fn new(config: CommunityConfig) -> Result<Self, HttpError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        if let Some(token) = &config.token {
            let value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| {
                HttpError::ClientCreation {
                    reason: format!("Invalid GitHub token: {e}"),
                }
            })?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| HttpError::ClientCreation {
                reason: e.to_string(),
            })?;

        Ok(Self { client, config })
    }

    /// Contents API URL of the themes directory.
    pub fn contents_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.config.api_base.trim_end_matches('/'),
            self.config.owner,
            self.config.repo,
            self.config.themes_path.trim_matches('/')
        )
    }

    /// Fetch the registry listing, falling back to the mock listing on any
    /// failure other than a missing repository.
    pub async fn fetch_themes(&self) -> Result<CommunityListing, CommunityError> {
        let (status, body) = match self.request_listing().await {
            Ok(response) => response,
            Err(e) => {
                log::warn!("Community theme request failed, serving fallback listing: {e}");
                return Ok(CommunityListing::Fallback(self.mock_listing()));
            }
        };

        match status {
            StatusCode::OK => Ok(CommunityListing::Live(body)),
            StatusCode::NOT_FOUND => Err(CommunityError::RepositoryNotFound {
                owner: self.config.owner.clone(),
                repo: self.config.repo.clone(),
            }),
            StatusCode::FORBIDDEN => {
                log::warn!("GitHub API rate limit hit, serving fallback community listing");
                Ok(CommunityListing::Fallback(self.mock_listing()))
            }
            other => {
                log::warn!("GitHub API answered {other}, serving fallback community listing");
                Ok(CommunityListing::Fallback(self.mock_listing()))
            }
        }
    }

    async fn request_listing(&self) -> Result<(StatusCode, String), HttpError> {
        let url = self.contents_url();
        let timeout_secs = self.config.timeout.as_secs();

        log::debug!("Fetching community themes from {url}");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| HttpError::from_reqwest(&url, timeout_secs, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| HttpError::from_reqwest(&url, timeout_secs, e))?;

        Ok((status, body))
    }

    /// Single-entry listing in the shape of a GitHub contents response.
    pub fn mock_listing(&self) -> Value {
        let owner = &self.config.owner;
        let repo = &self.config.repo;
        let path = format!("{}/vigilance-team", self.config.themes_path.trim_matches('/'));
        let api_url = format!("https://api.github.com/repos/{owner}/{repo}/contents/{path}");
        let git_url = format!("https://api.github.com/repos/{owner}/{repo}/git/trees/mock-sha-1");
        let html_url = format!("https://github.com/{owner}/{repo}/tree/main/{path}");

        json!([{
            "name": "vigilance-team",
            "path": path,
            "sha": "mock-sha-1",
            "size": 0,
            "url": api_url,
            "html_url": html_url,
            "git_url": git_url,
            "download_url": null,
            "type": "dir",
            "_links": {
                "self": api_url,
                "git": git_url,
                "html": html_url,
            },
        }])
    }
}
