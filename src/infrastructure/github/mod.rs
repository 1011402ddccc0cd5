//! GitHub-backed repository directory and README retrieval

mod directory_client;
mod readme_retriever;

pub use directory_client::GithubDirectoryClient;
pub use readme_retriever::GithubReadmeRetriever;

use crate::config::GithubConfig;

const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
const DEFAULT_RAW_BASE_URL: &str = "https://raw.githubusercontent.com";

/// Account, base URLs and credentials shared by the GitHub clients
#[derive(Debug, Clone)]
pub struct GithubEndpoint {
    pub account: String,
    pub api_base_url: String,
    pub raw_base_url: String,
    pub branches: Vec<String>,
    auth_header: Option<String>,
}

impl GithubEndpoint {
    /// Unauthenticated endpoint on github.com
    pub fn public(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            raw_base_url: DEFAULT_RAW_BASE_URL.to_string(),
            branches: vec!["main".to_string(), "master".to_string()],
            auth_header: None,
        }
    }

    pub fn from_config(config: &GithubConfig) -> Self {
        let endpoint = Self::public(config.account.trim())
            .with_api_base_url(&config.api_base_url)
            .with_raw_base_url(&config.raw_base_url)
            .with_branches(config.branches.clone());

        match config.token.as_deref().map(str::trim) {
            Some(token) if !token.is_empty() => endpoint.with_token(token),
            _ => endpoint,
        }
    }

    pub fn with_token(mut self, token: impl AsRef<str>) -> Self {
        self.auth_header = Some(format!("token {}", token.as_ref()));
        self
    }

    pub fn with_api_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.api_base_url = base_url.as_ref().trim_end_matches('/').to_string();
        self
    }

    pub fn with_raw_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.raw_base_url = base_url.as_ref().trim_end_matches('/').to_string();
        self
    }

    pub fn with_branches(mut self, branches: Vec<String>) -> Self {
        self.branches = branches;
        self
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth_header.is_some()
    }

    fn auth_headers(&self) -> Vec<(&str, &str)> {
        match &self.auth_header {
            Some(value) => vec![("Authorization", value.as_str())],
            None => Vec::new(),
        }
    }
}
