use serde::Deserialize;

use crate::domain::{DomainError, MatchingConfig};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub github: GithubConfig,
    pub summarizer: SummarizerConfig,
    pub resolver: MatchingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Repository directory and README locations
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    /// Account whose repositories are listed and summarized
    pub account: String,
    /// Optional token, sent as `Authorization: token <token>`
    pub token: Option<String>,
    pub api_base_url: String,
    pub raw_base_url: String,
    /// Branches tried, in order, for the raw README
    pub branches: Vec<String>,
    pub timeout_secs: u64,
}

/// Hosted inference endpoint used for summaries
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    pub token: String,
    pub model: String,
    pub base_url: String,
    pub max_length: u32,
    pub min_length: u32,
    /// Documents are cut to this many characters before submission
    pub max_input_chars: usize,
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            account: String::new(),
            token: None,
            api_base_url: "https://api.github.com".to_string(),
            raw_base_url: "https://raw.githubusercontent.com".to_string(),
            branches: vec!["main".to_string(), "master".to_string()],
            timeout_secs: 20,
        }
    }
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            model: "facebook/bart-large-cnn".to_string(),
            base_url: "https://api-inference.huggingface.co".to_string(),
            max_length: 180,
            min_length: 30,
            max_input_chars: 3000,
            timeout_secs: 60,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("github.branches")
                    .with_list_parse_key("resolver.intent_verbs")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Checks the settings the pipeline cannot run without
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.github.account.trim().is_empty() {
            return Err(DomainError::configuration(
                "github.account is required (APP__GITHUB__ACCOUNT)",
            ));
        }

        if self.github.branches.is_empty() {
            return Err(DomainError::configuration(
                "github.branches must name at least one branch",
            ));
        }

        if self.summarizer.max_input_chars == 0 {
            return Err(DomainError::configuration(
                "summarizer.max_input_chars must be greater than zero",
            ));
        }

        if self.summarizer.token.trim().is_empty() {
            tracing::warn!("summarizer.token is empty; inference requests will be anonymous");
        }

        Ok(())
    }

    /// Config for tests and local runs with everything defaulted
    pub fn for_account(account: impl Into<String>) -> Self {
        Self {
            github: GithubConfig {
                account: account.into(),
                ..GithubConfig::default()
            },
            ..Self::default()
        }
    }
}
