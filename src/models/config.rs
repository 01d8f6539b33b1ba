use figment::{
    providers::{Env, Format, Json},
    Figment,
};
use log::LevelFilter;
use serde::Deserialize;
use std::env;
use std::time::Duration;

use crate::utils::consts::{
    CONFIG_FILE_ENV, DEFAULT_CONFIG_FILE, ENV_PREFIX, GEMINI_API_BASE_URL, GEMINI_MODEL,
    MAX_COMMENTS_PER_PAGE, YOUTUBE_API_BASE_URL,
};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub bind_address: String,
    pub log_level: String,
    pub youtube_api_key: Option<String>,
    pub youtube_api_keys: Vec<String>,
    pub gemini_api_key: Option<String>,
    pub youtube_base_url: String,
    pub gemini_base_url: String,
    pub gemini_model: String,
    pub request_timeout_secs: u64,
    pub fetch_timeout_secs: u64,
    pub policy: ProtocolPolicy,
}

/// Behaviour that changed between revisions of the request protocol.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ProtocolPolicy {
    /// Long-form URLs must carry a `/watch` path segment.
    pub require_watch_path: bool,
    pub comment_order: CommentOrder,
    pub max_comments: u32,
    /// What to do when both `getSummary` and `getDetailedAnalysis` are set.
    pub combined_analysis: CombinedAnalysis,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CommentOrder {
    Relevance,
    Time,
    /// Omit the `order` parameter and let the platform choose.
    PlatformDefault,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CombinedAnalysis {
    /// Build and send both prompts, one result per field.
    Independent,
    /// Send only the detailed prompt and copy its text into both fields.
    Mirror,
    /// Refuse the request.
    Reject,
}

impl CommentOrder {
    pub fn as_query_value(&self) -> Option<&'static str> {
        match self {
            CommentOrder::Relevance => Some("relevance"),
            CommentOrder::Time => Some("time"),
            CommentOrder::PlatformDefault => None,
        }
    }
}

impl Default for ProtocolPolicy {
    fn default() -> Self {
        ProtocolPolicy {
            require_watch_path: true,
            comment_order: CommentOrder::Relevance,
            max_comments: MAX_COMMENTS_PER_PAGE,
            combined_analysis: CombinedAnalysis::Independent,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_address: "0.0.0.0:8080".to_string(),
            log_level: "info".to_string(),
            youtube_api_key: None,
            youtube_api_keys: vec![],
            gemini_api_key: None,
            youtube_base_url: YOUTUBE_API_BASE_URL.to_string(),
            gemini_base_url: GEMINI_API_BASE_URL.to_string(),
            gemini_model: GEMINI_MODEL.to_string(),
            request_timeout_secs: 20,
            fetch_timeout_secs: 30,
            policy: ProtocolPolicy::default(),
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        let config_file =
            env::var(CONFIG_FILE_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        Figment::new()
            .merge(Json::file(config_file))
            .merge(Env::raw().only(&["YOUTUBE_API_KEY", "GEMINI_API_KEY"]))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn load() -> Result<Config, figment::Error> {
        Config::figment().extract()
    }

    /// Every configured YouTube key, blank entries removed.
    pub fn youtube_keys(&self) -> Vec<String> {
        self.youtube_api_key
            .iter()
            .chain(self.youtube_api_keys.iter())
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .collect()
    }

    pub fn gemini_key(&self) -> Option<String> {
        self.gemini_api_key
            .as_ref()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn max_comments(&self) -> u32 {
        self.policy.max_comments.clamp(1, MAX_COMMENTS_PER_PAGE)
    }
}
