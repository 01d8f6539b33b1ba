pub const YOUTUBE_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
pub const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const GEMINI_MODEL: &str = "gemini-pro";

pub const YOUTUBE_SERVICE: &str = "YouTube Data API";
pub const GEMINI_SERVICE: &str = "Gemini API";

pub const MAX_COMMENTS_PER_PAGE: u32 = 100;

pub const ENV_PREFIX: &str = "COMMENT_ANALYZER_";
pub const CONFIG_FILE_ENV: &str = "COMMENT_ANALYZER_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "config.json";
