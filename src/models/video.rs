use serde::{Deserialize, Serialize};
use std::fmt;

/// Platform video identifier. Guaranteed non-empty, otherwise opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoId(String);

impl VideoId {
    pub fn new(raw: &str) -> Option<VideoId> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(VideoId(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    pub title: String,
    pub thumbnail: String,
    pub likes: u64,
    pub comment_count: u64,
}

/// A top-level comment. Only `text` is required when a caller sends
/// comments back for analysis.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub likes: u64,
}
