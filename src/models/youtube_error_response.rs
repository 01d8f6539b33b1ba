use serde::Deserialize;

/// Error body returned by the YouTube Data API on non-2xx responses.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct YouTubeErrorResponse {
    pub error: YouTubeError,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct YouTubeError {
    pub code: u16,
    pub message: String,
    pub errors: Vec<YouTubeErrorDetail>,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct YouTubeErrorDetail {
    pub reason: String,
    pub message: String,
}

impl YouTubeErrorResponse {
    pub fn has_reason(&self, reason: &str) -> bool {
        self.error.errors.iter().any(|detail| detail.reason == reason)
    }
}
