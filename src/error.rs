use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid YouTube URL: {0}")]
    InvalidUrl(String),

    #[error("Unsupported host: {0}")]
    UnsupportedHost(String),

    #[error("Could not extract video ID from URL: {0}")]
    MissingIdentifier(String),

    #[error("Video not found: {0}")]
    NotFound(String),

    #[error("Comments are disabled for video {0}")]
    CommentsDisabled(String),

    #[error("Missing credential: {0} is not configured")]
    MissingCredential(&'static str),

    #[error("{service} unavailable: {message}")]
    UpstreamUnavailable {
        service: &'static str,
        message: String,
    },

    #[error("Text generation backend returned no usable text")]
    EmptyResponse,
}

impl PipelineError {
    pub fn upstream(service: &'static str, message: impl Into<String>) -> Self {
        PipelineError::UpstreamUnavailable {
            service,
            message: message.into(),
        }
    }

    /// Stable machine-readable kind, sent next to the human-readable message.
    pub fn code(&self) -> &'static str {
        match self {
            PipelineError::BadRequest(_) => "bad_request",
            PipelineError::InvalidUrl(_) => "invalid_url",
            PipelineError::UnsupportedHost(_) => "unsupported_host",
            PipelineError::MissingIdentifier(_) => "missing_identifier",
            PipelineError::NotFound(_) => "not_found",
            PipelineError::CommentsDisabled(_) => "comments_disabled",
            PipelineError::MissingCredential(_) => "missing_credential",
            PipelineError::UpstreamUnavailable { .. } => "upstream_unavailable",
            PipelineError::EmptyResponse => "empty_response",
        }
    }
}
