use serde::Serialize;

use crate::error::PipelineError;
use crate::models::video::{Comment, VideoRecord};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchPayload {
    #[serde(flatten)]
    pub video: VideoRecord,
    pub comments: Vec<Comment>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DispatchOutcome {
    Fetched(FetchPayload),
    Analyzed(AnalysisResult),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: &'static str,
}

impl From<&PipelineError> for ErrorBody {
    fn from(err: &PipelineError) -> Self {
        ErrorBody {
            error: err.to_string(),
            code: err.code(),
        }
    }
}
