use serde::Deserialize;

use crate::error::{PipelineError, Result};
use crate::models::video::Comment;

/// Wire shape of the request. Fields are optional and the mode is implied
/// by which of them are present; see [`AnalysisRequest::classify`].
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessVideoBody {
    pub video_url: Option<String>,
    pub get_summary: Option<bool>,
    pub get_detailed_analysis: Option<bool>,
    pub comments: Option<Vec<Comment>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisRequest {
    Fetch { url: String },
    Summarize { comments: Vec<Comment> },
    DetailedAnalyze { comments: Vec<Comment> },
    SummarizeAndAnalyze { comments: Vec<Comment> },
}

impl AnalysisRequest {
    /// Analysis flags together with a comment list select analysis mode.
    /// Otherwise a non-blank `videoUrl` selects fetch mode. An analysis
    /// flag without comments is rejected instead of silently fetching.
    pub fn classify(body: ProcessVideoBody) -> Result<AnalysisRequest> {
        let wants_summary = body.get_summary.unwrap_or(false);
        let wants_analysis = body.get_detailed_analysis.unwrap_or(false);

        if wants_summary || wants_analysis {
            let comments = body.comments.ok_or_else(|| {
                PipelineError::BadRequest(
                    "getSummary/getDetailedAnalysis require a comments list".to_string(),
                )
            })?;

            return Ok(match (wants_summary, wants_analysis) {
                (true, true) => AnalysisRequest::SummarizeAndAnalyze { comments },
                (true, false) => AnalysisRequest::Summarize { comments },
                _ => AnalysisRequest::DetailedAnalyze { comments },
            });
        }

        match body.video_url {
            Some(url) if !url.trim().is_empty() => Ok(AnalysisRequest::Fetch { url }),
            _ => Err(PipelineError::BadRequest(
                "expected either videoUrl or an analysis flag with comments".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AnalysisRequest, ProcessVideoBody};
    use crate::error::PipelineError;

    fn parse(json: &str) -> Result<AnalysisRequest, PipelineError> {
        let body: ProcessVideoBody = serde_json::from_str(json).unwrap();
        AnalysisRequest::classify(body)
    }

    #[test]
    fn url_only_selects_fetch_mode() {
        let request = parse(r#"{"videoUrl":"https://youtu.be/abc123"}"#).unwrap();

        assert_eq!(
            request,
            AnalysisRequest::Fetch {
                url: "https://youtu.be/abc123".to_string()
            }
        );
    }

    #[test]
    fn analysis_flags_select_analysis_mode() {
        let summarize = parse(r#"{"getSummary":true,"comments":[{"text":"great!"}]}"#).unwrap();
        let detailed =
            parse(r#"{"getDetailedAnalysis":true,"getSummary":null,"comments":[]}"#).unwrap();
        let both = parse(
            r#"{"videoUrl":"https://youtu.be/x","getSummary":true,"getDetailedAnalysis":true,"comments":[]}"#,
        )
        .unwrap();

        assert!(matches!(summarize, AnalysisRequest::Summarize { ref comments } if comments[0].text == "great!"));
        assert!(matches!(detailed, AnalysisRequest::DetailedAnalyze { .. }));
        assert!(matches!(both, AnalysisRequest::SummarizeAndAnalyze { .. }));
    }

    #[test]
    fn false_flags_fall_through_to_fetch_mode() {
        let request =
            parse(r#"{"videoUrl":"https://youtu.be/abc123","getSummary":false,"comments":[]}"#)
                .unwrap();

        assert!(matches!(request, AnalysisRequest::Fetch { .. }));
    }

    #[test]
    fn analysis_flag_without_comments_is_rejected() {
        let err = parse(r#"{"videoUrl":"https://youtu.be/abc123","getSummary":true}"#).unwrap_err();

        assert!(matches!(err, PipelineError::BadRequest(_)));
    }

    #[test]
    fn empty_or_blank_body_is_rejected() {
        assert!(matches!(parse("{}"), Err(PipelineError::BadRequest(_))));
        assert!(matches!(
            parse(r#"{"videoUrl":"   "}"#),
            Err(PipelineError::BadRequest(_))
        ));
        assert!(matches!(
            parse(r#"{"comments":[{"text":"hi"}]}"#),
            Err(PipelineError::BadRequest(_))
        ));
    }
}
