use futures::future::try_join;
use futures::TryFutureExt;
use log::{error, info};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::error::{PipelineError, Result};
use crate::models::{
    config::{CombinedAnalysis, Config},
    process_video_request::{AnalysisRequest, ProcessVideoBody},
    process_video_response::{AnalysisResult, DispatchOutcome, FetchPayload},
    video::Comment,
};
use crate::services::{
    prompt_builder::{build_prompt, PromptMode},
    url_resolver::UrlResolver,
    CommentSource, TextGenerator, VideoMetadataSource,
};
use crate::utils::consts::YOUTUBE_SERVICE;

#[derive(Debug, Clone, Copy)]
enum Stage {
    Classification,
    UrlResolution,
    VideoMetadata,
    CommentThreads,
    Fetch,
    TextGeneration,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Classification => "request classification",
            Stage::UrlResolution => "url resolution",
            Stage::VideoMetadata => "video metadata",
            Stage::CommentThreads => "comment threads",
            Stage::Fetch => "video fetch",
            Stage::TextGeneration => "text generation",
        };
        f.write_str(name)
    }
}

/// Entry point of the pipeline. Decides the mode once, runs the matching
/// components and returns a single outcome or the first error.
pub struct RequestDispatcher {
    url_resolver: UrlResolver,
    metadata_source: Arc<dyn VideoMetadataSource>,
    comment_source: Arc<dyn CommentSource>,
    text_generator: Arc<dyn TextGenerator>,
    max_comments: u32,
    combined_analysis: CombinedAnalysis,
    fetch_timeout: Duration,
}

impl RequestDispatcher {
    pub fn new(
        config: &Config,
        metadata_source: Arc<dyn VideoMetadataSource>,
        comment_source: Arc<dyn CommentSource>,
        text_generator: Arc<dyn TextGenerator>,
    ) -> RequestDispatcher {
        RequestDispatcher {
            url_resolver: UrlResolver::new(config.policy.require_watch_path),
            metadata_source,
            comment_source,
            text_generator,
            max_comments: config.max_comments(),
            combined_analysis: config.policy.combined_analysis,
            fetch_timeout: config.fetch_timeout(),
        }
    }

    pub async fn dispatch(&self, body: ProcessVideoBody) -> Result<DispatchOutcome> {
        let request = AnalysisRequest::classify(body)
            .map_err(|err| failed(Stage::Classification, "request body", err))?;

        match request {
            AnalysisRequest::Fetch { url } => self.fetch(&url).await.map(DispatchOutcome::Fetched),
            AnalysisRequest::Summarize { comments } => {
                let summary = self.generate(PromptMode::Summarize, &comments).await?;
                Ok(DispatchOutcome::Analyzed(AnalysisResult {
                    summary: Some(summary),
                    analysis: None,
                }))
            }
            AnalysisRequest::DetailedAnalyze { comments } => {
                let analysis = self.generate(PromptMode::DetailedAnalyze, &comments).await?;
                Ok(DispatchOutcome::Analyzed(AnalysisResult {
                    summary: None,
                    analysis: Some(analysis),
                }))
            }
            AnalysisRequest::SummarizeAndAnalyze { comments } => self
                .summarize_and_analyze(&comments)
                .await
                .map(DispatchOutcome::Analyzed),
        }
    }

    async fn fetch(&self, url: &str) -> Result<FetchPayload> {
        let video_id = self
            .url_resolver
            .resolve(url)
            .map_err(|err| failed(Stage::UrlResolution, url, err))?;

        info!("Fetching data for video {}", video_id);

        let video = self
            .metadata_source
            .fetch_video(&video_id)
            .map_err(|err| failed(Stage::VideoMetadata, video_id.as_str(), err));
        let comments = self
            .comment_source
            .fetch_comments(&video_id, self.max_comments)
            .map_err(|err| failed(Stage::CommentThreads, video_id.as_str(), err));

        // try_join drops the sibling request as soon as one side fails.
        let (video, comments) = match timeout(self.fetch_timeout, try_join(video, comments)).await {
            Ok(joined) => joined?,
            Err(_) => {
                let err = PipelineError::upstream(
                    YOUTUBE_SERVICE,
                    format!("no response within {}s", self.fetch_timeout.as_secs()),
                );
                return Err(failed(Stage::Fetch, video_id.as_str(), err));
            }
        };

        info!(
            "Fetched video {} with {} comments",
            video_id,
            comments.len()
        );

        Ok(FetchPayload { video, comments })
    }

    async fn summarize_and_analyze(&self, comments: &[Comment]) -> Result<AnalysisResult> {
        match self.combined_analysis {
            CombinedAnalysis::Independent => {
                let (summary, analysis) = try_join(
                    self.generate(PromptMode::Summarize, comments),
                    self.generate(PromptMode::DetailedAnalyze, comments),
                )
                .await?;

                Ok(AnalysisResult {
                    summary: Some(summary),
                    analysis: Some(analysis),
                })
            }
            CombinedAnalysis::Mirror => {
                let analysis = self.generate(PromptMode::DetailedAnalyze, comments).await?;

                Ok(AnalysisResult {
                    summary: Some(analysis.clone()),
                    analysis: Some(analysis),
                })
            }
            CombinedAnalysis::Reject => Err(failed(
                Stage::Classification,
                "request body",
                PipelineError::BadRequest(
                    "getSummary and getDetailedAnalysis cannot be requested together".to_string(),
                ),
            )),
        }
    }

    async fn generate(&self, mode: PromptMode, comments: &[Comment]) -> Result<String> {
        info!("Generating {:?} for {} comments", mode, comments.len());

        let prompt = build_prompt(mode, comments);

        self.text_generator
            .generate(&prompt)
            .await
            .map_err(|err| failed(Stage::TextGeneration, &format!("{:?}", mode), err))
    }
}

fn failed(stage: Stage, subject: &str, err: PipelineError) -> PipelineError {
    error!("{} failed for {}: {}", stage, subject, err);
    err
}
