use anyhow::Error;
use async_trait::async_trait;
use log::debug;
use rand::Rng;
use reqwest::{Client, Response};

use crate::error::{PipelineError, Result};
use crate::models::{
    config::{CommentOrder, Config},
    video::{Comment, VideoId, VideoRecord},
    youtube_comment_threads::YouTubeCommentThreads,
    youtube_error_response::YouTubeErrorResponse,
    youtube_video_details::YouTubeVideoDetails,
};
use crate::services::{CommentSource, VideoMetadataSource};
use crate::utils::consts::{MAX_COMMENTS_PER_PAGE, YOUTUBE_SERVICE};

const COMMENTS_DISABLED_REASON: &str = "commentsDisabled";
const VIDEO_NOT_FOUND_REASON: &str = "videoNotFound";

pub struct YoutubeService {
    client: Client,
    base_url: String,
    api_keys: Vec<String>,
    comment_order: CommentOrder,
}

impl YoutubeService {
    pub fn new(config: &Config) -> std::result::Result<YoutubeService, Error> {
        let client = Client::builder().timeout(config.request_timeout()).build()?;

        Ok(YoutubeService {
            client,
            base_url: config.youtube_base_url.trim_end_matches('/').to_string(),
            api_keys: config.youtube_keys(),
            comment_order: config.policy.comment_order,
        })
    }

    pub async fn get_video_details(&self, video_id: &VideoId) -> Result<VideoRecord> {
        let api_key = self.get_api_key()?;
        let url = format!("{}/videos", self.base_url);

        let resp = self
            .client
            .get(url)
            .query(&[
                ("part", "snippet,statistics"),
                ("id", video_id.as_str()),
                ("key", api_key.as_str()),
            ])
            .send()
            .await
            .map_err(transport_error)?;

        let video_details = check_status(resp, video_id)
            .await?
            .json::<YouTubeVideoDetails>()
            .await
            .map_err(transport_error)?;

        video_details
            .items
            .into_iter()
            .next()
            .map(VideoRecord::from)
            .ok_or_else(|| PipelineError::NotFound(video_id.to_string()))
    }

    pub async fn get_comment_threads(
        &self,
        video_id: &VideoId,
        max_results: u32,
    ) -> Result<Vec<Comment>> {
        let api_key = self.get_api_key()?;
        let url = format!("{}/commentThreads", self.base_url);
        let max_results = max_results.clamp(1, MAX_COMMENTS_PER_PAGE);
        let max_results_param = max_results.to_string();

        let mut query = vec![
            ("part", "snippet"),
            ("videoId", video_id.as_str()),
            ("maxResults", max_results_param.as_str()),
            ("key", api_key.as_str()),
        ];
        if let Some(order) = self.comment_order.as_query_value() {
            query.push(("order", order));
        }

        let resp = self
            .client
            .get(url)
            .query(&query)
            .send()
            .await
            .map_err(transport_error)?;

        let threads = check_status(resp, video_id)
            .await?
            .json::<YouTubeCommentThreads>()
            .await
            .map_err(transport_error)?;

        let items = threads
            .items
            .ok_or_else(|| PipelineError::CommentsDisabled(video_id.to_string()))?;

        debug!(
            "Received {} comment threads for video {}",
            items.len(),
            video_id
        );

        Ok(items
            .into_iter()
            .take(max_results as usize)
            .map(Comment::from)
            .collect())
    }

    fn get_api_key(&self) -> Result<String> {
        if self.api_keys.is_empty() {
            return Err(PipelineError::MissingCredential("YOUTUBE_API_KEY"));
        }

        let mut rng = rand::thread_rng();
        let index = rng.gen_range(0..self.api_keys.len());

        Ok(self.api_keys[index].clone())
    }
}

#[async_trait]
impl VideoMetadataSource for YoutubeService {
    async fn fetch_video(&self, video_id: &VideoId) -> Result<VideoRecord> {
        self.get_video_details(video_id).await
    }
}

#[async_trait]
impl CommentSource for YoutubeService {
    async fn fetch_comments(&self, video_id: &VideoId, max_results: u32) -> Result<Vec<Comment>> {
        self.get_comment_threads(video_id, max_results).await
    }
}

// The request URL carries the API key, keep it out of error messages.
fn transport_error(err: reqwest::Error) -> PipelineError {
    PipelineError::upstream(YOUTUBE_SERVICE, err.without_url().to_string())
}

async fn check_status(resp: Response, video_id: &VideoId) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let error_response = serde_json::from_str::<YouTubeErrorResponse>(&body).unwrap_or_default();

    if error_response.has_reason(COMMENTS_DISABLED_REASON) {
        return Err(PipelineError::CommentsDisabled(video_id.to_string()));
    }

    if error_response.has_reason(VIDEO_NOT_FOUND_REASON) {
        return Err(PipelineError::NotFound(video_id.to_string()));
    }

    Err(PipelineError::upstream(
        YOUTUBE_SERVICE,
        format!(
            "status {} for video {}. Possibly out of quota: {}",
            status, video_id, error_response.error.message
        ),
    ))
}
