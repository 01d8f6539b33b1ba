use async_trait::async_trait;

use crate::error::Result;
use crate::models::video::{Comment, VideoId, VideoRecord};

pub mod gemini_service;
pub mod prompt_builder;
pub mod request_dispatcher;
pub mod url_resolver;
pub mod youtube_service;

#[async_trait]
pub trait VideoMetadataSource: Send + Sync {
    async fn fetch_video(&self, video_id: &VideoId) -> Result<VideoRecord>;
}

#[async_trait]
pub trait CommentSource: Send + Sync {
    /// One page of top-level comments, at most `max_results` long.
    async fn fetch_comments(&self, video_id: &VideoId, max_results: u32) -> Result<Vec<Comment>>;
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}
