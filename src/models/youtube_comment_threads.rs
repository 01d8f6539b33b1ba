use serde::Deserialize;
use serde_json::Value;

use crate::models::video::Comment;
use crate::utils::count_utils::parse_count;

/// `items` stays optional: an absent array means comments are unavailable,
/// an empty one means the video simply has none yet.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct YouTubeCommentThreads {
    pub kind: String,
    pub next_page_token: Option<String>,
    pub items: Option<Vec<CommentThreadItem>>,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommentThreadItem {
    pub id: String,
    pub snippet: CommentThreadSnippet,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommentThreadSnippet {
    pub video_id: String,
    pub top_level_comment: TopLevelComment,
    pub total_reply_count: u64,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopLevelComment {
    pub id: String,
    pub snippet: CommentSnippet,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommentSnippet {
    pub text_display: String,
    pub text_original: String,
    pub author_display_name: String,
    pub like_count: Option<Value>,
}

impl From<CommentThreadItem> for Comment {
    fn from(item: CommentThreadItem) -> Self {
        let snippet = item.snippet.top_level_comment.snippet;
        let text = if snippet.text_display.is_empty() {
            snippet.text_original
        } else {
            snippet.text_display
        };

        Comment {
            id: item.id,
            text,
            author: snippet.author_display_name,
            likes: parse_count(snippet.like_count.as_ref()),
        }
    }
}
