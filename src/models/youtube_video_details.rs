use serde::Deserialize;
use serde_json::Value;

use crate::models::video::VideoRecord;
use crate::utils::count_utils::parse_count;

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct YouTubeVideoDetails {
    pub kind: String,
    pub etag: String,
    pub items: Vec<YouTubeVideoItem>,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct YouTubeVideoItem {
    pub id: String,
    pub snippet: Snippet,
    pub statistics: Statistics,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snippet {
    pub title: String,
    pub channel_title: String,
    pub thumbnails: Thumbnails,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Thumbnails {
    pub default: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
    pub standard: Option<Thumbnail>,
    pub maxres: Option<Thumbnail>,
}

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Thumbnail {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// Counters arrive as strings, but are kept raw so a malformed one can
/// degrade to zero instead of failing the whole payload.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Statistics {
    pub view_count: Option<Value>,
    pub like_count: Option<Value>,
    pub comment_count: Option<Value>,
}

impl Thumbnails {
    pub fn best_url(&self) -> String {
        [
            self.maxres.as_ref(),
            self.high.as_ref(),
            self.standard.as_ref(),
            self.medium.as_ref(),
            self.default.as_ref(),
        ]
        .into_iter()
        .flatten()
        .map(|thumbnail| thumbnail.url.trim())
        .find(|url| !url.is_empty())
        .unwrap_or_default()
        .to_string()
    }
}

impl From<YouTubeVideoItem> for VideoRecord {
    fn from(item: YouTubeVideoItem) -> Self {
        VideoRecord {
            thumbnail: item.snippet.thumbnails.best_url(),
            title: item.snippet.title,
            likes: parse_count(item.statistics.like_count.as_ref()),
            comment_count: parse_count(item.statistics.comment_count.as_ref()),
        }
    }
}
