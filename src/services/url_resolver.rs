use url::Url;

use crate::error::{PipelineError, Result};
use crate::models::video::VideoId;

const SHORT_LINK_HOST: &str = "youtu.be";
const WATCH_HOSTS: [&str; 4] = [
    "youtube.com",
    "www.youtube.com",
    "m.youtube.com",
    "music.youtube.com",
];
const VIDEO_ID_PARAM: &str = "v";
const WATCH_SEGMENT: &str = "watch";

pub struct UrlResolver {
    require_watch_path: bool,
}

impl UrlResolver {
    pub fn new(require_watch_path: bool) -> UrlResolver {
        UrlResolver { require_watch_path }
    }

    pub fn resolve(&self, raw_url: &str) -> Result<VideoId> {
        let url = Url::parse(raw_url.trim())
            .map_err(|err| PipelineError::InvalidUrl(format!("{}: {}", raw_url, err)))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(PipelineError::InvalidUrl(raw_url.to_string()));
        }

        let host = url
            .host_str()
            .map(|host| host.to_ascii_lowercase())
            .ok_or_else(|| PipelineError::InvalidUrl(raw_url.to_string()))?;

        if host == SHORT_LINK_HOST {
            return url
                .path_segments()
                .and_then(|mut segments| segments.next())
                .and_then(VideoId::new)
                .ok_or_else(|| PipelineError::MissingIdentifier(raw_url.to_string()));
        }

        if !WATCH_HOSTS.contains(&host.as_str()) {
            return Err(PipelineError::UnsupportedHost(host));
        }

        if self.require_watch_path && !has_watch_segment(&url) {
            return Err(PipelineError::InvalidUrl(format!(
                "{} is not a /watch URL",
                raw_url
            )));
        }

        url.query_pairs()
            .find(|(key, _)| *key == VIDEO_ID_PARAM)
            .and_then(|(_, value)| VideoId::new(&value))
            .ok_or_else(|| PipelineError::MissingIdentifier(raw_url.to_string()))
    }
}

fn has_watch_segment(url: &Url) -> bool {
    url.path_segments()
        .map(|mut segments| segments.any(|segment| segment == WATCH_SEGMENT))
        .unwrap_or(false)
}
