pub mod config;
pub mod gemini_generate_content;
pub mod process_video_request;
pub mod process_video_response;
pub mod video;
pub mod youtube_comment_threads;
pub mod youtube_error_response;
pub mod youtube_video_details;
