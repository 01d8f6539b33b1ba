use log::{info, warn};
use models::config::Config;
use server::create_router;
use services::{
    gemini_service::GeminiService, request_dispatcher::RequestDispatcher,
    youtube_service::YoutubeService,
};
use simple_logger::SimpleLogger;
use std::sync::Arc;
use tokio::net::TcpListener;

mod error;
mod models;
mod server;
mod services;
mod utils;

#[tokio::main]
pub async fn main() -> Result<(), anyhow::Error> {
    let config = Config::load()?;

    SimpleLogger::new().with_level(config.level_filter()).init()?;

    if config.youtube_keys().is_empty() {
        warn!("No YouTube API key configured, video requests will fail");
    }
    if config.gemini_key().is_none() {
        warn!("No Gemini API key configured, analysis requests will fail");
    }

    let youtube_service = Arc::new(YoutubeService::new(&config)?);
    let gemini_service = Arc::new(GeminiService::new(&config)?);

    let dispatcher = RequestDispatcher::new(
        &config,
        youtube_service.clone(),
        youtube_service,
        gemini_service,
    );

    let listener = TcpListener::bind(&config.bind_address).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, create_router(Arc::new(dispatcher))).await?;

    Ok(())
}
