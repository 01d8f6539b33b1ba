use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use log::{error, info};
use std::sync::Arc;

use crate::error::PipelineError;
use crate::models::{process_video_request::ProcessVideoBody, process_video_response::ErrorBody};
use crate::services::request_dispatcher::RequestDispatcher;

const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

pub fn create_router(dispatcher: Arc<RequestDispatcher>) -> Router {
    Router::new()
        .route("/", post(process_video).options(preflight))
        .route("/process-video", post(process_video).options(preflight))
        .with_state(dispatcher)
}

fn cors_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    headers
}

async fn preflight() -> impl IntoResponse {
    (StatusCode::OK, cors_headers())
}

/// Every outcome, including malformed JSON, is answered with the JSON
/// envelope and the CORS headers.
async fn process_video(
    State(dispatcher): State<Arc<RequestDispatcher>>,
    body: Bytes,
) -> Response {
    info!("Processing video request");

    let result = match serde_json::from_slice::<ProcessVideoBody>(&body) {
        Ok(body) => dispatcher.dispatch(body).await,
        Err(err) => Err(PipelineError::BadRequest(format!(
            "invalid JSON body: {}",
            err
        ))),
    };

    match result {
        Ok(outcome) => (StatusCode::OK, cors_headers(), Json(outcome)).into_response(),
        Err(err) => {
            error!("Error processing video: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                cors_headers(),
                Json(ErrorBody::from(&err)),
            )
                .into_response()
        }
    }
}
