//! In-process stand-in for the YouTube and Gemini HTTP APIs.

use axum::{extract::Query, http::StatusCode, routing::MethodRouter, Json, Router};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// Records what the client under test sent.
#[derive(Clone, Default)]
pub struct Recorder {
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
    bodies: Arc<Mutex<Vec<Value>>>,
}

impl Recorder {
    pub fn queries(&self) -> Vec<HashMap<String, String>> {
        self.queries.lock().unwrap().clone()
    }

    pub fn bodies(&self) -> Vec<Value> {
        self.bodies.lock().unwrap().clone()
    }
}

pub fn get_json(status: StatusCode, body: Value, recorder: Recorder) -> MethodRouter {
    axum::routing::get(move |Query(params): Query<HashMap<String, String>>| async move {
        recorder.queries.lock().unwrap().push(params);
        (status, Json(body))
    })
}

pub fn post_json(status: StatusCode, body: Value, recorder: Recorder) -> MethodRouter {
    axum::routing::post(
        move |Query(params): Query<HashMap<String, String>>, Json(payload): Json<Value>| async move {
            recorder.queries.lock().unwrap().push(params);
            recorder.bodies.lock().unwrap().push(payload);
            (status, Json(body))
        },
    )
}

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}
