//! Local HTTP responder standing in for the recipe API.
//!
//! Serves canned JSON bodies keyed by request target (`list.php?a=list`)
//! relative to the base path. Unknown targets answer 404. The axum server runs
//! on its own thread with a current-thread runtime and stops when the
//! `StubApi` is dropped.

use anyhow::Result;
use axum::{
    Router,
    extract::{Path, RawQuery, State},
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
    routing::get,
};
use serde_json::json;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

const BASE_PATH: &str = "/api/json/v1/1";

#[derive(Clone)]
struct StubState {
    routes: Arc<HashMap<String, String>>,
    requests: Arc<Mutex<Vec<String>>>,
}

pub struct StubApi {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl StubApi {
    /// Start serving `routes` (target → body)
    pub fn serve(routes: &[(&str, String)]) -> Result<Self> {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            routes: Arc::new(
                routes
                    .iter()
                    .map(|(target, body)| (target.to_string(), body.clone()))
                    .collect(),
            ),
            requests: Arc::clone(&requests),
        };
        let app = Router::new()
            .route(&format!("{}/:endpoint", BASE_PATH), get(respond))
            .with_state(state);

        // Bound on the server thread so callers may already be inside a runtime
        let (bound_tx, bound_rx) = std::sync::mpsc::channel::<std::io::Result<SocketAddr>>();
        let (shutdown, stopped) = oneshot::channel::<()>();
        std::thread::spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(err) => {
                    let _ = bound_tx.send(Err(err));
                    return;
                }
            };
            let served = runtime.block_on(async move {
                let listener = match tokio::net::TcpListener::bind("127.0.0.1:0").await {
                    Ok(listener) => listener,
                    Err(err) => {
                        let _ = bound_tx.send(Err(err));
                        return Ok(());
                    }
                };
                let _ = bound_tx.send(listener.local_addr());
                axum::serve(listener, app)
                    .with_graceful_shutdown(async {
                        let _ = stopped.await;
                    })
                    .await
            });
            if let Err(err) = served {
                eprintln!("stub api: {}", err);
            }
        });

        let addr = bound_rx
            .recv()
            .map_err(|_| anyhow::anyhow!("stub api thread exited before binding"))??;

        Ok(Self {
            base_url: format!("http://{}{}", addr, BASE_PATH),
            requests,
            shutdown: Some(shutdown),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request targets received so far, relative to the base path
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Drop for StubApi {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

async fn respond(
    State(state): State<StubState>,
    Path(endpoint): Path<String>,
    RawQuery(query): RawQuery,
) -> Response {
    // "list.php?a=list"
    let target = match query {
        Some(query) => format!("{}?{}", endpoint, query),
        None => endpoint,
    };
    state
        .requests
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .push(target.clone());

    match state.routes.get(&target) {
        Some(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body.clone(),
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "not found" })),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_serves_routes_and_records_targets() {
        let api = StubApi::serve(&[("list.php?a=list", r#"{"meals":null}"#.to_string())]).unwrap();
        let client = reqwest::Client::new();

        let found = client
            .get(format!("{}/list.php?a=list", api.base_url()))
            .send()
            .await
            .unwrap();
        assert_eq!(found.status(), reqwest::StatusCode::OK);
        assert_eq!(found.text().await.unwrap(), r#"{"meals":null}"#);

        let missing = client
            .get(format!("{}/lookup.php?i=1", api.base_url()))
            .send()
            .await
            .unwrap();
        assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);

        assert_eq!(api.requests(), vec!["list.php?a=list", "lookup.php?i=1"]);
    }
}
