//! Stub storefront backend and recording UI surfaces for integration tests.

#![allow(dead_code)]

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::Html,
    routing::{get, post},
    Form, Json, Router,
};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tienda_client::{CartCount, ClientConfig, Notifier, SearchResults, Toast};
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: String,
    pub form: HashMap<String, String>,
    pub hx_request: bool,
}

#[derive(Default)]
pub struct Backend {
    requests: Mutex<Vec<Recorded>>,
    pub cart_count: AtomicU64,
    reject_with: Mutex<Option<String>>,
}

impl Backend {
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().clone()
    }

    pub fn requests_to(&self, prefix: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.path.starts_with(prefix))
            .collect()
    }

    /// Answer every cart mutation with `400 {success: false, error}`.
    pub fn reject_with(&self, error: &str) {
        *self.reject_with.lock() = Some(error.to_string());
    }

    fn record(&self, path: String, headers: &HeaderMap, form: HashMap<String, String>) {
        self.requests.lock().push(Recorded {
            path,
            form,
            hx_request: headers
                .get("HX-Request")
                .is_some_and(|v| v.as_bytes() == b"true"),
        });
    }

    fn respond(&self) -> (StatusCode, Json<Value>) {
        match self.reject_with.lock().clone() {
            Some(error) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "success": false, "error": error })),
            ),
            None => (
                StatusCode::OK,
                Json(json!({
                    "success": true,
                    "cart_count": self.cart_count.load(Ordering::SeqCst),
                })),
            ),
        }
    }
}

type Shared = State<Arc<Backend>>;

async fn count(State(backend): Shared, headers: HeaderMap) -> Json<Value> {
    backend.record("/carrito/contador".into(), &headers, HashMap::new());
    Json(json!({ "count": backend.cart_count.load(Ordering::SeqCst) }))
}

async fn add(
    State(backend): Shared,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    backend.record("/carrito/agregar".into(), &headers, form);
    backend.respond()
}

async fn update(
    State(backend): Shared,
    Path(item_id): Path<String>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    backend.record(format!("/carrito/actualizar/{item_id}"), &headers, form);
    backend.respond()
}

async fn remove(
    State(backend): Shared,
    Path(item_id): Path<String>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    backend.record(format!("/carrito/eliminar/{item_id}"), &headers, HashMap::new());
    backend.respond()
}

async fn clear(State(backend): Shared, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    backend.record("/carrito/limpiar".into(), &headers, HashMap::new());
    backend.respond()
}

async fn search(
    State(backend): Shared,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Html<String> {
    let query = params.get("q").cloned().unwrap_or_default();
    backend.record("/buscar".into(), &headers, params);
    Html(format!("<ul><li>{query}</li></ul>"))
}

/// Serve the stub on an ephemeral port; returns its base URL.
pub async fn spawn_backend() -> (String, Arc<Backend>) {
    let backend = Arc::new(Backend::default());

    let app = Router::new()
        .route("/carrito/contador", get(count))
        .route("/carrito/agregar", post(add))
        .route("/carrito/actualizar/{item_id}", post(update))
        .route("/carrito/eliminar/{item_id}", post(remove))
        .route("/carrito/limpiar", post(clear))
        .route("/buscar", get(search))
        .with_state(backend.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{address}"), backend)
}

/// A base URL nothing listens on.
pub async fn dead_backend() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{address}")
}

pub fn config(base_url: String) -> ClientConfig {
    ClientConfig {
        base_url,
        quantity_debounce_ms: 100,
        search_debounce_ms: 100,
        request_timeout_secs: 2,
        ..Default::default()
    }
}

/// Poll `condition` until it holds, failing the test after five seconds.
pub async fn wait_until(what: &str, condition: impl Fn() -> bool) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    while !condition() {
        assert!(
            tokio::time::Instant::now() < deadline,
            "timed out waiting until {what}"
        );
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

/// Time for work that has no observable end to finish, used only to check
/// that something did not happen.
pub async fn grace_period() {
    tokio::time::sleep(Duration::from_millis(200)).await;
}

#[derive(Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<Toast>>,
    refreshes: AtomicUsize,
    counts: Mutex<Vec<u64>>,
}

impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().clone()
    }

    pub fn refreshes(&self) -> usize {
        self.refreshes.load(Ordering::SeqCst)
    }

    pub fn counts(&self) -> Vec<u64> {
        self.counts.lock().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.lock().push(toast);
    }

    fn refresh(&self) {
        self.refreshes.fetch_add(1, Ordering::SeqCst);
    }

    fn cart_count(&self, count: CartCount) {
        self.counts.lock().push(count.count);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    Shown(String),
    Hidden,
}

#[derive(Default)]
pub struct RecordingResults {
    events: Mutex<Vec<Panel>>,
}

impl RecordingResults {
    pub fn events(&self) -> Vec<Panel> {
        self.events.lock().clone()
    }
}

impl SearchResults for RecordingResults {
    fn show(&self, html: String) {
        self.events.lock().push(Panel::Shown(html));
    }

    fn hide(&self) {
        self.events.lock().push(Panel::Hidden);
    }
}
