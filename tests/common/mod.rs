//! Shared helpers: a stand-in for the third-party form endpoint and an app
//! factory pointing at it.

#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request, StatusCode},
    routing::post,
};
use portfolio::config::{Config, ContactConfig, LoggingConfig, ServerConfig, SiteConfig};

/// Records what the form-processing endpoint received.
#[derive(Clone)]
pub struct FormStub {
    status: StatusCode,
    hits: Arc<AtomicUsize>,
    last_body: Arc<Mutex<String>>,
    last_accept: Arc<Mutex<String>>,
}

impl FormStub {
    fn new(status: StatusCode) -> Self {
        Self {
            status,
            hits: Arc::new(AtomicUsize::new(0)),
            last_body: Arc::new(Mutex::new(String::new())),
            last_accept: Arc::new(Mutex::new(String::new())),
        }
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn last_body(&self) -> String {
        self.last_body.lock().unwrap().clone()
    }

    pub fn last_accept(&self) -> String {
        self.last_accept.lock().unwrap().clone()
    }
}

async fn record(State(stub): State<FormStub>, headers: HeaderMap, body: String) -> StatusCode {
    stub.hits.fetch_add(1, Ordering::SeqCst);
    *stub.last_accept.lock().unwrap() = headers
        .get("accept")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    *stub.last_body.lock().unwrap() = body;
    stub.status
}

/// Spawn a local form endpoint answering every POST with `status`.
pub async fn spawn_form_stub(status: StatusCode) -> (String, FormStub) {
    let stub = FormStub::new(status);

    let app = Router::new()
        .route("/f/inbox", post(record))
        .with_state(stub.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/f/inbox"), stub)
}

/// An endpoint URL whose port was bound and released, so connections fail.
pub async fn unreachable_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{addr}/f/inbox")
}

pub fn test_config(endpoint: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3001,
        },
        contact: ContactConfig {
            endpoint: endpoint.to_string(),
            subject: "New project inquiry".to_string(),
            fallback_email: "hello@arjayferrer.com".to_string(),
            timeout_seconds: 5,
        },
        site: SiteConfig::default(),
        logging: LoggingConfig::default(),
    }
}

pub fn create_test_app(endpoint: &str) -> Router {
    portfolio::create_app(test_config(endpoint)).unwrap()
}

/// Build a POST /contact request with a form-encoded body.
pub fn post_contact(fields: &[(&str, &str)]) -> Request<Body> {
    let body = serde_urlencoded::to_string(fields).unwrap();

    Request::builder()
        .method("POST")
        .uri("/contact")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}
