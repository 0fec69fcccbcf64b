use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
};
use portfolio_contact::{FormRelay, RelayError, Submission};

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    last_body: Arc<Mutex<String>>,
    last_accept: Arc<Mutex<String>>,
}

async fn record(State(state): State<StubState>, headers: HeaderMap, body: String) -> StatusCode {
    *state.last_accept.lock().unwrap() = headers
        .get("accept")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    *state.last_body.lock().unwrap() = body;
    state.status
}

/// Spawn a local stand-in for the form-processing endpoint, answering every
/// POST with `status`.
async fn spawn_endpoint(status: StatusCode) -> anyhow::Result<(String, StubState)> {
    let state = StubState {
        status,
        last_body: Arc::new(Mutex::new(String::new())),
        last_accept: Arc::new(Mutex::new(String::new())),
    };

    let app = Router::new()
        .route("/f/inbox", post(record))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Ok((format!("http://{addr}/f/inbox"), state))
}

fn submission() -> Submission {
    Submission {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        need: "website refresh".to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn submit_delivers_payload_with_json_accept_header() -> anyhow::Result<()> {
    let (endpoint, state) = spawn_endpoint(StatusCode::OK).await?;
    let relay = FormRelay::new(&endpoint, "New project inquiry", Duration::from_secs(5))?;

    relay.submit(&submission()).await?;

    assert_eq!(*state.last_accept.lock().unwrap(), "application/json");

    let body = state.last_body.lock().unwrap().clone();
    assert!(body.contains("name=Jane+Doe"));
    assert!(body.contains("email=jane%40example.com"));
    assert!(body.contains("_subject=New+project+inquiry"));

    Ok(())
}

#[tokio::test]
async fn honeypot_travels_untouched() -> anyhow::Result<()> {
    let (endpoint, state) = spawn_endpoint(StatusCode::OK).await?;
    let relay = FormRelay::new(&endpoint, "subject", Duration::from_secs(5))?;

    let mut filled = submission();
    filled.gotcha = "https://spam.example/offer".to_string();

    relay.submit(&filled).await?;

    let body = state.last_body.lock().unwrap().clone();
    assert!(body.contains("_gotcha=https%3A%2F%2Fspam.example%2Foffer"));

    Ok(())
}

#[tokio::test]
async fn non_success_status_maps_to_rejected() -> anyhow::Result<()> {
    let (endpoint, _state) = spawn_endpoint(StatusCode::UNPROCESSABLE_ENTITY).await?;
    let relay = FormRelay::new(&endpoint, "subject", Duration::from_secs(5))?;

    let err = relay.submit(&submission()).await.unwrap_err();

    assert!(
        matches!(err, RelayError::Rejected { status } if status == StatusCode::UNPROCESSABLE_ENTITY)
    );

    Ok(())
}

#[tokio::test]
async fn unreachable_endpoint_maps_to_transport() -> anyhow::Result<()> {
    // Bind and immediately drop a listener so the port is closed.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let relay = FormRelay::new(
        format!("http://{addr}/f/inbox"),
        "subject",
        Duration::from_secs(5),
    )?;

    let err = relay.submit(&submission()).await.unwrap_err();

    assert!(matches!(err, RelayError::Transport(_)));

    Ok(())
}
