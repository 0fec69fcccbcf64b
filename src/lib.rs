pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod routes;

pub use routes::AppState;

/// Create the app router from a loaded configuration.
///
/// Also the entry point for integration tests, which build a `Config` by
/// hand and drive the router without binding a listener.
pub fn create_app(config: config::Config) -> anyhow::Result<axum::Router> {
    let relay = portfolio_contact::FormRelay::new(
        &config.contact.endpoint,
        &config.contact.subject,
        std::time::Duration::from_secs(config.contact.timeout_seconds),
    )?;

    Ok(routes::router(AppState { config, relay }))
}
