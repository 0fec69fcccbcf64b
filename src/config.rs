use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub contact: ContactConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContactConfig {
    /// Third-party form-processing endpoint. External configuration on
    /// purpose: never a literal in code.
    pub endpoint: String,
    #[serde(default = "default_subject")]
    pub subject: String,
    #[serde(default = "default_fallback_email")]
    pub fallback_email: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_subject() -> String {
    "New project inquiry".to_string()
}

fn default_fallback_email() -> String {
    "hello@arjayferrer.com".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

/// Display values rendered into the page: owner identity, profile links,
/// and the CV filename offered on download.
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_owner")]
    pub owner: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_hours")]
    pub hours: String,
    #[serde(default = "default_email")]
    pub email: String,
    #[serde(default = "default_linkedin_url")]
    pub linkedin_url: String,
    #[serde(default = "default_github_url")]
    pub github_url: String,
    #[serde(default = "default_cv_filename")]
    pub cv_filename: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            tagline: default_tagline(),
            location: default_location(),
            hours: default_hours(),
            email: default_email(),
            linkedin_url: default_linkedin_url(),
            github_url: default_github_url(),
            cv_filename: default_cv_filename(),
        }
    }
}

fn default_owner() -> String {
    "Arjay Ferrer".to_string()
}

fn default_tagline() -> String {
    "NetSuite Admin • IT & Systems • Web Design/UX".to_string()
}

fn default_location() -> String {
    "Dubai, UAE".to_string()
}

fn default_hours() -> String {
    "Mon–Fri • 8–5 GST".to_string()
}

fn default_email() -> String {
    "hello@arjayferrer.com".to_string()
}

fn default_linkedin_url() -> String {
    "https://www.linkedin.com/in/jayferrer".to_string()
}

fn default_github_url() -> String {
    "https://github.com/".to_string()
}

fn default_cv_filename() -> String {
    "CVArjayFerrer.pdf".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (PORTFOLIO__CONTACT__ENDPOINT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        // Set defaults
        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        // Load config file if path provided or CONFIG_PATH env var set
        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Try to load config file (optional - ignore if not found)
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        // Override with environment variables (PORTFOLIO__CONTACT__ENDPOINT, etc.)
        builder = builder.add_source(
            Environment::with_prefix("PORTFOLIO")
                .separator("__")
                .try_parsing(true),
        );

        // Also support the short environment variable without prefix
        if let Ok(endpoint) = env::var("CONTACT_ENDPOINT") {
            builder = builder.set_override("contact.endpoint", endpoint)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        let endpoint = url::Url::parse(&self.contact.endpoint)
            .map_err(|e| format!("contact.endpoint is not a valid URL: {e}"))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err("contact.endpoint must be an http(s) URL".to_string());
        }
        if self.contact.timeout_seconds == 0 {
            return Err("contact.timeout_seconds must be at least 1".to_string());
        }
        if !self.contact.fallback_email.contains('@') {
            return Err("contact.fallback_email must be an email address".to_string());
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        Ok(())
    }
}
