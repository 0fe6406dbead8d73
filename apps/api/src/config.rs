use anyhow::{Context, Result};

const DEFAULT_SESSION_COOKIE: &str = "next-auth.session-token";

/// Application configuration loaded from environment variables.
/// Every value has a default so the service can start with an empty environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Base URL the job posting client submits to (the endpoint served by this crate).
    pub job_postings_api_url: String,
    /// Base URL of the external LaTeX compiler service.
    pub latex_compiler_url: String,
    /// Cookie carrying the session token checked by the auth redirect middleware.
    pub session_cookie_name: String,
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        Ok(Config {
            port,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            job_postings_api_url: optional_env("JOB_POSTINGS_API_URL")
                .unwrap_or_else(|| format!("http://localhost:{port}")),
            latex_compiler_url: optional_env("LATEX_COMPILER_URL")
                .unwrap_or_else(|| "http://localhost:3000".to_string()),
            session_cookie_name: optional_env("SESSION_COOKIE_NAME")
                .unwrap_or_else(|| DEFAULT_SESSION_COOKIE.to_string()),
            http_timeout_secs: match optional_env("HTTP_TIMEOUT_SECS") {
                Some(raw) => raw
                    .parse::<u64>()
                    .context("HTTP_TIMEOUT_SECS must be a whole number of seconds")?,
                None => 30,
            },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            job_postings_api_url: "http://localhost:8080".to_string(),
            latex_compiler_url: "http://localhost:3000".to_string(),
            session_cookie_name: DEFAULT_SESSION_COOKIE.to_string(),
            http_timeout_secs: 30,
        }
    }
}

/// Reads a variable, treating unset and blank values the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
