use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub const COMPILE_PATH: &str = "/api/compile-latex";
const DEFAULT_COMPILE_ERROR: &str = "Failed to compile LaTeX";

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The compiler answered with a failure; displays as its message.
    #[error("{0}")]
    Compiler(String),
}

/// Turns LaTeX source into PDF bytes.
#[async_trait]
pub trait PdfCompiler: Send + Sync {
    async fn compile(&self, latex: &str) -> Result<Bytes, CompileError>;
}

#[derive(Debug, Serialize)]
struct CompileRequest<'a> {
    latex: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompileErrorBody {
    error: Option<String>,
}

/// Client for the external LaTeX compiler service.
#[derive(Clone)]
pub struct LatexCompilerClient {
    client: Client,
    endpoint: String,
}

impl LatexCompilerClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CompileError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), COMPILE_PATH),
        })
    }
}

#[async_trait]
impl PdfCompiler for LatexCompilerClient {
    async fn compile(&self, latex: &str) -> Result<Bytes, CompileError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&CompileRequest { latex })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<CompileErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| DEFAULT_COMPILE_ERROR.to_string());
            return Err(CompileError::Compiler(message));
        }

        let pdf = response.bytes().await?;
        debug!("Compiled LaTeX into {} byte PDF", pdf.len());
        Ok(pdf)
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};

    use super::*;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn compiler(base: &str) -> LatexCompilerClient {
        LatexCompilerClient::new(base, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_successful_compile_returns_pdf_bytes() {
        let router = Router::new().route(
            COMPILE_PATH,
            post(|Json(body): Json<Value>| async move {
                assert!(body["latex"].as_str().unwrap().contains("\\begin{document}"));
                b"%PDF-1.7 fake".to_vec()
            }),
        );
        let base = serve(router).await;

        let pdf = compiler(&base)
            .compile("\\begin{document}\\end{document}")
            .await
            .unwrap();

        assert!(pdf.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_compiler_error_message_is_surfaced() {
        let router = Router::new().route(
            COMPILE_PATH,
            post(|| async {
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({"error": "Undefined control sequence"})),
                )
            }),
        );
        let base = serve(router).await;

        let err = compiler(&base).compile("\\oops").await.unwrap_err();

        assert_eq!(err.to_string(), "Undefined control sequence");
    }

    #[tokio::test]
    async fn test_error_without_body_uses_default_message() {
        let router = Router::new().route(
            COMPILE_PATH,
            post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let base = serve(router).await;

        let err = compiler(&base).compile("x").await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to compile LaTeX");
    }
}
