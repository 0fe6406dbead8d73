//! Job Posting client — submits assembled postings to `POST /api/job-postings`
//! and turns non-2xx answers into errors carrying the server's message.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::job_postings::models::{JobPosting, JobPostingResponse};

pub const JOB_POSTINGS_PATH: &str = "/api/job-postings";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx answer. Displays as the server's message, or a generic one
    /// naming the status when the body had none.
    #[error("{message}")]
    Rejected { status: u16, message: String },
}

/// Anything that can accept a job posting on behalf of the workflow.
#[async_trait]
pub trait JobPostingSubmitter: Send + Sync {
    async fn submit(&self, posting: &JobPosting) -> Result<JobPostingResponse, ClientError>;
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Clone)]
pub struct JobPostingClient {
    client: Client,
    endpoint: String,
}

impl JobPostingClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), JOB_POSTINGS_PATH),
        })
    }

    pub async fn create_job_posting(
        &self,
        posting: &JobPosting,
    ) -> Result<JobPostingResponse, ClientError> {
        let response = self.client.post(&self.endpoint).json(posting).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|e| e.message)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| {
                    format!("Failed to create job posting ({})", status.as_u16())
                });
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let created: JobPostingResponse = response.json().await?;
        debug!("Job posting accepted with job_id={}", created.job_id);
        Ok(created)
    }
}

#[async_trait]
impl JobPostingSubmitter for JobPostingClient {
    async fn submit(&self, posting: &JobPosting) -> Result<JobPostingResponse, ClientError> {
        self.create_job_posting(posting).await
    }
}
