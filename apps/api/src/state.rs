use std::sync::Arc;

use crate::config::Config;
use crate::job_postings::store::{InMemoryJobPostingStore, JobPostingStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable job posting store. Default: InMemoryJobPostingStore.
    pub job_postings: Arc<dyn JobPostingStore>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            job_postings: Arc::new(InMemoryJobPostingStore::new()),
        }
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self::new(Config::default())
    }
}
