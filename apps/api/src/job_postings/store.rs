//! Job posting storage — trait-based handoff between the endpoint and whatever
//! persists postings.
//!
//! Default: `InMemoryJobPostingStore`, identifiers drawn from a process-wide
//! sequence. `AppState` holds an `Arc<dyn JobPostingStore>`.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;

use crate::job_postings::models::{JobPosting, JobPostingRecord};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("job id sequence exhausted")]
    SequenceExhausted,
}

/// Persists validated job postings and hands back the assigned identifier.
///
/// Implementations must never assign the same `job_id` twice.
#[async_trait]
pub trait JobPostingStore: Send + Sync {
    async fn insert(&self, posting: JobPosting) -> Result<JobPostingRecord, StoreError>;

    async fn get(&self, job_id: i64) -> Result<Option<JobPostingRecord>, StoreError>;
}

/// Process-local store. Postings live as long as the server does.
#[derive(Debug)]
pub struct InMemoryJobPostingStore {
    next_id: AtomicI64,
    postings: RwLock<BTreeMap<i64, JobPostingRecord>>,
}

impl InMemoryJobPostingStore {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Store whose first assigned id is `first_id`.
    pub fn starting_at(first_id: i64) -> Self {
        Self {
            next_id: AtomicI64::new(first_id),
            postings: RwLock::new(BTreeMap::new()),
        }
    }

    pub async fn len(&self) -> usize {
        self.postings.read().await.len()
    }

    fn allocate_id(&self) -> Result<i64, StoreError> {
        self.next_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |id| id.checked_add(1))
            .map_err(|_| StoreError::SequenceExhausted)
    }
}

impl Default for InMemoryJobPostingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JobPostingStore for InMemoryJobPostingStore {
    async fn insert(&self, posting: JobPosting) -> Result<JobPostingRecord, StoreError> {
        let job_id = self.allocate_id()?;
        let record = JobPostingRecord {
            job_id,
            posting,
            created_at: Utc::now(),
        };

        self.postings.write().await.insert(job_id, record.clone());
        debug!("Stored job posting {job_id}");
        Ok(record)
    }

    async fn get(&self, job_id: i64) -> Result<Option<JobPostingRecord>, StoreError> {
        Ok(self.postings.read().await.get(&job_id).cloned())
    }
}
