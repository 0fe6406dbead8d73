// Job posting submission pipeline: wire models, validation, storage handoff,
// the HTTP endpoint, and the client that calls it.

pub mod client;
pub mod handlers;
pub mod models;
pub mod store;
pub mod validation;

pub use client::{ClientError, JobPostingClient, JobPostingSubmitter};
pub use models::{JobPosting, JobPostingPayload, JobPostingRecord, JobPostingResponse};
pub use store::{InMemoryJobPostingStore, JobPostingStore};
