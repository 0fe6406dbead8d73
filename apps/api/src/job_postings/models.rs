use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const CREATED_MESSAGE: &str = "Job posting created successfully";

/// Request body accepted by `POST /api/job-postings`.
///
/// Required fields are optional here so that an absent field is reported as
/// missing by the validator instead of rejecting the whole body as malformed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobPostingPayload {
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub job_location: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub close_date: Option<String>,
    #[serde(default)]
    pub posted_date: Option<String>,
    #[serde(default)]
    pub company_industry: Option<String>,
    #[serde(default)]
    pub company_location: Option<String>,
    #[serde(default)]
    pub company_website: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub requirements: Option<Vec<Value>>,
}

/// A job posting whose required fields are guaranteed present.
///
/// Produced by the validator on the server and by draft assembly on the
/// client, so both sides of the wire share one shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company_name: String,
    pub job_location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<Value>>,
}

/// A stored job posting.
#[derive(Debug, Clone, Serialize)]
pub struct JobPostingRecord {
    pub job_id: i64,
    #[serde(flatten)]
    pub posting: JobPosting,
    pub created_at: DateTime<Utc>,
}

/// Success body of `POST /api/job-postings` (status 201).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPostingResponse {
    pub job_id: i64,
    pub message: String,
    pub success: bool,
}

impl JobPostingResponse {
    pub fn created(job_id: i64) -> Self {
        Self {
            job_id,
            message: CREATED_MESSAGE.to_string(),
            success: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_tolerates_missing_and_null_fields() {
        let payload: JobPostingPayload =
            serde_json::from_value(json!({"title": null, "company_name": "Acme"})).unwrap();
        assert_eq!(payload.company_name.as_deref(), Some("Acme"));
        assert!(payload.title.is_none());
        assert!(payload.job_location.is_none());
    }

    #[test]
    fn test_payload_keeps_requirements_opaque() {
        let payload: JobPostingPayload = serde_json::from_value(json!({
            "requirements": ["Rust", {"years": 3}, 7]
        }))
        .unwrap();
        let requirements = payload.requirements.unwrap();
        assert_eq!(requirements.len(), 3);
        assert_eq!(requirements[1]["years"], 3);
    }

    #[test]
    fn test_job_posting_omits_absent_optionals() {
        let posting = JobPosting {
            title: "Engineer".to_string(),
            company_name: "Acme".to_string(),
            job_location: "Remote".to_string(),
            close_date: None,
            posted_date: Some("2024-01-01".to_string()),
            company_industry: None,
            company_location: None,
            company_website: None,
            description: None,
            requirements: None,
        };
        let value = serde_json::to_value(&posting).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 4);
        assert_eq!(value["posted_date"], "2024-01-01");
        assert!(object.get("close_date").is_none());
    }

    #[test]
    fn test_created_response_shape() {
        let response = JobPostingResponse::created(42);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"job_id": 42, "message": "Job posting created successfully", "success": true})
        );
    }
}
