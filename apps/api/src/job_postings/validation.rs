use chrono::NaiveDate;
use reqwest::Url;
use thiserror::Error;

use crate::job_postings::models::{JobPosting, JobPostingPayload};

/// Reasons a job posting payload is rejected. The `Display` text is the exact
/// message returned to HTTP callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid date format. Use YYYY-MM-DD.")]
    InvalidDateFormat,

    #[error("Invalid company_website URL.")]
    InvalidUrl,
}

/// Validates a payload and, on success, returns it with required fields unwrapped.
///
/// Checks run in order and the first failing class wins:
/// 1. required fields (`company_name`, `job_location`, `title`) present and non-empty
/// 2. `close_date` / `posted_date`, when non-empty, are `YYYY-MM-DD` calendar dates
/// 3. `company_website`, when non-empty, is an absolute URL with a host
///
/// Industry, location, description and requirements are never inspected.
pub fn validate(payload: JobPostingPayload) -> Result<JobPosting, ValidationError> {
    let missing = missing_required_fields(&payload);
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    let dates = [payload.close_date.as_deref(), payload.posted_date.as_deref()];
    if !dates
        .into_iter()
        .flatten()
        .filter(|d| !d.is_empty())
        .all(is_valid_date)
    {
        return Err(ValidationError::InvalidDateFormat);
    }

    if let Some(website) = payload.company_website.as_deref() {
        if !website.is_empty() && !is_valid_website(website) {
            return Err(ValidationError::InvalidUrl);
        }
    }

    let JobPostingPayload {
        company_name,
        job_location,
        title,
        close_date,
        posted_date,
        company_industry,
        company_location,
        company_website,
        description,
        requirements,
    } = payload;

    Ok(JobPosting {
        title: title.unwrap_or_default(),
        company_name: company_name.unwrap_or_default(),
        job_location: job_location.unwrap_or_default(),
        close_date,
        posted_date,
        company_industry,
        company_location,
        company_website,
        description,
        requirements,
    })
}

/// Names of required fields that are absent or empty, in check order.
pub fn missing_required_fields(payload: &JobPostingPayload) -> Vec<&'static str> {
    [
        ("company_name", &payload.company_name),
        ("job_location", &payload.job_location),
        ("title", &payload.title),
    ]
    .into_iter()
    .filter(|(_, value)| value.as_deref().map_or(true, str::is_empty))
    .map(|(name, _)| name)
    .collect()
}

/// `YYYY-MM-DD` with exactly four/two/two digits, naming a real calendar day.
pub fn is_valid_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });

    shape_ok && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

/// Absolute URL with a scheme and an authority component.
pub fn is_valid_website(value: &str) -> bool {
    Url::parse(value).map(|url| url.has_host()).unwrap_or(false)
}
