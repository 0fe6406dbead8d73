use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::job_postings::models::JobPosting;

pub const DEFAULT_TITLE: &str = "Untitled";
pub const DEFAULT_COMPANY: &str = "Unknown";
pub const DEFAULT_LOCATION: &str = "Unknown";

/// Job posting data collected during the first workflow step.
///
/// Every field may be missing while the user is still typing; `assemble`
/// fills the required ones before anything is sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobPostingDraft {
    pub title: Option<String>,
    pub company_name: Option<String>,
    pub job_location: Option<String>,
    pub close_date: Option<String>,
    pub posted_date: Option<String>,
    pub company_industry: Option<String>,
    pub company_location: Option<String>,
    pub company_website: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<Vec<Value>>,
}

impl JobPostingDraft {
    /// Builds the posting to submit.
    ///
    /// Required fields use the trimmed draft value; blank values fall back to
    /// `fallback_title` (title only) and then to fixed defaults. Optional
    /// fields are passed through untouched.
    pub fn assemble(&self, fallback_title: Option<&str>) -> JobPosting {
        let title = non_blank(&self.title)
            .or_else(|| fallback_title.map(str::trim).filter(|t| !t.is_empty()))
            .unwrap_or(DEFAULT_TITLE);

        JobPosting {
            title: title.to_string(),
            company_name: non_blank(&self.company_name)
                .unwrap_or(DEFAULT_COMPANY)
                .to_string(),
            job_location: non_blank(&self.job_location)
                .unwrap_or(DEFAULT_LOCATION)
                .to_string(),
            close_date: self.close_date.clone(),
            posted_date: self.posted_date.clone(),
            company_industry: self.company_industry.clone(),
            company_location: self.company_location.clone(),
            company_website: self.company_website.clone(),
            description: self.description.clone(),
            requirements: self.requirements.clone(),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
