use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeData;
use crate::workflow::draft::JobPostingDraft;

/// The two linear stages of the resume workflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    #[default]
    JobDescriptionAnalysis,
    ContentBuilder,
}

impl Step {
    /// 1-based position shown in the progress bar.
    pub fn number(self) -> u8 {
        match self {
            Step::JobDescriptionAnalysis => 1,
            Step::ContentBuilder => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Step::JobDescriptionAnalysis => "Job Description Analysis",
            Step::ContentBuilder => "Content Builder",
        }
    }
}

/// How the resume is being edited; decides the LaTeX source used for export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorMode {
    #[default]
    Form,
    Latex,
}

/// Everything one run of the workflow reads and writes.
///
/// Passed explicitly to the step controller; nothing reaches it through
/// global state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkflowState {
    pub resume_id: Option<String>,
    pub resume_data: ResumeData,
    /// Raw LaTeX typed in the editor when `mode` is `Latex`.
    pub latex: String,
    pub mode: EditorMode,
    pub job_posting_draft: JobPostingDraft,
    pub current_step: Step,
    pub is_pdf_generating: bool,
    /// Last export failure, shown to the user until the next export attempt.
    pub compile_error: Option<String>,
}

impl WorkflowState {
    /// State for editing an existing resume, or a blank one.
    pub fn load(resume_id: Option<String>, resume_data: Option<ResumeData>) -> Self {
        Self {
            resume_id: resume_id.filter(|id| !id.is_empty()),
            resume_data: resume_data.unwrap_or_default(),
            ..Default::default()
        }
    }

    /// Discards everything, including the draft. Called when the workflow closes.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
