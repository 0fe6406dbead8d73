//! Step Controller — drives the two-step resume workflow.
//!
//! Transition table:
//!
//! | Step | Action | Effect                                                      |
//! |------|--------|-------------------------------------------------------------|
//! | 1    | back   | leave the workflow (`NavigateHome`), step unchanged         |
//! | 1    | next   | submit the job posting, then move to step 2 whatever happens |
//! | 2    | back   | move to step 1                                              |
//! | 2    | next   | export the PDF, step unchanged                              |
//!
//! Job posting submission is best effort: its result is reported in the
//! outcome and logged, but never blocks or rolls back a transition. Export
//! failures are the opposite: they are stored in `compile_error` for the user.

use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;
use tracing::{info, warn};

use crate::job_postings::client::{ClientError, JobPostingSubmitter};
use crate::job_postings::models::JobPostingResponse;
use crate::latex::compiler::{CompileError, PdfCompiler};
use crate::latex::generator::generate_latex;
use crate::workflow::state::{EditorMode, Step, WorkflowState};

const DEFAULT_EXPORT_ERROR: &str = "Failed to download PDF";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    Back,
    Next,
}

/// Result of the job posting side effect when leaving step 1.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Submitted(JobPostingResponse),
    Failed(String),
}

/// A compiled resume ready to be saved.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfDocument {
    pub file_name: String,
    pub bytes: Bytes,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// Back on step 1: the caller should leave the workflow.
    NavigateHome,
    Advanced {
        to: Step,
        submission: SubmissionOutcome,
    },
    Retreated {
        to: Step,
    },
    Exported(PdfDocument),
    /// Export failed; the message is also in `WorkflowState::compile_error`.
    ExportFailed(String),
}

#[derive(Clone)]
pub struct StepController {
    submitter: Arc<dyn JobPostingSubmitter>,
    compiler: Arc<dyn PdfCompiler>,
}

impl StepController {
    pub fn new(submitter: Arc<dyn JobPostingSubmitter>, compiler: Arc<dyn PdfCompiler>) -> Self {
        Self {
            submitter,
            compiler,
        }
    }

    pub async fn handle(&self, state: &mut WorkflowState, action: StepAction) -> StepOutcome {
        match action {
            StepAction::Back => self.back(state),
            StepAction::Next => self.next(state).await,
        }
    }

    pub fn back(&self, state: &mut WorkflowState) -> StepOutcome {
        match state.current_step {
            Step::JobDescriptionAnalysis => StepOutcome::NavigateHome,
            Step::ContentBuilder => {
                state.current_step = Step::JobDescriptionAnalysis;
                StepOutcome::Retreated {
                    to: state.current_step,
                }
            }
        }
    }

    pub async fn next(&self, state: &mut WorkflowState) -> StepOutcome {
        match state.current_step {
            Step::JobDescriptionAnalysis => {
                let submission = match self.submit_job_posting(state).await {
                    Ok(created) => {
                        info!("Job posting {} created", created.job_id);
                        SubmissionOutcome::Submitted(created)
                    }
                    Err(e) => {
                        warn!("Job posting creation failed: {e}");
                        SubmissionOutcome::Failed(e.to_string())
                    }
                };

                state.current_step = Step::ContentBuilder;
                StepOutcome::Advanced {
                    to: state.current_step,
                    submission,
                }
            }
            Step::ContentBuilder => match self.export_pdf(state).await {
                Ok(document) => StepOutcome::Exported(document),
                Err(message) => StepOutcome::ExportFailed(message),
            },
        }
    }

    /// Assembles the draft into a posting and submits it.
    pub async fn submit_job_posting(
        &self,
        state: &WorkflowState,
    ) -> Result<JobPostingResponse, ClientError> {
        let posting = state
            .job_posting_draft
            .assemble(state.resume_data.display_name());
        self.submitter.submit(&posting).await
    }

    /// Compiles the resume. On failure the user-facing message is stored in
    /// `compile_error` and returned.
    pub async fn export_pdf(&self, state: &mut WorkflowState) -> Result<PdfDocument, String> {
        state.is_pdf_generating = true;
        state.compile_error = None;

        let result = self.compile(state).await;
        state.is_pdf_generating = false;

        match result {
            Ok(bytes) => {
                let document = PdfDocument {
                    file_name: format!("resume-{}.pdf", Utc::now().timestamp_millis()),
                    bytes,
                };
                info!("PDF generated: {}", document.file_name);
                Ok(document)
            }
            Err(e) => {
                let message = Some(e.to_string())
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| DEFAULT_EXPORT_ERROR.to_string());
                tracing::error!("PDF export failed: {message}");
                state.compile_error = Some(message.clone());
                Err(message)
            }
        }
    }

    async fn compile(&self, state: &WorkflowState) -> Result<Bytes, CompileError> {
        match state.mode {
            EditorMode::Latex => self.compiler.compile(&state.latex).await,
            EditorMode::Form => {
                let latex = generate_latex(&state.resume_data);
                self.compiler.compile(&latex).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::job_postings::models::JobPosting;
    use crate::models::resume::{PersonalInfo, ResumeData};

    /// Records every posting and answers with a fixed result.
    #[derive(Default)]
    struct RecordingSubmitter {
        fail_with: Option<String>,
        seen: Mutex<Vec<JobPosting>>,
    }

    impl RecordingSubmitter {
        fn failing(message: &str) -> Self {
            Self {
                fail_with: Some(message.to_string()),
                ..Default::default()
            }
        }

        fn calls(&self) -> usize {
            self.seen.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl JobPostingSubmitter for RecordingSubmitter {
        async fn submit(&self, posting: &JobPosting) -> Result<JobPostingResponse, ClientError> {
            self.seen.lock().unwrap().push(posting.clone());
            match &self.fail_with {
                Some(message) => Err(ClientError::Rejected {
                    status: 500,
                    message: message.clone(),
                }),
                None => Ok(JobPostingResponse::created(7)),
            }
        }
    }

    #[derive(Default)]
    struct StubCompiler {
        fail_with: Option<String>,
        calls: AtomicUsize,
        last_source: Mutex<Option<String>>,
    }

    #[async_trait]
    impl PdfCompiler for StubCompiler {
        async fn compile(&self, latex: &str) -> Result<Bytes, CompileError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_source.lock().unwrap() = Some(latex.to_string());
            match &self.fail_with {
                Some(message) => Err(CompileError::Compiler(message.clone())),
                None => Ok(Bytes::from_static(b"%PDF-1.7")),
            }
        }
    }

    fn controller(
        submitter: Arc<RecordingSubmitter>,
        compiler: Arc<StubCompiler>,
    ) -> StepController {
        StepController::new(submitter, compiler)
    }

    #[tokio::test]
    async fn test_next_on_step_one_submits_and_advances() {
        let submitter = Arc::new(RecordingSubmitter::default());
        let ctl = controller(submitter.clone(), Arc::new(StubCompiler::default()));
        let mut state = WorkflowState::default();
        state.job_posting_draft.company_name = Some("Acme".to_string());

        let outcome = ctl.next(&mut state).await;

        assert_eq!(
            outcome,
            StepOutcome::Advanced {
                to: Step::ContentBuilder,
                submission: SubmissionOutcome::Submitted(JobPostingResponse::created(7)),
            }
        );
        assert_eq!(state.current_step, Step::ContentBuilder);
        let seen = submitter.seen.lock().unwrap();
        assert_eq!(seen[0].company_name, "Acme");
        assert_eq!(seen[0].job_location, "Unknown");
    }

    #[tokio::test]
    async fn test_failed_submission_still_advances() {
        let submitter = Arc::new(RecordingSubmitter::failing("Failed to create job posting (500)"));
        let ctl = controller(submitter.clone(), Arc::new(StubCompiler::default()));
        let mut state = WorkflowState::default();

        let outcome = ctl.handle(&mut state, StepAction::Next).await;

        assert_eq!(state.current_step, Step::ContentBuilder);
        assert_eq!(
            outcome,
            StepOutcome::Advanced {
                to: Step::ContentBuilder,
                submission: SubmissionOutcome::Failed(
                    "Failed to create job posting (500)".to_string()
                ),
            }
        );
        assert_eq!(submitter.calls(), 1);
        assert!(state.compile_error.is_none());
    }

    #[tokio::test]
    async fn test_resume_name_is_the_title_fallback() {
        let submitter = Arc::new(RecordingSubmitter::default());
        let ctl = controller(submitter.clone(), Arc::new(StubCompiler::default()));
        let mut state = WorkflowState::load(
            None,
            Some(ResumeData {
                personal_info: Some(PersonalInfo {
                    name: "Ada Lovelace".to_string(),
                    ..Default::default()
                }),
                ..Default::default()
            }),
        );

        ctl.next(&mut state).await;

        assert_eq!(submitter.seen.lock().unwrap()[0].title, "Ada Lovelace");
    }

    #[tokio::test]
    async fn test_back_on_step_one_navigates_home() {
        let submitter = Arc::new(RecordingSubmitter::default());
        let ctl = controller(submitter.clone(), Arc::new(StubCompiler::default()));
        let mut state = WorkflowState::default();

        assert_eq!(ctl.back(&mut state), StepOutcome::NavigateHome);
        assert_eq!(state.current_step, Step::JobDescriptionAnalysis);
        assert_eq!(submitter.calls(), 0);
    }

    #[tokio::test]
    async fn test_back_on_step_two_returns_to_step_one() {
        let ctl = controller(
            Arc::new(RecordingSubmitter::default()),
            Arc::new(StubCompiler::default()),
        );
        let mut state = WorkflowState {
            current_step: Step::ContentBuilder,
            ..Default::default()
        };

        let outcome = ctl.handle(&mut state, StepAction::Back).await;

        assert_eq!(
            outcome,
            StepOutcome::Retreated {
                to: Step::JobDescriptionAnalysis
            }
        );
        assert_eq!(state.current_step, Step::JobDescriptionAnalysis);
    }

    #[tokio::test]
    async fn test_each_advance_submits_again() {
        let submitter = Arc::new(RecordingSubmitter::default());
        let ctl = controller(submitter.clone(), Arc::new(StubCompiler::default()));
        let mut state = WorkflowState::default();

        ctl.next(&mut state).await;
        ctl.back(&mut state);
        ctl.next(&mut state).await;

        assert_eq!(submitter.calls(), 2);
        assert_eq!(state.current_step, Step::ContentBuilder);
    }

    #[tokio::test]
    async fn test_next_on_step_two_exports_without_moving() {
        let submitter = Arc::new(RecordingSubmitter::default());
        let compiler = Arc::new(StubCompiler::default());
        let ctl = controller(submitter.clone(), compiler.clone());
        let mut state = WorkflowState {
            current_step: Step::ContentBuilder,
            compile_error: Some("stale".to_string()),
            ..Default::default()
        };

        let outcome = ctl.next(&mut state).await;

        let StepOutcome::Exported(document) = outcome else {
            panic!("expected export, got {outcome:?}");
        };
        assert!(document.file_name.starts_with("resume-"));
        assert!(document.file_name.ends_with(".pdf"));
        assert_eq!(&document.bytes[..], b"%PDF-1.7");
        assert_eq!(state.current_step, Step::ContentBuilder);
        assert!(!state.is_pdf_generating);
        assert!(state.compile_error.is_none());
        assert_eq!(compiler.calls.load(Ordering::SeqCst), 1);
        assert_eq!(submitter.calls(), 0);
    }

    #[tokio::test]
    async fn test_export_failure_is_surfaced_to_the_user() {
        let compiler = Arc::new(StubCompiler {
            fail_with: Some("Undefined control sequence".to_string()),
            ..Default::default()
        });
        let ctl = controller(Arc::new(RecordingSubmitter::default()), compiler);
        let mut state = WorkflowState {
            current_step: Step::ContentBuilder,
            ..Default::default()
        };

        let outcome = ctl.next(&mut state).await;

        assert_eq!(
            outcome,
            StepOutcome::ExportFailed("Undefined control sequence".to_string())
        );
        assert_eq!(
            state.compile_error.as_deref(),
            Some("Undefined control sequence")
        );
        assert!(!state.is_pdf_generating);
        assert_eq!(state.current_step, Step::ContentBuilder);
    }

    #[tokio::test]
    async fn test_empty_compiler_message_uses_default() {
        let compiler = Arc::new(StubCompiler {
            fail_with: Some(String::new()),
            ..Default::default()
        });
        let ctl = controller(Arc::new(RecordingSubmitter::default()), compiler);
        let mut state = WorkflowState::default();

        let err = ctl.export_pdf(&mut state).await.unwrap_err();

        assert_eq!(err, "Failed to download PDF");
        assert_eq!(state.compile_error.as_deref(), Some("Failed to download PDF"));
    }

    #[tokio::test]
    async fn test_latex_mode_compiles_raw_source() {
        let compiler = Arc::new(StubCompiler::default());
        let ctl = controller(Arc::new(RecordingSubmitter::default()), compiler.clone());
        let mut state = WorkflowState {
            mode: EditorMode::Latex,
            latex: "\\documentclass{article}".to_string(),
            ..Default::default()
        };

        ctl.export_pdf(&mut state).await.unwrap();

        assert_eq!(
            compiler.last_source.lock().unwrap().as_deref(),
            Some("\\documentclass{article}")
        );
    }

    #[tokio::test]
    async fn test_form_mode_compiles_generated_source() {
        let compiler = Arc::new(StubCompiler::default());
        let ctl = controller(Arc::new(RecordingSubmitter::default()), compiler.clone());
        let mut state = WorkflowState {
            latex: "ignored".to_string(),
            ..Default::default()
        };

        ctl.export_pdf(&mut state).await.unwrap();

        let source = compiler.last_source.lock().unwrap().clone().unwrap();
        assert!(source.contains("\\begin{document}"));
        assert_ne!(source, "ignored");
    }
}
