// Two-step resume workflow: the injected state handle, job posting draft
// assembly, and the step controller that ties submission and export together.

pub mod controller;
pub mod draft;
pub mod state;

pub use controller::{PdfDocument, StepAction, StepController, StepOutcome, SubmissionOutcome};
pub use draft::JobPostingDraft;
pub use state::{EditorMode, Step, WorkflowState};
