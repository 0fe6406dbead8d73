use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::config::Config;
use crate::job_postings::client::JobPostingClient;
use crate::latex::compiler::LatexCompilerClient;
use crate::server;
use crate::workflow::{
    EditorMode, JobPostingDraft, StepController, StepOutcome, SubmissionOutcome, WorkflowState,
};

#[derive(Parser, Debug)]
#[command(
    name = "resume-builder-api",
    about = "Resume builder job posting API and workflow runner",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Run the two-step workflow once: submit the job posting, then export the PDF
    Workflow(WorkflowArgs),
}

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Args, Debug, Default)]
pub struct WorkflowArgs {
    /// JSON file holding the job posting draft
    #[arg(long)]
    pub draft: Option<PathBuf>,
    /// JSON file holding the resume content
    #[arg(long)]
    pub resume: Option<PathBuf>,
    /// Raw LaTeX file; when given it is compiled instead of the generated document
    #[arg(long)]
    pub latex: Option<PathBuf>,
    /// Directory the exported PDF is written to
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
    /// Override the job posting API base URL
    #[arg(long)]
    pub api_url: Option<String>,
    /// Override the LaTeX compiler base URL
    #[arg(long)]
    pub compiler_url: Option<String>,
}

pub async fn run(config: Config) -> Result<()> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => {
            let mut config = config;
            if let Some(port) = args.port {
                config.port = port;
            }
            server::run(config).await
        }
        Command::Workflow(args) => run_workflow(args, &config).await.map(|_| ()),
    }
}

/// Drives the workflow from step 1 through export and returns the written PDF path.
pub async fn run_workflow(args: WorkflowArgs, config: &Config) -> Result<PathBuf> {
    let timeout = Duration::from_secs(config.http_timeout_secs);
    let api_url = args.api_url.as_deref().unwrap_or(&config.job_postings_api_url);
    let compiler_url = args
        .compiler_url
        .as_deref()
        .unwrap_or(&config.latex_compiler_url);

    let submitter = JobPostingClient::new(api_url, timeout)?;
    let compiler = LatexCompilerClient::new(compiler_url, timeout)?;
    let controller = StepController::new(Arc::new(submitter), Arc::new(compiler));

    let mut state = WorkflowState::load(None, read_json_opt(args.resume.as_deref()).await?);
    state.job_posting_draft = read_json_opt::<JobPostingDraft>(args.draft.as_deref())
        .await?
        .unwrap_or_default();
    if let Some(path) = &args.latex {
        state.latex = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read LaTeX from {}", path.display()))?;
        state.mode = EditorMode::Latex;
    }

    match controller.next(&mut state).await {
        StepOutcome::Advanced {
            submission: SubmissionOutcome::Submitted(created),
            ..
        } => info!("Job posting submitted: job_id={}", created.job_id),
        StepOutcome::Advanced {
            submission: SubmissionOutcome::Failed(reason),
            ..
        } => warn!("Continuing without job posting: {reason}"),
        other => bail!("Unexpected outcome leaving step 1: {other:?}"),
    }

    let written = match controller.next(&mut state).await {
        StepOutcome::Exported(document) => {
            let path = args.out_dir.join(&document.file_name);
            tokio::fs::write(&path, &document.bytes)
                .await
                .with_context(|| format!("Failed to write PDF to {}", path.display()))?;
            info!("PDF written to {}", path.display());
            path
        }
        StepOutcome::ExportFailed(message) => bail!("PDF export failed: {message}"),
        other => bail!("Unexpected outcome on export: {other:?}"),
    };

    state.reset();
    Ok(written)
}

async fn read_json_opt<T: DeserializeOwned>(path: Option<&Path>) -> Result<Option<T>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse JSON in {}", path.display()))?;
    Ok(Some(value))
}
