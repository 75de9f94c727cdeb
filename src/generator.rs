use std::{
    fmt,
    path::PathBuf,
    process::{Command, Stdio},
};

use log::debug;

use crate::{
    config::{ReferenceKind, Settings},
    errors::{PipelineError, Result},
};

/// Outcome of one external invocation. A failure carries the exit code, or
/// `None` when the process was killed by a signal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Generation {
    Success,
    Failed(Option<i32>),
}

impl Generation {
    pub fn is_success(&self) -> bool {
        matches!(self, Generation::Success)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Generation::Success => write!(f, "success"),
            Generation::Failed(Some(code)) => write!(f, "FAILED (exit code {code})"),
            Generation::Failed(None) => write!(f, "FAILED (terminated by signal)"),
        }
    }
}

/// Everything that varies between two invocations of the reference maker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateRequest {
    pub reference: PathBuf,
    pub output: PathBuf,
    pub variant: PathBuf,
    pub memory_limit: String,
}

impl GenerateRequest {
    pub fn new(settings: &Settings, sample: &str, kind: ReferenceKind) -> Self {
        Self {
            reference: settings.reference(kind).to_path_buf(),
            output: settings.sequence_path(sample),
            variant: settings.variant_path(sample),
            memory_limit: settings.memory_limit.clone(),
        }
    }
}

/// Produces `<sample>.fasta` for a sample against one region reference.
pub trait ReferenceGenerator {
    fn generate(&mut self, sample: &str, kind: ReferenceKind) -> Result<Generation>;
}

/// Runs GATK's FastaAlternateReferenceMaker as a child process and waits for it.
pub struct ExternalGenerator<'a> {
    settings: &'a Settings,
    verbose: bool,
}

impl<'a> ExternalGenerator<'a> {
    pub fn new(settings: &'a Settings, verbose: bool) -> Self {
        Self { settings, verbose }
    }
}

impl ReferenceGenerator for ExternalGenerator<'_> {
    fn generate(&mut self, sample: &str, kind: ReferenceKind) -> Result<Generation> {
        let request = GenerateRequest::new(self.settings, sample, kind);
        let mut command = build_command(self.settings, &request);
        if !self.verbose {
            command.stdout(Stdio::null()).stderr(Stdio::null());
        }
        debug!("running {command:?}");

        // No timeout: a hung tool hangs the run.
        let status = command.status().map_err(|source| PipelineError::Launch {
            program: self.settings.program.clone(),
            source,
        })?;
        Ok(if status.success() {
            Generation::Success
        } else {
            Generation::Failed(status.code())
        })
    }
}

/// `java -Xmx2g -jar GenomeAnalysisTK.jar -R REF -T FastaAlternateReferenceMaker -o OUT --variant VCF`
pub fn build_command(settings: &Settings, request: &GenerateRequest) -> Command {
    let mut command = Command::new(&settings.program);
    command
        .arg(&request.memory_limit)
        .arg("-jar")
        .arg(&settings.jar)
        .arg("-R")
        .arg(&request.reference)
        .arg("-T")
        .arg(&settings.tool)
        .arg("-o")
        .arg(&request.output)
        .arg("--variant")
        .arg(&request.variant);
    command
}
