use std::path::PathBuf;

use log::{info, warn};

use crate::{
    config::{ReferenceKind, Settings},
    errors::PipelineError,
    generator::{Generation, ReferenceGenerator},
    pairs::PairRegistry,
    sequences,
};

#[derive(Debug)]
pub struct GenerationOutcome {
    pub sample: String,
    pub kind: ReferenceKind,
    pub output: PathBuf,
    pub result: Result<Generation, PipelineError>,
}

impl GenerationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self.result, Ok(Generation::Success))
    }
}

#[derive(Debug)]
pub struct JoinOutcome {
    pub first: PathBuf,
    pub second: PathBuf,
    pub result: Result<PathBuf, PipelineError>,
}

/// Per-item results of one pass, in execution order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub generations: Vec<GenerationOutcome>,
    pub joins: Vec<JoinOutcome>,
}

impl BatchReport {
    pub fn failed_generations(&self) -> usize {
        self.generations.iter().filter(|g| !g.is_success()).count()
    }

    pub fn failed_joins(&self) -> usize {
        self.joins.iter().filter(|j| j.result.is_err()).count()
    }
}

/// Generate every sample's FASTA, then join each pair. Item failures are
/// recorded in the report and never stop the pass.
pub fn run<G: ReferenceGenerator>(
    settings: &Settings,
    registry: &PairRegistry,
    generator: &mut G,
) -> BatchReport {
    let mut report = BatchReport::default();
    if registry.is_empty() {
        warn!("no sample pairs to process");
    }

    info!("Generating FASTA Files....");
    let primaries = registry.firsts().map(|s| (s, ReferenceKind::Primary));
    let secondaries = registry.seconds().map(|s| (s, ReferenceKind::Secondary));
    for (sample, kind) in primaries.chain(secondaries) {
        let outcome = generate_one(settings, generator, sample, kind);
        report.generations.push(outcome);
    }

    info!("Joining FASTA Files....");
    for entry in registry.entries() {
        let first = settings.sequence_path(&entry.first);
        let second = settings.sequence_path(&entry.second);
        let result = sequences::join(&first, &second, &settings.work_dir, &settings.extension);
        match &result {
            Ok(output) => info!(
                "Joining {} {} => {}",
                first.display(),
                second.display(),
                output.display()
            ),
            Err(e) => {
                warn!(
                    "Joining {} {} => FAILED: {e}",
                    first.display(),
                    second.display()
                );
                if e.is_not_found() {
                    warn!("ERROR: No such file");
                }
            }
        }
        report.joins.push(JoinOutcome {
            first,
            second,
            result,
        });
    }

    report
}

fn generate_one<G: ReferenceGenerator>(
    settings: &Settings,
    generator: &mut G,
    sample: &str,
    kind: ReferenceKind,
) -> GenerationOutcome {
    let output = settings.sequence_path(sample);
    let result = generator.generate(sample, kind);
    match &result {
        Ok(status @ Generation::Success) => info!("{} => {status}", output.display()),
        Ok(status) => warn!("{} => {status}", output.display()),
        Err(e) => warn!("{} => FAILED: {e}", output.display()),
    }
    GenerationOutcome {
        sample: sample.to_string(),
        kind,
        output,
        result,
    }
}
