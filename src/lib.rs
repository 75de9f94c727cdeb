//! Batch preparation of paired mitochondrial hypervariable-region sequences.
//!
//! For every `FIRST,SECOND` pair in the config file, GATK's
//! FastaAlternateReferenceMaker builds `FIRST.fasta` against the HVR-I
//! reference and `SECOND.fasta` against HVR-II; the two records are then
//! joined into one `<sample>_joined.fasta` under a single header.

pub mod cli;
pub mod config;
pub mod errors;
pub mod generator;
pub mod pairs;
pub mod pipeline;
pub mod sequences;

pub use config::{ReferenceKind, Settings};
pub use errors::PipelineError;

/// Log to stderr without timestamps or targets. `RUST_LOG` still wins.
pub fn init_logging(level: log::LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
}
