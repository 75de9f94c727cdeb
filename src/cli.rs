use std::{ffi::OsString, path::PathBuf};

use clap::Parser;

use crate::errors::PipelineError;

/// Generate per-region FASTA files with GATK for every sample pair in
/// config1.txt, then join each pair into <sample>_joined.fasta
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// show GATK output (and debug logging)
    #[arg(short)]
    pub verbose: bool,
}

/// Join two single-record FASTA files into <FASTA_1 sample>_joined.fasta
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct JoinCli {
    /// first region FASTA file; its name (before the first '_') names the output
    #[arg(value_name = "FASTA_1")]
    pub first: PathBuf,

    /// second region FASTA file, appended after the first
    #[arg(value_name = "FASTA_2")]
    pub second: PathBuf,
}

/// Parse `args` (program name first). Help and version flags are not
/// accepted, so every parse failure is a `Usage` error.
pub fn parse_args<T, I, S>(args: I) -> Result<T, PipelineError>
where
    T: Parser,
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    T::try_parse_from(args).map_err(|e| PipelineError::Usage(e.render().to_string()))
}
