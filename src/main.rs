use std::{env, process::ExitCode};

use anyhow::{Context, Result};
use log::{error, LevelFilter};

use hvrjoin::{
    cli::{self, Cli},
    generator::ExternalGenerator,
    pairs::PairRegistry,
    pipeline::{self, BatchReport},
    PipelineError, Settings,
};

fn main() -> ExitCode {
    // Parse before logging is set up so usage errors go straight to the user.
    let args: Cli = match cli::parse_args(env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            eprint!("{e}");
            return ExitCode::from(e.exit_code());
        }
    };
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    hvrjoin::init_logging(level);

    match run(args.verbose) {
        Ok(report) => {
            print_summary(&report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e:#}");
            let code = e
                .downcast_ref::<PipelineError>()
                .map_or(1, PipelineError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn run(verbose: bool) -> Result<BatchReport> {
    let settings = Settings::default();
    let registry = PairRegistry::load_path(&settings.config_path)
        .context("could not load sample pairs")?;

    let mut generator = ExternalGenerator::new(&settings, verbose);
    Ok(pipeline::run(&settings, &registry, &mut generator))
}

fn print_summary(report: &BatchReport) {
    println!(
        "{} of {} generations and {} of {} joins failed",
        report.failed_generations(),
        report.generations.len(),
        report.failed_joins(),
        report.joins.len()
    );
}
