use std::{env, process::ExitCode};

use anyhow::Result;
use log::{error, info, LevelFilter};

use hvrjoin::{
    cli::{self, JoinCli},
    sequences, PipelineError, Settings,
};

fn main() -> ExitCode {
    hvrjoin::init_logging(LevelFilter::Info);

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            let code = e
                .downcast_ref::<PipelineError>()
                .map_or(1, PipelineError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn run() -> Result<()> {
    let args: JoinCli = cli::parse_args(env::args_os())?;
    let settings = Settings::default();

    let output = sequences::join(
        &args.first,
        &args.second,
        &settings.work_dir,
        &settings.extension,
    )?;
    info!("wrote {}", output.display());
    Ok(())
}
