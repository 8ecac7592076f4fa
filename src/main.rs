use std::io;

use clap::Parser;
use color_eyre::Result;
use tracing::info;

use bikeshare::cli::args::Args;
use bikeshare::cli::prompt::Prompter;
use bikeshare::config::AppConfig;
use bikeshare::{constants, logging, session};

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    logging::init(args.log_level());

    let mut config = AppConfig::from_args(&args)?;
    config.display = config.display.fit_to_terminal();
    info!(
        version = constants::APP_VERSION,
        data_dir = %config.data_dir.display(),
        chunk_size = config.chunk_size,
        width = config.display.width,
        "Starting session"
    );

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout().lock());
    let iterations = session::run(&config, &mut prompter)?;
    info!(iterations, "Session finished");
    Ok(())
}
