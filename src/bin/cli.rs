use std::io;
use std::process::ExitCode;

use clap::Parser;
use order_summary::AppConfig;
use order_summary::cli::{Cli, run};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Config error: {e}");
            return ExitCode::FAILURE;
        }
    };

    order_summary::setup_logging(cli.log_format(&config));

    let mut stdout = io::stdout().lock();
    match run(&cli, &config, io::stdin().lock(), &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
