mod cli;

use std::io;
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use station_distances::run::run;

use cli::CommandLine;

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = match CommandLine::parse_args().into_config() {
        Ok(config) => config,
        Err(message) => {
            error!("{message}");
            return ExitCode::FAILURE;
        }
    };

    match run(&config, io::stdout()).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
