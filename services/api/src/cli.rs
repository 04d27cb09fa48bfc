use crate::check::{run_catalog, run_check, CatalogArgs, CheckArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use spm_scholarship::config::AppConfig;
use spm_scholarship::error::AppError;
use spm_scholarship::telemetry::{self, LogSink};

#[derive(Parser, Debug)]
#[command(
    name = "SPM Scholarship Check",
    about = "Match SPM results against Malaysian scholarship requirements",
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
    /// Check one student's results from the command line
    Check(CheckArgs),
    /// Print the built-in scholarship table
    Catalog(CatalogArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Check(args) => {
            let config = AppConfig::load()?;
            telemetry::init(&config.telemetry, LogSink::Stderr)?;
            run_check(args, &config)
        }
        Command::Catalog(args) => run_catalog(args),
    }
}
