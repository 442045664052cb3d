use crate::{error::CliError, manifest::Manifest};
use clap::Parser;
use commands::Commands;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod manifest;
mod output;

#[derive(Parser)]
#[command(
    name = "streamplan",
    version = "0.1.0",
    about = "Execution plan assembly checker"
)]
struct Cli {
    #[arg(
        long,
        global = true,
        default_value = "info",
        help = "Log level when RUST_LOG is unset"
    )]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins over --log-level
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli.command) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Check { manifest, json } => {
            info!("Checking manifest: {}, json: {}", manifest, json);

            let plan = Manifest::load(&manifest)?.into_plan()?;
            if json {
                println!("{}", output::plan_json(&plan)?);
            } else {
                print!("{}", output::plan_summary(&plan)?);
            }
        }
        Commands::Fingerprint { manifest } => {
            let plan = Manifest::load(&manifest)?.into_plan()?;
            let fingerprint = plan.fingerprint().map_err(CliError::Fingerprint)?;
            println!("{fingerprint}");
        }
    }

    Ok(())
}
