use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use faceshape_core::overlay::measurement_lines;
use faceshape_core::{classify, measure};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod batch;
mod config;
mod input;
mod report;

use config::{Config, OutputFormat};

#[derive(Parser)]
#[command(name = "faceshape", about = "Face shape classification from facial landmarks")]
struct Cli {
    /// Output format (overrides FACESHAPE_OUTPUT)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify one or more landmark files
    Classify {
        /// JSON landmark files
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Maximum files processed at once (overrides FACESHAPE_WORKERS)
        #[arg(short, long)]
        workers: Option<usize>,
    },
    /// Print every measurement and ratio for a landmark file
    Measure {
        file: PathBuf,
    },
    /// Print the landmark roles and their face-mesh indices
    Roles,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();
    let format = cli.format.unwrap_or(config.output);

    match cli.command {
        Commands::Classify { files, workers } => {
            let workers = workers.unwrap_or(config.workers).max(1);
            let outcomes = batch::classify_files(files, workers).await;
            let failed = outcomes.iter().filter(|o| o.result.is_err()).count();

            match format {
                OutputFormat::Text => println!("{}", report::batch_text(&outcomes)),
                OutputFormat::Json => println!("{}", report::batch_json(&outcomes, config.pretty)?),
            }

            if failed > 0 {
                tracing::warn!(failed, total = outcomes.len(), "some files could not be classified");
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Measure { file } => {
            let landmarks = input::read_landmarks(&file)?;
            let m = measure(&landmarks).with_context(|| format!("cannot measure {}", file.display()))?;
            let lines = measurement_lines(&landmarks, &m)?;
            let result = classify(&m);

            match format {
                OutputFormat::Text => println!("{}", report::measurement_text(&m, &lines, &result)),
                OutputFormat::Json => {
                    println!("{}", report::measurement_json(&m, &lines, &result, config.pretty)?)
                }
            }
        }
        Commands::Roles => match format {
            OutputFormat::Text => println!("{}", report::roles_text()),
            OutputFormat::Json => println!("{}", report::roles_json(config.pretty)?),
        },
    }

    Ok(ExitCode::SUCCESS)
}
