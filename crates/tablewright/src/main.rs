mod document;
mod error;
mod workflow;

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use tablewright_core::ManifestFormat;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::workflow::{Config, Output};

/// Tablewright - turn DynamoDB table requests into ACK Table manifests
#[derive(Parser, Debug)]
#[command(name = "tablewright")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the table request document (YAML or JSON)
    #[arg(long, env = "REQUEST_PATH")]
    request_path: Option<PathBuf>,

    /// Directory the manifest is written to
    #[arg(long, env = "OUTPUT_STATE_PATH", default_value = "/tmp/kratix-state")]
    output_dir: PathBuf,

    /// Manifest format: yaml or json
    #[arg(long, env = "MANIFEST_FORMAT", default_value = "yaml")]
    format: ManifestFormat,

    /// Print the manifest to stdout instead of writing it
    #[arg(long)]
    stdout: bool,

    /// Log line format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value = "pretty")]
    log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

impl Cli {
    fn into_config(self) -> Config {
        Config {
            request_path: self.request_path,
            state_dir: self.output_dir,
            format: self.format,
            to_stdout: self.stdout,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    match workflow::run(&cli.into_config()) {
        Ok(outcome) => {
            match outcome.output {
                Output::File(path) => {
                    println!(
                        "Successfully generated Table manifest for {}",
                        outcome.table_name
                    );
                    println!("Output written to: {}", path.display());
                }
                Output::Stdout(rendered) => print!("{rendered}"),
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            let class = err.class();
            tracing::debug!(class = class.as_str(), error = ?err, "workflow failed");
            eprintln!("ERROR: {err}");
            ExitCode::from(class.exit_code())
        }
    }
}

/// Logs go to stderr; stdout is reserved for the result.
fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tablewright=info,tablewright_core=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}
