use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use clausecheck_classify::{MIN_TEXT_CHARS, Pipeline, PipelineConfig};
use clausecheck_cli::{Intake, Outcome, analyze_batch, display, outcomes_json, sources_from_args};
use tracing::error;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "clausecheck=info,clausecheck_cli=info";

#[derive(Parser, Debug)]
#[command(
    name = "clausecheck",
    version,
    about = "Extract contract clauses and flag playbook risk"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze one or more contract documents (`-` reads stdin)
    Analyze {
        /// Documents to analyze (.txt, .md; .pdf and images need an external extractor)
        files: Vec<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Card, env = "CLAUSECHECK_FORMAT")]
        format: OutputFormat,

        /// Minimum non-blank characters a document must contain
        #[arg(long, default_value_t = MIN_TEXT_CHARS, env = "CLAUSECHECK_MIN_CHARS")]
        min_chars: usize,
    },

    /// List clause types, their detection patterns, and playbook coverage
    Patterns,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Card,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze {
            files,
            format,
            min_chars,
        } => analyze(files, format, min_chars).await,
        Commands::Patterns => {
            print!("{}", display::render_patterns());
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn analyze(
    files: Vec<PathBuf>,
    format: OutputFormat,
    min_chars: usize,
) -> anyhow::Result<ExitCode> {
    let sources = match sources_from_args(&files) {
        Ok(sources) => sources,
        Err(err) => {
            error!("{err}");
            return Ok(ExitCode::from(err.exit_code()));
        }
    };

    let intake = Arc::new(Intake::new(min_chars));
    let pipeline = Arc::new(Pipeline::new(
        PipelineConfig::default().with_min_text_chars(min_chars),
    ));

    let outcomes = analyze_batch(intake, pipeline, sources)
        .await
        .context("analysis task panicked")?;

    match format {
        OutputFormat::Card => {
            for outcome in &outcomes {
                print!("{}", display::render_outcome(outcome));
            }
        }
        OutputFormat::Json => {
            let json = outcomes_json(&outcomes).context("serializing reports")?;
            println!("{json}");
        }
    }

    // First failure in argument order decides the exit code.
    let exit_code = outcomes
        .iter()
        .map(Outcome::exit_code)
        .find(|&code| code != 0)
        .unwrap_or(0);
    Ok(ExitCode::from(exit_code))
}
