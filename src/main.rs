//! AHP Engine CLI - Evaluate decisions from request documents.

use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use ahp_engine::application::{
    AssessJudgmentsCommand, AssessJudgmentsHandler, EvaluateDecisionCommand,
    EvaluateDecisionHandler,
};
use ahp_engine::config::AppConfig;
use ahp_engine::domain::foundation::AhpError;
use ahp_engine::telemetry;

/// Rank alternatives with the Analytic Hierarchy Process
#[derive(Parser, Debug)]
#[command(name = "ahp-engine", version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML, YAML or JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Weigh criteria, score alternatives and rank them
    Evaluate {
        /// Request document (.json, .yaml or .yml)
        request: PathBuf,
    },
    /// Report weights and consistency for one set of judgments
    Assess {
        /// Request document (.json, .yaml or .yml)
        request: PathBuf,
    },
}

/// Failures that end the process, with their exit codes.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ahp_engine::config::ConfigError),

    #[error("Cannot read request '{path}': {message}")]
    Request { path: PathBuf, message: String },

    #[error("{0}")]
    Rejected(#[from] AhpError),

    #[error("Cannot write report: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Config(_) => 1,
            CliError::Request { .. } | CliError::Rejected(_) | CliError::Output(_) => 2,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if let CliError::Rejected(rejection) = &error {
                eprintln!("[{}] {}", rejection.code(), rejection);
            } else {
                eprintln!("{}", error);
            }
            ExitCode::from(error.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = AppConfig::load(cli.config.as_deref())?;
    config.validate().map_err(ahp_engine::config::ConfigError::from)?;

    let logging = config.logging.clone().with_verbosity(cli.verbose);
    // a subscriber may already be installed by an embedding host
    let _ = telemetry::init_tracing(&logging);

    let engine = config.engine.build_engine();
    tracing::debug!(
        threshold = engine.consistency_threshold(),
        tolerance = engine.validator().tolerance(),
        "Engine configured"
    );

    match cli.command {
        Commands::Evaluate { request } => {
            let cmd: EvaluateDecisionCommand = read_request(&request)?;
            let result = EvaluateDecisionHandler::new(engine).handle(cmd)?;
            print_json(&result.event)
        }
        Commands::Assess { request } => {
            let cmd: AssessJudgmentsCommand = read_request(&request)?;
            let result = AssessJudgmentsHandler::new(engine).handle(cmd)?;
            print_json(&result.event)
        }
    }
}

/// Parses YAML for `.yaml`/`.yml` files and JSON otherwise.
fn read_request<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let request_error = |message: String| CliError::Request {
        path: path.to_path_buf(),
        message,
    };

    let text = fs::read_to_string(path).map_err(|e| request_error(e.to_string()))?;
    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    );

    if is_yaml {
        serde_yaml::from_str(&text).map_err(|e| request_error(e.to_string()))
    } else {
        serde_json::from_str(&text).map_err(|e| request_error(e.to_string()))
    }
}

fn print_json<T: Serialize>(report: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
