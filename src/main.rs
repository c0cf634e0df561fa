//! Entry point for the ARB code generator.

use std::io::IsTerminal;
use std::process::ExitCode;

use arb_i18n_codegen::cli::Cli;
use arb_i18n_codegen::config::ConfigManager;
use arb_i18n_codegen::{
    RunError,
    runner,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let working_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            tracing::error!("Failed to read the working directory: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut config_manager = ConfigManager::new();
    if let Err(err) = config_manager.load_settings(&working_dir, cli.config.as_deref(), cli.overrides())
    {
        let err = RunError::from(err);
        tracing::error!(kind = %err.kind(), "{err}");
        return ExitCode::FAILURE;
    }
    if let Some(path) = config_manager.config_path() {
        tracing::debug!(config = %path.display(), "Using configuration file");
    }

    match runner::run(config_manager.get_settings(), &working_dir).await {
        Ok(summary) => {
            tracing::info!(files = summary.generated.len(), "Done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(kind = %err.kind(), "{err}");
            ExitCode::FAILURE
        }
    }
}
