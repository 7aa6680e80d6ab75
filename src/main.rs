//! VitalVoice entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vitalvoice::cli::{self, Cli, Commands, Presenter};
use vitalvoice::domain::config::AppConfig;
use vitalvoice::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("vitalvoice=info,tower_http=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    match args.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            let presenter = Presenter::new();
            match cli::config_cmd::handle_config_command(action, &store, &presenter).await {
                Ok(()) => ExitCode::from(cli::EXIT_SUCCESS),
                Err(e) => {
                    presenter.error(&e.to_string());
                    ExitCode::from(cli::EXIT_ERROR)
                }
            }
        }
        Some(Commands::Serve { bind }) => {
            let cli_config = AppConfig {
                bind,
                ..Default::default()
            };
            let config = cli::load_merged_config(cli_config).await;
            cli::run_serve(config).await
        }
        Some(Commands::Journal) | None => {
            let config = cli::load_merged_config(AppConfig::empty()).await;
            cli::run_journal(config).await
        }
    }
}
