use anyhow::Context;
use clap::Parser;

mod api;
mod cli;
mod core;
mod generators;
mod logging;
mod models;
mod ui;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;
use crate::models::CharClass;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if ui::clipboard::is_holder_process() {
        return ui::clipboard::run_holder().context("Clipboard holder failed");
    }

    // Load environment variables
    if dotenvy::dotenv().is_ok() {
        // logger is not up yet
        eprintln!("Loaded .env file");
    }

    let args = Args::parse();
    let config = Config::load();

    logging::init(&config).context("Failed to initialise logging")?;
    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    match args.command.unwrap_or(CliCommand::Interactive) {
        CliCommand::Serve { address, port, static_dir } => {
            let address = address.unwrap_or_else(|| config.web_address.clone());
            let port = port.unwrap_or(config.web_port);
            let static_dir = static_dir.unwrap_or_else(|| config.static_dir.clone());

            println!("🚀 Heslo API listening on http://{}:{}", address, port);
            api::start_server(&address, port, static_dir)
                .await
                .map_err(|e| {
                    log::error!("API server failed: {}", e);
                    e
                })
                .context("API server failed")?;
            log::info!("API server shut down gracefully");
        }
        CliCommand::Generate { length, no_uppercase, no_lowercase, no_numbers, no_symbols, copy } => {
            let excluded: Vec<CharClass> = [
                (CharClass::Uppercase, no_uppercase),
                (CharClass::Lowercase, no_lowercase),
                (CharClass::Numbers, no_numbers),
                (CharClass::Symbols, no_symbols),
            ]
            .into_iter()
            .filter_map(|(class, excluded)| excluded.then_some(class))
            .collect();

            let controller = cli::handlers::build_controller(&config, args.api_url);
            cli::handlers::handle_generate(&controller, length, &excluded, copy).await?;
        }
        CliCommand::Evaluate { password } => {
            let controller = cli::handlers::build_controller(&config, args.api_url);
            cli::handlers::handle_evaluate(&controller, &password).await?;
        }
        CliCommand::Strengthen { password } => {
            let controller = cli::handlers::build_controller(&config, args.api_url);
            cli::handlers::handle_strengthen(&controller, &password).await?;
        }
        CliCommand::Interactive => {
            let controller = cli::handlers::build_controller(&config, args.api_url);
            cli::menu::run_interactive(&controller).await?;
        }
    }

    Ok(())
}
