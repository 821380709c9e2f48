//! QA assistant CLI
//!
//! Command-line front end for `qa_core`: loads the persisted execution
//! session, then dispatches to the exec or gen handlers.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use qa_core::{ExecutionSession, GeneratorConfig, StoreBuilder};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        endpoint,
        model,
        api_key,
        credential_mode,
        command,
    } = Args::parse();

    let store = StoreBuilder::new()
        .with_database_path(database_file)
        .build()
        .context("Failed to open session store")?;
    let session = ExecutionSession::load(store);

    let generator_config = GeneratorConfig::builder()
        .with_endpoint(endpoint)
        .with_model(model)
        .with_api_key(api_key)
        .with_credential(credential_mode.into());

    let renderer = TerminalRenderer::new(!no_color);

    info!("QA assistant started");

    let cli = Cli::new(session, renderer, generator_config);
    match command {
        Some(Exec { command }) => cli.handle_exec_command(command).await,
        Some(Gen { command }) => cli.handle_gen_command(command).await,
        None => cli.list(),
    }
}
