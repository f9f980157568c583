//! nimchat entry point.
//!
//! Binary name: `nimchat`
//!
//! Sets up tracing, loads `.env`, resolves the API key and starts the chat
//! loop. A missing key is fatal before anything else is shown.

mod chat;
mod cli;

use clap::Parser;
use console::style;
use tracing::warn;

use nimchat_infra::credentials::{load_env_file, resolve_api_key};
use nimchat_observe::tracing_setup::{filter_for_verbosity, init_tracing, shutdown_tracing};
use nimchat_types::config::ChatConfig;

use cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(filter_for_verbosity(cli.verbose, cli.quiet), cli.otel) {
        eprintln!("Warning: failed to initialize tracing: {e}");
    }

    if let Err(e) = load_env_file() {
        warn!(error = %e, "Ignoring unreadable .env file");
    }

    let config = ChatConfig::default();
    let api_key = match resolve_api_key(&config.api_key_var) {
        Ok(key) => key,
        Err(e) => {
            println!("{} {e}", style("Error:").red().bold());
            shutdown_tracing();
            std::process::exit(1);
        }
    };

    let result = chat::loop_runner::run_chat_loop(&config, api_key).await;
    shutdown_tracing();
    result
}
