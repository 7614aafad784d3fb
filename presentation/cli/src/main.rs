use std::io;

use dotenvy::dotenv;

mod cli;
mod commands;
mod config;
mod setup;

use business::domain::conversation::model::ModelName;
use business::domain::conversation::use_cases::ask::AskParams;
use business::domain::conversation::use_cases::open_chat::OpenChatParams;
use clap::Parser;
use tracing::info;

use cli::{Cli, Commands};
use config::app_config::AppConfig;
use setup::dependency_injection::DependencyContainer;

/// CLI Entry Point
///
/// Loads configuration, wires dependencies, and runs the selected command:
/// - config/: Gemini configuration from the environment and `.env`
/// - setup/: Dependency injection
/// - commands/: `ask` (single turn) and `chat` (interactive session)
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter, on stderr to keep replies clean
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    // 2. Parse arguments
    let cli = Cli::parse();

    // 3. Load environment variables
    dotenv().ok();

    // 4. Load configuration; a missing key stops here, before any request
    let config = AppConfig::from_env()?;
    info!(model = %config.gemini.model, base_url = %config.gemini.base_url, "configuration loaded");

    // 5. Wire dependencies
    let container = DependencyContainer::new(&config.gemini);

    // 6. Run command
    let model_or_default =
        |model: Option<String>| model.map(ModelName::new).unwrap_or(config.gemini.model.clone());

    match cli.command {
        Commands::Ask {
            question,
            prompt,
            model,
        } => {
            let params = AskParams {
                model: model_or_default(model),
                prompt,
                question,
            };
            commands::ask::run(container.ask_use_case.as_ref(), params, &mut io::stdout()).await
        }
        Commands::Chat { prompt, model } => {
            let params = OpenChatParams {
                model: model_or_default(model),
                initial_prompt: prompt,
            };
            commands::chat::run(
                container.open_chat_use_case.as_ref(),
                container.send_message_use_case.as_ref(),
                params,
                io::stdin().lock(),
                &mut io::stdout(),
            )
            .await
        }
    }
}
