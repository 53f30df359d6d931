pub mod api;
pub mod cli;
pub mod config;
pub mod constants;
pub mod domain;
pub mod models;
pub mod services;
pub mod state;
pub mod store;
pub mod wizard;

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub use config::Config;

use cli::{Cli, CodeCommands, Commands};

pub async fn run() -> anyhow::Result<()> {
    let config = Config::load()?;
    config.validate()?;

    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    let fmt_layer = tracing_subscriber::fmt::layer();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) | None => cli::commands::cmd_serve(config).await,

        Some(Commands::List) => cli::commands::cmd_list_resumes(&config).await,

        Some(Commands::Info { id }) => cli::commands::cmd_resume_info(&config, &id).await,

        Some(Commands::Remove { id }) => cli::commands::cmd_remove_resume(&config, &id).await,

        Some(Commands::Codes { command }) => match command {
            CodeCommands::List { category, all } => {
                cli::commands::cmd_codes_list(&config, category, all).await
            }
            CodeCommands::Seed => cli::commands::cmd_codes_seed(&config).await,
        },

        Some(Commands::Init) => {
            if Config::create_default_if_missing()? {
                println!("✓ Config file created. Edit config.toml and run again.");
            } else {
                println!("Config file already exists.");
            }
            Ok(())
        }
    }
}
