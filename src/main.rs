use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use broadsheet::app::AppContext;
use broadsheet::cli::{commands, Cli, Commands, ConfigAction};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::new(None)?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Fetch => {
            commands::fetch_stories(&ctx).await?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                commands::show_config(&ctx)?;
            }
            ConfigAction::Keyword { value } => {
                commands::set_keyword(&ctx, value)?;
            }
            ConfigAction::FromDate { value } => {
                commands::set_from_date(&ctx, value)?;
            }
            ConfigAction::Images { state } => {
                commands::set_show_images(&ctx, state.is_on())?;
            }
            ConfigAction::Authors { state } => {
                commands::set_show_author(&ctx, state.is_on())?;
            }
        },
        Commands::Tui => {
            broadsheet::tui::run(Arc::new(ctx)).await?;
        }
    }

    Ok(())
}
