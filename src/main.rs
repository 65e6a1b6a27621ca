use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Arc, Mutex};

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use frontpage::app::AppContext;
use frontpage::cli::{commands, Cli, Commands};
use frontpage::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui { demo: false });

    // The TUI owns the terminal, so it only logs when given a file
    init_tracing(cli.log.as_deref(), matches!(command, Commands::Tui { .. }))?;

    let mut config = Config::load(cli.config.as_deref())?;
    config.api = config.api.with_secret(cli.project_secret);
    let ctx = AppContext::new(config)?;

    match command {
        Commands::Tui { demo } => {
            frontpage::tui::run(Arc::new(ctx), demo).await?;
        }
        Commands::Posts {
            recent,
            featured,
            skip,
            limit,
        } => {
            commands::list_posts(&ctx, recent, featured, skip, limit).await?;
        }
        Commands::Show { id } => {
            commands::show_post(&ctx, &id).await?;
        }
        Commands::Count => {
            commands::count_posts(&ctx).await?;
        }
    }

    Ok(())
}

fn init_tracing(log: Option<&Path>, tui: bool) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("frontpage=info"));
    let registry = tracing_subscriber::registry().with(filter);

    match log {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            registry
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .init();
        }
        None if tui => registry.init(),
        None => registry.with(fmt::layer().with_writer(std::io::stderr)).init(),
    }
    Ok(())
}
