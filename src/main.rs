//! library-admin - command-line front end of the admin console

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use library_admin::{
    config::{AppConfig, LoggingConfig},
    models::{BookRow, BookTable},
    prompt::TerminalPrompt,
    services::{quantity::QuantityEditor, search::SearchOutcome, ActionOutcome},
    Console,
};

mod cli;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    init_tracing(&config.logging);

    tracing::debug!("Admin API at {}", config.api.base_url);

    let assume_yes = matches!(cli.command, Commands::Delete { yes: true, .. });
    let mut console = Console::connect(config, Arc::new(TerminalPrompt::new(assume_yes)))?;

    match cli.command {
        Commands::Quantity {
            book_id,
            current,
            new_quantity,
        } => {
            let mut row = BookRow::new(book_id, current);
            QuantityEditor::on_input(&mut row, &new_quantity);
            let outcome = console.services.quantity.submit(&mut row).await;
            report(outcome)?;
            println!("{}", row.current_quantity);
        }
        Commands::Delete { book_id, .. } => {
            let mut table = BookTable::new(vec![]);
            let outcome = console.services.removal.remove(&mut table, book_id).await;
            report(outcome)?;
        }
        Commands::Search {
            keyword,
            select,
            register,
        } => {
            let search = &mut console.services.search;

            match search.search(&keyword).await {
                SearchOutcome::Blank => bail!("Empty keyword"),
                SearchOutcome::Failed(e) => {
                    tracing::debug!("Search ended with: {}", e);
                    bail!("Search failed");
                }
                SearchOutcome::Rendered(_) => {}
            }

            if let Some(view) = search.view() {
                print!("{}", view);
            }

            let index = match select {
                Some(index) => Some(index),
                None => ask_index()?,
            };
            let Some(index) = index else {
                search.close_modal();
                return Ok(());
            };

            let selected = search.select(index)?;
            println!("{}", serde_json::to_string_pretty(selected)?);

            if let Some(quantity) = register {
                let response = search.register(quantity).await?;
                tracing::info!("Registration response: {}", response);
            }
        }
    }

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("library_admin={}", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}

/// Turn a handled outcome into the process result.
///
/// The prompt has already shown a failure's server text, so only a short
/// status goes to the exit error.
fn report(outcome: ActionOutcome) -> anyhow::Result<()> {
    match outcome {
        ActionOutcome::Completed { .. } | ActionOutcome::Cancelled => Ok(()),
        ActionOutcome::Disabled => bail!("Quantity unchanged, nothing to update"),
        ActionOutcome::Rejected => bail!("Invalid input"),
        ActionOutcome::Failed(e) => {
            tracing::debug!("Request ended with: {}", e);
            bail!("Request failed")
        }
    }
}

/// Read a candidate index from stdin; an empty line closes the modal
fn ask_index() -> anyhow::Result<Option<usize>> {
    let mut stderr = io::stderr();
    write!(stderr, "> ")?;
    stderr.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let index = line
        .parse()
        .with_context(|| format!("Not a candidate number: {}", line))?;
    Ok(Some(index))
}
