use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tipjar_core::category::Category;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "tipjar")]
#[command(about = "tipjar - tip calculator with a saved history", long_about = None)]
struct Cli {
    /// Keep config.toml and history.json in this directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show tip and totals without saving
    Calc {
        #[command(flatten)]
        bill: BillArgs,
    },
    /// Validate the bill and add it to the history
    Save {
        #[command(flatten)]
        bill: BillArgs,
    },
    /// List saved calculations, most recent first
    History {
        /// Number of entries to show (defaults to the configured limit)
        #[arg(long)]
        limit: Option<usize>,
        /// Print the full history as JSON in saved order
        #[arg(long)]
        json: bool,
    },
    /// Delete the whole history
    Clear,
    /// Show totals, top category and the last 7 days
    Summary,
    /// Print a quote
    Quote {
        /// Seed for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the weekly reminder text and its next fire time
    Reminder,
}

#[derive(clap::Args)]
struct BillArgs {
    /// Bill amount before tip
    #[arg(long, allow_hyphen_values = true)]
    bill: String,
    /// Tip percent (5-30)
    #[arg(long)]
    tip: Option<u8>,
    /// Number of people splitting the bill (1-20)
    #[arg(long)]
    party: Option<u8>,
    /// Category (restaurant, cafe, bar, delivery, taxi, salon, other)
    #[arg(long)]
    category: Option<Category>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let quote_seed = match &cli.command {
        Commands::Quote { seed } => *seed,
        _ => None,
    };
    let mut session = tipjar_application::open_session(cli.data_dir, quote_seed)
        .await
        .context("Failed to open tipjar session")?;

    match cli.command {
        Commands::Calc { bill } => commands::calc(&mut session, bill),
        Commands::Save { bill } => commands::save(&mut session, bill).await?,
        Commands::History { limit, json } => commands::history(&session, limit, json)?,
        Commands::Clear => commands::clear(&mut session).await,
        Commands::Summary => commands::summary(&session),
        Commands::Quote { .. } => commands::quote(&session),
        Commands::Reminder => commands::reminder(&session),
    }

    Ok(())
}
