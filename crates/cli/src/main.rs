//! School Mart CLI - drive the cart widget from a terminal.
//!
//! Each invocation is one page load: the widget boots from the persisted
//! cart, the requested interaction is dispatched, and the resulting page
//! state is printed to stdout. Logs go to stderr.
//!
//! # Usage
//!
//! ```bash
//! # Click the add-to-cart button for "pen"
//! school-mart add pen
//!
//! # Bump, lower or delete a row in the drawer
//! school-mart inc pen
//! school-mart dec pen
//! school-mart remove pen
//!
//! # Show the drawer / the badge count
//! school-mart show
//! school-mart count
//!
//! # Quick view, optionally adding from the modal
//! school-mart quick-view bag --add
//!
//! # Replay a scripted session
//! school-mart replay session.yaml
//! ```
//!
//! # Environment Variables
//!
//! - `SCHOOL_MART_DATA_DIR` - Where the cart is persisted
//! - `SCHOOL_MART_PAGE` - Page manifest path
//! - `RUST_LOG` - Log filter

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use school_mart_storefront::page::RowAction;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "school-mart")]
#[command(author, version, about = "School Mart cart widget")]
struct Cli {
    /// Page manifest (overrides `SCHOOL_MART_PAGE`)
    #[arg(long, global = true)]
    page: Option<PathBuf>,

    /// Data directory (overrides `SCHOOL_MART_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the drawer and print the page state
    Show,
    /// Print the cart item count
    Count,
    /// Click the add-to-cart control for an item
    Add {
        /// Item identifier
        id: String,
    },
    /// Increase an item's quantity from the drawer
    Inc {
        /// Item identifier
        id: String,
    },
    /// Decrease an item's quantity from the drawer
    Dec {
        /// Item identifier
        id: String,
    },
    /// Delete an item from the drawer
    Remove {
        /// Item identifier
        id: String,
    },
    /// Click the clear-cart control
    Clear,
    /// Open the quick view for an item
    QuickView {
        /// Item identifier
        id: String,

        /// Also click the modal's add-to-cart button
        #[arg(long)]
        add: bool,
    },
    /// Dispatch a YAML list of UI events in one page session
    Replay {
        /// Event script
        file: PathBuf,
    },
}

fn main() {
    // Logs to stderr; stdout carries the rendered page state
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "school_mart_storefront=info,school_mart_cli=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = commands::PageSession::open(cli.page, cli.data_dir)?;

    match cli.command {
        Commands::Show => commands::cart::show(&mut session)?,
        Commands::Count => commands::cart::count(&session),
        Commands::Add { id } => commands::cart::add(&mut session, &id)?,
        Commands::Inc { id } => commands::cart::row(&mut session, &id, RowAction::Increment)?,
        Commands::Dec { id } => commands::cart::row(&mut session, &id, RowAction::Decrement)?,
        Commands::Remove { id } => commands::cart::row(&mut session, &id, RowAction::Remove)?,
        Commands::Clear => commands::cart::clear(&mut session),
        Commands::QuickView { id, add } => commands::cart::quick_view(&mut session, &id, add)?,
        Commands::Replay { file } => commands::replay::run(&mut session, &file)?,
    }
    Ok(())
}
