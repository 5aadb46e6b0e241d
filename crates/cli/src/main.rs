//! Golden Fig CLI - command-line cart consumer.
//!
//! # Usage
//!
//! ```bash
//! # Browse the seed catalog
//! gf-cart catalog
//!
//! # Add two jars of fig jam
//! gf-cart add fig-jam -q 2
//!
//! # Inspect the cart
//! gf-cart show
//!
//! # Change a quantity (0 removes the line)
//! gf-cart set fig-jam 5
//!
//! # Submit a simulated order
//! gf-cart checkout -e fig@example.com -n "F. Newton"
//! ```
//!
//! # Environment Variables
//!
//! - `GOLDEN_FIG_CART_PATH` - Persisted cart file (default: cart.json)
//! - `GOLDEN_FIG_DEBOUNCE_MS` - Quiet window before a persistence write
//!
//! Each invocation is one short-lived session: it hydrates the store from
//! the cart file, applies one operation, and flushes before exit (a process
//! about to exit cannot wait out the debounce window).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod catalog;
mod commands;

#[derive(Parser)]
#[command(name = "gf-cart")]
#[command(author, version, about = "Golden Fig cart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the seed catalog
    Catalog,
    /// Show the current cart
    Show,
    /// Add a catalog product to the cart
    Add {
        /// Catalog product id (see `catalog`)
        product_id: String,

        /// Units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a line from the cart
    Remove {
        /// Catalog product id
        product_id: String,
    },
    /// Set the exact quantity of a line (0 removes it)
    Set {
        /// Catalog product id
        product_id: String,

        /// New quantity
        quantity: u32,
    },
    /// Empty the cart
    Clear,
    /// Submit the cart as a simulated order
    Checkout {
        /// Contact email
        #[arg(short, long)]
        email: String,

        /// Shipping recipient name
        #[arg(short = 'n', long)]
        ship_to: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing (RUST_LOG overrides the default "info")
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), commands::CliError> {
    match cli.command {
        Commands::Catalog => commands::catalog(),
        Commands::Show => commands::show(),
        Commands::Add {
            product_id,
            quantity,
        } => commands::add(&product_id, quantity),
        Commands::Remove { product_id } => commands::remove(&product_id),
        Commands::Set {
            product_id,
            quantity,
        } => commands::set(&product_id, quantity),
        Commands::Clear => commands::clear(),
        Commands::Checkout { email, ship_to } => commands::checkout(email, ship_to),
    }
}
