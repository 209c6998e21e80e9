//! Clementine CLI - demo account and data preview tools.
//!
//! # Usage
//!
//! ```bash
//! # Register a demo account (persists under the data directory)
//! clem account register -e ada@example.com -p enchantress -n "Ada Lovelace"
//!
//! # Verify a login
//! clem account login -e ada@example.com -p enchantress
//!
//! # Preview a user's deterministic dashboard
//! clem preview dashboard -e ada@example.com
//!
//! # Preview a user's synthetic order history
//! clem preview orders -e ada@example.com
//!
//! # Preview generated reviews for a product
//! clem preview reviews -p prod-01 -c 10
//! ```
//!
//! # Commands
//!
//! - `account register` / `account login` - Manage demo accounts
//! - `preview dashboard|orders|reviews` - Print generated data

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "clem")]
#[command(author, version, about = "Clementine CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage demo accounts
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },
    /// Preview deterministic generated data
    Preview {
        #[command(subcommand)]
        target: PreviewTarget,
    },
}

#[derive(Subcommand)]
enum AccountAction {
    /// Register a new demo account
    Register {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password (stored in plaintext; this is a demo credential store)
        #[arg(short, long)]
        password: String,

        /// Display name
        #[arg(short, long)]
        name: String,
    },
    /// Verify a login against the registered accounts
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
}

#[derive(Subcommand)]
enum PreviewTarget {
    /// Spending analytics, notifications, and recent orders for a user
    Dashboard {
        /// Email the user id is derived from
        #[arg(short, long)]
        email: String,
    },
    /// Full synthetic order history for a user
    Orders {
        /// Email the user id is derived from
        #[arg(short, long)]
        email: String,
    },
    /// Generated reviews for a catalog product
    Reviews {
        /// Product id (e.g. prod-01)
        #[arg(short, long)]
        product: String,

        /// Number of reviews to generate
        #[arg(short, long, default_value_t = 10)]
        count: usize,
    },
}

fn main() {
    // Load environment variables and initialize tracing
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Account { action } => match action {
            AccountAction::Register {
                email,
                password,
                name,
            } => commands::account::register(&email, &password, &name)?,
            AccountAction::Login { email, password } => {
                commands::account::login(&email, &password)?;
            }
        },
        Commands::Preview { target } => match target {
            PreviewTarget::Dashboard { email } => commands::preview::dashboard(&email)?,
            PreviewTarget::Orders { email } => commands::preview::orders(&email)?,
            PreviewTarget::Reviews { product, count } => {
                commands::preview::reviews(&product, count)?;
            }
        },
    }
    Ok(())
}
