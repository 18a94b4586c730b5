//! Contact List CLI - manage contacts from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # List every contact
//! contacts list
//!
//! # Add a contact (validated like the browser form)
//! contacts add -n "Alice" -e alice@example.com
//!
//! # Change a contact's email, keeping its name
//! contacts edit 1 -e alice@work.example.com
//!
//! # Delete a contact
//! contacts delete 1
//! ```
//!
//! The API location comes from `--api-url` or `CONTACTS_API_URL`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use contact_list_core::ContactId;
use url::Url;

mod commands;

#[derive(Parser)]
#[command(name = "contacts")]
#[command(author, version, about = "Contact List CLI")]
struct Cli {
    /// Contacts collection URL
    #[arg(
        long,
        env = "CONTACTS_API_URL",
        default_value = contact_list_web::config::DEFAULT_API_URL,
        global = true
    )]
    api_url: Url,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every contact
    List,
    /// Show one contact
    Show {
        /// Contact id
        id: ContactId,
    },
    /// Add a contact
    Add {
        /// Contact name
        #[arg(short, long)]
        name: String,

        /// Contact email address
        #[arg(short, long)]
        email: String,
    },
    /// Change a contact's name or email
    Edit {
        /// Contact id
        id: ContactId,

        /// New name (unchanged if omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// New email address (unchanged if omitted)
        #[arg(short, long)]
        email: Option<String>,
    },
    /// Delete a contact
    Delete {
        /// Contact id
        id: ContactId,
    },
}

#[tokio::main]
async fn main() {
    // Load .env before clap reads CONTACTS_API_URL
    let _ = dotenvy::dotenv();

    // Command output goes through tracing, so default to info for this binary
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "contacts=info".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let client = contact_list_web::ContactsClient::new(&cli.api_url)?;

    match cli.command {
        Commands::List => commands::contacts::list(&client).await?,
        Commands::Show { id } => commands::contacts::show(&client, id).await?,
        Commands::Add { name, email } => commands::contacts::add(&client, name, email).await?,
        Commands::Edit { id, name, email } => {
            commands::contacts::edit(&client, id, name, email).await?;
        }
        Commands::Delete { id } => commands::contacts::delete(&client, id).await?,
    }
    Ok(())
}
