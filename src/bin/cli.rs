//! Recordstore CLI - manage JSON records from the shell.
//!
//! Usage:
//!   recordstore create <schema> <json>   # Store a record (id assigned if missing)
//!   recordstore update <schema> <json>   # Overwrite a record
//!   recordstore get <schema> <id>        # Print a record
//!   recordstore delete <schema> <id>     # Remove a record
//!   recordstore list <schema>            # List record ids

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use recordstore::{assign_id, RecordStore, StoreConfig, StoreError};
use serde_json::Value;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Env var controlling the log filter (e.g. `RECORDSTORE_LOG=debug`).
const LOG_ENV: &str = "RECORDSTORE_LOG";

#[derive(Parser)]
#[command(name = "recordstore")]
#[command(about = "Recordstore - JSON records on the filesystem", long_about = None)]
struct Cli {
    /// Config file (default: ./recordstore.toml, if present)
    #[arg(short, long, default_value = recordstore::config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Data root directory (overrides the config file)
    #[arg(short, long)]
    data_root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store a new record; an id is generated when the record has none
    Create {
        /// Schema (collection) name
        schema: String,

        /// Record as a JSON object
        json: String,
    },

    /// Overwrite a record with the given id
    Update {
        /// Schema (collection) name
        schema: String,

        /// Record as a JSON object, including its id
        json: String,
    },

    /// Print a record
    Get { schema: String, id: String },

    /// Delete a record
    Delete { schema: String, id: String },

    /// List record ids in a schema
    List { schema: String },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        match e.downcast_ref::<StoreError>() {
            Some(store_err) => {
                eprintln!("Error ({}): {}", store_err.kind().status_code(), store_err.message());
            }
            None => eprintln!("Error: {:#}", e),
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = StoreConfig::load(&cli.config)?;
    if let Some(root) = cli.data_root {
        config.data_root = root;
    }
    let store = RecordStore::from_config(&config);

    match cli.command {
        Commands::Create { schema, json } => {
            let mut item = parse_item(&json)?;
            if item.is_object() {
                assign_id(&mut item)?;
            }
            let stored = store.create_item(&schema, item).await?;
            print_json(&stored)?;
        }
        Commands::Update { schema, json } => {
            let item = parse_item(&json)?;
            let stored = store.update_item(&schema, item).await?;
            print_json(&stored)?;
        }
        Commands::Get { schema, id } => {
            let item = store.fetch_item(&schema, &id).await?;
            print_json(&item)?;
        }
        Commands::Delete { schema, id } => {
            store.delete_item(&schema, &id).await?;
            println!("deleted {}/{}", schema, id);
        }
        Commands::List { schema } => {
            for id in store.list_ids(&schema).await? {
                println!("{}", id);
            }
        }
    }

    Ok(())
}

fn parse_item(json: &str) -> Result<Value> {
    serde_json::from_str(json).context("record is not valid JSON")
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
