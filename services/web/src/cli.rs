use crate::server;
use clap::{Args, Parser, Subcommand};
use job_board::config::AppConfig;
use job_board::error::AppError;
use job_board::forms;
use job_board::store::{Collection, DocumentAccessor, DocumentStore, MongoStore, Retrieval};
use job_board::telemetry;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(
    name = "Job Board",
    about = "Serve and inspect the read-only job board",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// List the collections in the configured database with document counts
    Collections,
    /// Print the declared input forms
    Forms,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Serve documents from a JSON fixture file instead of MongoDB
    #[arg(long)]
    pub(crate) fixtures: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Collections => run_collections().await,
        Command::Forms => {
            for schema in forms::registry() {
                println!("{schema}");
            }
            Ok(())
        }
    }
}

async fn run_collections() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, config.environment)?;

    let store = Arc::new(MongoStore::new(config.store.clone()));
    let names = store.collection_names().await?;
    println!("Database '{}':", config.store.database);
    if names.is_empty() {
        println!("(no collections)");
        return Ok(());
    }

    let accessor = DocumentAccessor::new(store);
    for name in names {
        match name.parse::<Collection>() {
            Ok(collection) => match accessor.list(collection).await {
                Retrieval::Found(documents) => println!("- {name}: {} documents", documents.len()),
                Retrieval::NotFound => println!("- {name}: 0 documents"),
                Retrieval::StoreError(err) => return Err(err.into()),
            },
            Err(_) => println!("- {name}: not served by the board"),
        }
    }
    Ok(())
}
