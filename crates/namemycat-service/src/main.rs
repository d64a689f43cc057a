//! Name My Cat - a website for naming your new pet cat.
//!
//! This is the main entry point for the namemycat service.

use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use namemycat_service::{create_router, AppState, ServiceConfig};
use namemycat_store::names::init_schema;
use namemycat_store::{MemoryStore, NameStore, PgStore};

#[derive(Debug, Parser)]
#[command(name = "namemycat", version, about = "A website for naming your new pet cat")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create the names table if needed, then serve HTTP (default).
    Serve {
        /// Keep names in process memory instead of PostgreSQL.
        #[arg(long)]
        memory: bool,
    },
    /// Create the names table and exit.
    Initdb,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,namemycat=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ServiceConfig::from_env();

    match cli.command.unwrap_or(Command::Serve { memory: false }) {
        Command::Initdb => Ok(initdb(&config).await),
        Command::Serve { memory } => {
            serve(config, memory).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn initdb(config: &ServiceConfig) -> ExitCode {
    let store = PgStore::new(config.database.connect_options());

    match init_schema(&store).await {
        Ok(()) => {
            println!("Initialized the database.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Schema creation failed");
            println!("Unable to initialize the database.");
            ExitCode::FAILURE
        }
    }
}

async fn serve(config: ServiceConfig, memory: bool) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Starting namemycat");

    tracing::info!(
        listen_addr = %config.listen_addr,
        pg_host = %config.database.host,
        pg_port = config.database.port,
        pg_db = %config.database.database,
        memory,
        "Service configuration loaded"
    );

    let store: Arc<dyn NameStore> = if memory {
        tracing::warn!("Using in-memory store - names are lost on exit");
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(PgStore::new(config.database.connect_options()))
    };

    // Reads degrade to the default name until the table exists.
    if let Err(e) = init_schema(store.as_ref()).await {
        tracing::warn!(error = %e, "Could not create names table at startup");
    }

    let state = AppState::new(store, config.clone());
    let app = create_router(state);

    tracing::info!(listen_addr = %config.listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
