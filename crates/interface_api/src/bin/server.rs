//! Company Cards - API Server Binary
//!
//! This binary starts the HTTP API server for the company cards system.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin cards-api
//!
//! # Run with environment variables
//! API_HOST=0.0.0.0 API_PORT=8080 PG_HOST=db.internal cargo run --bin cards-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `PG_HOST` / `PG_PORT` / `PG_USER` / `PG_PASSWORD` / `PG_DATABASE` -
//!   PostgreSQL connection settings

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_cards::{CompanyService, CompanyStore, TransactionService, TransactionStore};
use infra_db::{create_pool, DatabaseConfig, PgCompanyStore, PgTransactionStore};
use interface_api::{config::ApiConfig, create_router, AppState};

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration, establishes the database
/// pool, applies migrations, and starts the HTTP server.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Migrations fail to apply
/// - Server fails to bind to the configured address
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = load_config();
    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "Starting Company Cards API Server"
    );

    // The pool is the single shared database resource; it is built here
    // once and threaded through the stores (no global state).
    let pool = create_pool(load_database_config()).await?;
    infra_db::run_migrations(&pool).await?;

    let company_store: Arc<dyn CompanyStore> = Arc::new(PgCompanyStore::new(pool.clone()));
    let transaction_store: Arc<dyn TransactionStore> = Arc::new(PgTransactionStore::new(pool));

    let state = AppState {
        company_service: CompanyService::new(company_store, Arc::clone(&transaction_store)),
        transaction_service: TransactionService::new(transaction_store),
    };

    let app = create_router(state);
    let addr: SocketAddr = config.server_addr().parse()?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads API configuration from environment variables.
///
/// Falls back to individual env vars or defaults if the prefixed source
/// cannot be deserialized.
fn load_config() -> ApiConfig {
    ApiConfig::from_env().unwrap_or_else(|_| ApiConfig {
        host: std::env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
        port: std::env::var("API_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080),
        log_level: std::env::var("API_LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string()),
    })
}

/// Assembles the database configuration from `PG_*` environment variables.
fn load_database_config() -> DatabaseConfig {
    DatabaseConfig::new(
        std::env::var("PG_HOST").unwrap_or_else(|_| "localhost".to_string()),
        std::env::var("PG_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5432),
        std::env::var("PG_USER").unwrap_or_else(|_| "postgres".to_string()),
        std::env::var("PG_PASSWORD").unwrap_or_else(|_| "postgres".to_string()),
        std::env::var("PG_DATABASE").unwrap_or_else(|_| "cards".to_string()),
    )
}

/// Initializes the tracing subscriber for structured logging.
///
/// # Arguments
///
/// * `log_level` - The minimum log level to output (trace, debug, info, warn, error)
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// This enables graceful shutdown of the server, allowing in-flight
/// requests to complete before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
