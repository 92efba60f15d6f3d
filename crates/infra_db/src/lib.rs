//! Infrastructure Database Layer
//!
//! This crate provides the database infrastructure for the company cards
//! system on PostgreSQL using SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: repositories execute
//! parameterized SQL and return row structs, and the adapters implement
//! the domain's store ports on top of them, validating rows as they are
//! mapped into domain entities. The connection pool is constructed here
//! once and passed down; there is no global database state.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, DatabaseConfig, PgCompanyStore};
//!
//! let pool = create_pool(DatabaseConfig::default()).await?;
//! infra_db::run_migrations(&pool).await?;
//! let store = PgCompanyStore::new(pool);
//! ```

pub mod adapters;
pub mod error;
pub mod pool;
pub mod repositories;

pub use adapters::{PgCompanyStore, PgTransactionStore};
pub use error::DatabaseError;
pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};

/// Applies the embedded migrations to the given pool
///
/// # Errors
///
/// Returns `DatabaseError::MigrationFailed` if any migration fails to apply
pub async fn run_migrations(pool: &DatabasePool) -> Result<(), DatabaseError> {
    tracing::info!("Running database migrations");
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
    tracing::info!("Database schema up to date");
    Ok(())
}
