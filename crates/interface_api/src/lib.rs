//! HTTP API Layer
//!
//! This crate provides the REST API for the company cards system using
//! Axum.
//!
//! # Architecture
//!
//! - **Handlers**: one per endpoint, mapping requests onto the domain
//!   services and store sentinels onto status codes
//! - **DTOs**: camelCase wire shapes with `From<domain>` conversions
//! - **Error handling**: a single JSON error contract for every endpoint
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;

use axum::{
    routing::{get, patch},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_cards::{CompanyService, TransactionService};

use crate::handlers::{companies, health, transactions};

/// Application state shared across handlers
///
/// Holds the domain services, which in turn own the store handles; no
/// handler touches the database directly.
#[derive(Clone)]
pub struct AppState {
    pub company_service: CompanyService,
    pub transaction_service: TransactionService,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Application state carrying the domain services
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Public routes (no versioned prefix)
    let public_routes = Router::new().route("/health", get(health::health_check));

    // Versioned API routes
    let api_routes = Router::new()
        .route("/users/:user_id/companies", get(companies::list_for_user))
        .route(
            "/companies/:company_id/transactions",
            get(transactions::list_for_company),
        )
        .route(
            "/companies/:company_id/activate",
            patch(companies::activate_card),
        );

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
