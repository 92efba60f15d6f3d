//! Company Cards Domain
//!
//! This crate holds the domain model for the cards backend: companies
//! with a one-way card activation state machine, their transactions, and
//! the read-side summaries that enrich a company with aggregate
//! transaction statistics.
//!
//! # Architecture
//!
//! Data access goes through the port traits in [`ports`]; the production
//! adapter lives in the database infrastructure crate and an in-memory
//! mock (behind the `mock` feature) backs the test suites. Services
//! compose port calls and run the explicit boundary validation in
//! [`validation`] before data leaves the domain.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_cards::services::CompanyService;
//!
//! let service = CompanyService::new(company_store, transaction_store);
//! match service.get_companies_summary(user_id).await? {
//!     None => println!("no such user"),
//!     Some(summaries) => println!("{} companies", summaries.len()),
//! }
//! ```

pub mod company;
pub mod error;
pub mod ports;
pub mod services;
pub mod transaction;
pub mod user;
pub mod validation;

pub use company::{Company, CompanyStatus, CompanySummary, LATEST_TRANSACTIONS_LIMIT};
pub use error::CardsError;
pub use ports::{CompanyStore, TransactionStore};
pub use services::{CompanyService, TransactionService};
pub use transaction::Transaction;
pub use user::User;
pub use validation::{SummaryValidator, ValidationResult};

#[cfg(feature = "mock")]
pub use ports::mock::InMemoryCardStore;
