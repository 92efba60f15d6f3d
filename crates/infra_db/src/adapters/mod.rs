//! Store adapters implementing the domain ports

pub mod cards;

pub use cards::{PgCompanyStore, PgTransactionStore};
