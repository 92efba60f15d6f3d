//! Core Kernel - Foundational types for the company cards system
//!
//! This crate provides the fundamental building blocks used across all
//! domain modules, currently the strongly-typed entity identifiers shared
//! by the domain, database, and API layers.

pub mod identifiers;

pub use identifiers::{CompanyId, TransactionId, UserId};
