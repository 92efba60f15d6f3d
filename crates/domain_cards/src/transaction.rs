//! Card transaction entity
//!
//! Transactions are immutable once created within this system's scope;
//! they are only ever read, most recent first.

use chrono::{DateTime, Utc};

use core_kernel::{CompanyId, TransactionId, UserId};

/// A single card transaction
///
/// `amount` is an integer in the currency's minor unit; `currency` is an
/// ISO 4217 code. Every transaction belongs to exactly one company and
/// records the user who initiated it.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,
    pub company_id: CompanyId,
    pub user_id: UserId,
    pub amount: i32,
    pub currency: String,
    pub counterparty: String,
    pub created_at: DateTime<Utc>,
}
