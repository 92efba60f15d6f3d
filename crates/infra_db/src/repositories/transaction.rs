//! Transaction repository implementation
//!
//! Read-only database access for card transactions: the capped latest-N
//! query behind company summaries, the unbounded per-company listing, and
//! the total count.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DatabaseError;

/// Repository for transaction data
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    pool: PgPool,
}

impl TransactionRepository {
    /// Creates a new TransactionRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns up to `limit` transactions for a company, most recent first
    ///
    /// Ties on `created_at` break on `id DESC` so repeated reads return a
    /// stable order.
    pub async fn get_latest(
        &self,
        company_id: Uuid,
        limit: i64,
    ) -> Result<Vec<TransactionRow>, DatabaseError> {
        let transactions = sqlx::query_as::<_, TransactionRow>(
            r#"
            SELECT t.id, t.company_id, t.user_id, t.amount, t.currency,
                   t.counterparty, t.created_at
            FROM transactions t
            WHERE t.company_id = $1
            ORDER BY t.created_at DESC, t.id DESC
            LIMIT $2
            "#,
        )
        .bind(company_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(transactions)
    }

    /// Returns all transactions for a company, most recent first
    ///
    /// The company row is checked first so an unknown company is
    /// distinguishable from one without transactions.
    ///
    /// # Returns
    ///
    /// `None` when no company row matches; otherwise the possibly-empty
    /// full listing.
    pub async fn get_transactions(
        &self,
        company_id: Uuid,
    ) -> Result<Option<Vec<TransactionRow>>, DatabaseError> {
        let company_exists = sqlx::query_scalar::<_, i32>("SELECT 1 FROM companies WHERE id = $1")
            .bind(company_id)
            .fetch_optional(&self.pool)
            .await?;
        if company_exists.is_none() {
            return Ok(None);
        }

        let transactions = sqlx::query_as::<_, TransactionRow>(
            r#"
            SELECT t.id, t.company_id, t.user_id, t.amount, t.currency,
                   t.counterparty, t.created_at
            FROM transactions t
            WHERE t.company_id = $1
            ORDER BY t.created_at DESC, t.id DESC
            "#,
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(transactions))
    }

    /// Returns the total transaction count for a company
    ///
    /// Unlimited, non-negative; unknown companies simply count zero.
    pub async fn get_transaction_count(&self, company_id: Uuid) -> Result<i64, DatabaseError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM transactions WHERE company_id = $1",
        )
        .bind(company_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}

/// Database row representation of a transaction
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TransactionRow {
    pub id: Uuid,
    pub company_id: Uuid,
    pub user_id: Uuid,
    pub amount: i32,
    pub currency: String,
    pub counterparty: String,
    pub created_at: DateTime<Utc>,
}
