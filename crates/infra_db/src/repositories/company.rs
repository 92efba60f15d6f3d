//! Company repository implementation
//!
//! Database access for company rows: the access-gated listing used by the
//! user-companies endpoint and the card activation update. All SQL is
//! parameterized; identifiers are bound, never interpolated.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DatabaseError;

/// Repository for company data
///
/// Row types stay database-shaped (status as text); mapping into domain
/// types happens in the store adapters.
#[derive(Debug, Clone)]
pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    /// Creates a new CompanyRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists all companies a user can access
    ///
    /// The user row is checked first so an unknown user is distinguishable
    /// from a user with no companies.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user whose access grants are consulted
    ///
    /// # Returns
    ///
    /// `None` when no user row matches; otherwise every company joined
    /// through `user_company_access`, in no particular order.
    pub async fn get_companies(
        &self,
        user_id: Uuid,
    ) -> Result<Option<Vec<CompanyRow>>, DatabaseError> {
        let user_exists = sqlx::query_scalar::<_, i32>("SELECT 1 FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        if user_exists.is_none() {
            return Ok(None);
        }

        let companies = sqlx::query_as::<_, CompanyRow>(
            r#"
            SELECT c.id, c.name, c.credit_limit, c.used_credit, c.status,
                   c.activated_at, c.created_at
            FROM companies c
            JOIN user_company_access uca ON c.id = uca.company_id
            WHERE uca.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(companies))
    }

    /// Activates a company's card
    ///
    /// Unconditional update: status becomes ACTIVE and `activated_at` is
    /// stamped with the database clock whatever the prior status was, so
    /// re-activation is an idempotent success with a fresh timestamp.
    ///
    /// # Returns
    ///
    /// The updated row, or `None` when zero rows matched the id.
    pub async fn activate_company_card(
        &self,
        company_id: Uuid,
    ) -> Result<Option<CompanyRow>, DatabaseError> {
        let company = sqlx::query_as::<_, CompanyRow>(
            r#"
            UPDATE companies
            SET status = 'ACTIVE', activated_at = now()
            WHERE id = $1
            RETURNING id, name, credit_limit, used_credit, status,
                      activated_at, created_at
            "#,
        )
        .bind(company_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(company)
    }
}

/// Database row representation of a company
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CompanyRow {
    pub id: Uuid,
    pub name: String,
    pub credit_limit: i32,
    pub used_credit: i32,
    pub status: String,
    pub activated_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
