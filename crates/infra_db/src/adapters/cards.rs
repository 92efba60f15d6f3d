//! Postgres adapters for the cards domain store ports
//!
//! These adapters implement the domain's `CompanyStore` and
//! `TransactionStore` traits over the repositories, mapping database rows
//! into domain entities. Row mapping is a trust boundary: a status value
//! the domain does not know is rejected here rather than passed through.

use async_trait::async_trait;
use sqlx::PgPool;

use core_kernel::{CompanyId, UserId};
use domain_cards::{CardsError, Company, CompanyStore, Transaction, TransactionStore};

use crate::error::DatabaseError;
use crate::repositories::{CompanyRepository, CompanyRow, TransactionRepository, TransactionRow};

/// `CompanyStore` implementation backed by PostgreSQL
#[derive(Debug, Clone)]
pub struct PgCompanyStore {
    repo: CompanyRepository,
}

impl PgCompanyStore {
    /// Creates a new store over the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self {
            repo: CompanyRepository::new(pool),
        }
    }
}

#[async_trait]
impl CompanyStore for PgCompanyStore {
    async fn companies_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Option<Vec<Company>>, CardsError> {
        let rows = self
            .repo
            .get_companies(user_id.into())
            .await
            .map_err(store_error)?;
        match rows {
            None => Ok(None),
            Some(rows) => rows
                .into_iter()
                .map(company_from_row)
                .collect::<Result<Vec<_>, _>>()
                .map(Some),
        }
    }

    async fn activate_card(
        &self,
        company_id: CompanyId,
    ) -> Result<Option<Company>, CardsError> {
        let row = self
            .repo
            .activate_company_card(company_id.into())
            .await
            .map_err(store_error)?;
        row.map(company_from_row).transpose()
    }
}

/// `TransactionStore` implementation backed by PostgreSQL
#[derive(Debug, Clone)]
pub struct PgTransactionStore {
    repo: TransactionRepository,
}

impl PgTransactionStore {
    /// Creates a new store over the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self {
            repo: TransactionRepository::new(pool),
        }
    }
}

#[async_trait]
impl TransactionStore for PgTransactionStore {
    async fn latest_for_company(
        &self,
        company_id: CompanyId,
        limit: i64,
    ) -> Result<Vec<Transaction>, CardsError> {
        let rows = self
            .repo
            .get_latest(company_id.into(), limit)
            .await
            .map_err(store_error)?;
        Ok(rows.into_iter().map(transaction_from_row).collect())
    }

    async fn transactions_for_company(
        &self,
        company_id: CompanyId,
    ) -> Result<Option<Vec<Transaction>>, CardsError> {
        let rows = self
            .repo
            .get_transactions(company_id.into())
            .await
            .map_err(store_error)?;
        Ok(rows.map(|rows| rows.into_iter().map(transaction_from_row).collect()))
    }

    async fn count_for_company(&self, company_id: CompanyId) -> Result<i64, CardsError> {
        self.repo
            .get_transaction_count(company_id.into())
            .await
            .map_err(store_error)
    }
}

fn store_error(error: DatabaseError) -> CardsError {
    CardsError::store(error.to_string())
}

/// Maps a company row into the domain entity
///
/// The status column carries free text as far as the driver is concerned;
/// an unknown value is a validation failure, not data to forward.
fn company_from_row(row: CompanyRow) -> Result<Company, CardsError> {
    Ok(Company {
        id: CompanyId::from(row.id),
        name: row.name,
        credit_limit: row.credit_limit,
        used_credit: row.used_credit,
        status: row.status.parse()?,
        activated_at: row.activated_at,
        created_at: row.created_at,
    })
}

fn transaction_from_row(row: TransactionRow) -> Transaction {
    Transaction {
        id: row.id.into(),
        company_id: row.company_id.into(),
        user_id: row.user_id.into(),
        amount: row.amount,
        currency: row.currency,
        counterparty: row.counterparty,
        created_at: row.created_at,
    }
}
