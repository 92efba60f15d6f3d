//! Cards domain services
//!
//! Services compose store calls into the operations the HTTP layer
//! exposes, and run the boundary validation before anything leaves the
//! domain.

use std::sync::Arc;

use futures_util::future::{try_join, try_join_all};
use tracing::warn;

use core_kernel::{CompanyId, UserId};

use crate::company::{Company, CompanySummary, LATEST_TRANSACTIONS_LIMIT};
use crate::error::CardsError;
use crate::ports::{CompanyStore, TransactionStore};
use crate::transaction::Transaction;
use crate::validation::SummaryValidator;

/// Service assembling company data for users
///
/// `get_companies_summary` is the one non-trivial composition in the
/// system: for every company the user can see, the total transaction
/// count and the latest transactions are fetched concurrently and merged
/// into a summary. The two reads are independent statements, so the count
/// can trail the list by one when a transaction lands mid-request; that
/// window is accepted rather than closed with a database transaction.
#[derive(Clone)]
pub struct CompanyService {
    companies: Arc<dyn CompanyStore>,
    transactions: Arc<dyn TransactionStore>,
}

impl CompanyService {
    /// Creates a new service over the given stores
    pub fn new(companies: Arc<dyn CompanyStore>, transactions: Arc<dyn TransactionStore>) -> Self {
        Self {
            companies,
            transactions,
        }
    }

    /// Builds a summary for every company the user has access to
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user whose companies are summarized
    ///
    /// # Returns
    ///
    /// `None` when the user does not exist (preserved so the HTTP layer
    /// can answer 404), `Some(vec![])` when the user has no companies,
    /// otherwise one summary per company.
    ///
    /// # Errors
    ///
    /// Returns `CardsError::Validation` when the assembled summaries fail
    /// the boundary checks, or `CardsError::Store` on store failure.
    pub async fn get_companies_summary(
        &self,
        user_id: UserId,
    ) -> Result<Option<Vec<CompanySummary>>, CardsError> {
        let companies = match self.companies.companies_for_user(user_id).await? {
            Some(companies) => companies,
            None => return Ok(None),
        };

        let summaries = try_join_all(companies.into_iter().map(|company| {
            let transactions = Arc::clone(&self.transactions);
            async move {
                let (transactions_count, latest_transactions) = try_join(
                    transactions.count_for_company(company.id),
                    transactions.latest_for_company(company.id, LATEST_TRANSACTIONS_LIMIT),
                )
                .await?;
                Ok::<_, CardsError>(CompanySummary {
                    company,
                    transactions_count,
                    latest_transactions,
                })
            }
        }))
        .await?;

        let validation = SummaryValidator::validate(&summaries);
        for warning in &validation.warnings {
            warn!(%user_id, %warning, "company summary validation warning");
        }
        if !validation.is_valid {
            return Err(CardsError::validation_failed(validation.errors));
        }

        Ok(Some(summaries))
    }

    /// Activates a company's card
    ///
    /// Delegates to the store; the not-found sentinel passes through
    /// untouched. The returned company is validated before it is exposed.
    pub async fn activate_company_card(
        &self,
        company_id: CompanyId,
    ) -> Result<Option<Company>, CardsError> {
        let company = match self.companies.activate_card(company_id).await? {
            Some(company) => company,
            None => return Ok(None),
        };

        let validation = SummaryValidator::validate_company(&company);
        for warning in &validation.warnings {
            warn!(%company_id, %warning, "company validation warning");
        }
        if !validation.is_valid {
            return Err(CardsError::validation_failed(validation.errors));
        }

        Ok(Some(company))
    }
}

/// Service exposing transaction listings
#[derive(Clone)]
pub struct TransactionService {
    transactions: Arc<dyn TransactionStore>,
}

impl TransactionService {
    /// Creates a new service over the given store
    pub fn new(transactions: Arc<dyn TransactionStore>) -> Self {
        Self { transactions }
    }

    /// Lists all transactions for a company, most recent first
    ///
    /// Pure passthrough, no limit applied.
    ///
    /// # Returns
    ///
    /// `None` when the company does not exist, otherwise the full
    /// (possibly empty) listing.
    pub async fn get_transactions(
        &self,
        company_id: CompanyId,
    ) -> Result<Option<Vec<Transaction>>, CardsError> {
        self.transactions.transactions_for_company(company_id).await
    }
}
