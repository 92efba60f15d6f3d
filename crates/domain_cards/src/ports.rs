//! Cards domain ports
//!
//! Port traits defining what the domain needs from its data store,
//! enabling swappable implementations:
//!
//! - **Postgres adapter**: the production store (infra_db)
//! - **In-memory mock**: for tests without external dependencies
//!
//! "Not found" is a sentinel, not an error: operations keyed by an entity
//! that may not exist return `Option`, keeping an unknown user or company
//! distinct from one with no data.

use async_trait::async_trait;

use core_kernel::{CompanyId, UserId};

use crate::company::Company;
use crate::error::CardsError;
use crate::transaction::Transaction;

/// Store operations for companies
#[async_trait]
pub trait CompanyStore: Send + Sync {
    /// Lists the companies a user has access to
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user whose grants are consulted
    ///
    /// # Returns
    ///
    /// `None` when no such user exists; otherwise every company reachable
    /// through an access grant, in no particular order.
    async fn companies_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Option<Vec<Company>>, CardsError>;

    /// Activates a company's card
    ///
    /// Sets the status to active and stamps the activation time,
    /// unconditionally of the prior status.
    ///
    /// # Returns
    ///
    /// The updated company, or `None` when no company matched.
    async fn activate_card(&self, company_id: CompanyId)
        -> Result<Option<Company>, CardsError>;
}

/// Store operations for transactions
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Returns up to `limit` transactions for a company, most recent first
    ///
    /// Ties on the creation timestamp break on id, so the order is
    /// deterministic. Does not check that the company exists: callers on
    /// this path already hold the company row.
    async fn latest_for_company(
        &self,
        company_id: CompanyId,
        limit: i64,
    ) -> Result<Vec<Transaction>, CardsError>;

    /// Returns all transactions for a company, most recent first
    ///
    /// # Returns
    ///
    /// `None` when no such company exists; otherwise the possibly-empty
    /// full listing.
    async fn transactions_for_company(
        &self,
        company_id: CompanyId,
    ) -> Result<Option<Vec<Transaction>>, CardsError>;

    /// Returns the total transaction count for a company
    async fn count_for_company(&self, company_id: CompanyId) -> Result<i64, CardsError>;
}

#[cfg(any(test, feature = "mock"))]
pub mod mock {
    //! In-memory store for tests

    use std::collections::HashSet;
    use std::sync::Mutex;

    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::user::User;

    #[derive(Default)]
    struct State {
        users: HashSet<UserId>,
        companies: Vec<Company>,
        access: Vec<(UserId, CompanyId)>,
        transactions: Vec<Transaction>,
    }

    /// In-memory implementation of both store ports
    ///
    /// Seed it with users, companies, grants, and transactions, then hand
    /// it to the services (or the router) in place of the Postgres store.
    #[derive(Default)]
    pub struct InMemoryCardStore {
        state: Mutex<State>,
    }

    impl InMemoryCardStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Registers a user
        pub fn add_user(&self, user: &User) {
            self.state.lock().unwrap().users.insert(user.id);
        }

        /// Registers a user by id only
        pub fn add_user_id(&self, user_id: UserId) {
            self.state.lock().unwrap().users.insert(user_id);
        }

        /// Registers a company
        pub fn add_company(&self, company: Company) {
            self.state.lock().unwrap().companies.push(company);
        }

        /// Grants a user access to a company
        pub fn grant_access(&self, user_id: UserId, company_id: CompanyId) {
            self.state.lock().unwrap().access.push((user_id, company_id));
        }

        /// Records a transaction
        pub fn add_transaction(&self, transaction: Transaction) {
            self.state.lock().unwrap().transactions.push(transaction);
        }

        fn company_exists(state: &State, company_id: CompanyId) -> bool {
            state.companies.iter().any(|c| c.id == company_id)
        }

        fn sorted_for_company(state: &State, company_id: CompanyId) -> Vec<Transaction> {
            let mut transactions: Vec<Transaction> = state
                .transactions
                .iter()
                .filter(|t| t.company_id == company_id)
                .cloned()
                .collect();
            transactions.sort_by(|a, b| {
                b.created_at
                    .cmp(&a.created_at)
                    .then_with(|| Uuid::from(b.id).cmp(&Uuid::from(a.id)))
            });
            transactions
        }
    }

    #[async_trait]
    impl CompanyStore for InMemoryCardStore {
        async fn companies_for_user(
            &self,
            user_id: UserId,
        ) -> Result<Option<Vec<Company>>, CardsError> {
            let state = self.state.lock().unwrap();
            if !state.users.contains(&user_id) {
                return Ok(None);
            }
            let companies = state
                .companies
                .iter()
                .filter(|c| {
                    state
                        .access
                        .iter()
                        .any(|(u, cid)| *u == user_id && *cid == c.id)
                })
                .cloned()
                .collect();
            Ok(Some(companies))
        }

        async fn activate_card(
            &self,
            company_id: CompanyId,
        ) -> Result<Option<Company>, CardsError> {
            let mut state = self.state.lock().unwrap();
            match state.companies.iter_mut().find(|c| c.id == company_id) {
                Some(company) => {
                    company.activate(Utc::now());
                    Ok(Some(company.clone()))
                }
                None => Ok(None),
            }
        }
    }

    #[async_trait]
    impl TransactionStore for InMemoryCardStore {
        async fn latest_for_company(
            &self,
            company_id: CompanyId,
            limit: i64,
        ) -> Result<Vec<Transaction>, CardsError> {
            let state = self.state.lock().unwrap();
            let mut transactions = Self::sorted_for_company(&state, company_id);
            transactions.truncate(limit.max(0) as usize);
            Ok(transactions)
        }

        async fn transactions_for_company(
            &self,
            company_id: CompanyId,
        ) -> Result<Option<Vec<Transaction>>, CardsError> {
            let state = self.state.lock().unwrap();
            if !Self::company_exists(&state, company_id) {
                return Ok(None);
            }
            Ok(Some(Self::sorted_for_company(&state, company_id)))
        }

        async fn count_for_company(&self, company_id: CompanyId) -> Result<i64, CardsError> {
            let state = self.state.lock().unwrap();
            Ok(state
                .transactions
                .iter()
                .filter(|t| t.company_id == company_id)
                .count() as i64)
        }
    }
}
