//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. These builders allow tests to specify only the relevant
//! fields while using defaults for everything else.

use chrono::{DateTime, Utc};
use core_kernel::{CompanyId, TransactionId, UserId};
use domain_cards::{Company, CompanyStatus, Transaction, User};

use crate::fixtures::{IdFixtures, StringFixtures, TemporalFixtures};

/// Builder for constructing test users
pub struct UserBuilder {
    id: UserId,
    email: String,
    name: String,
    created_at: DateTime<Utc>,
}

impl Default for UserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UserBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: UserId::new(),
            email: StringFixtures::user_email().to_string(),
            name: StringFixtures::user_name().to_string(),
            created_at: TemporalFixtures::company_created(),
        }
    }

    /// Sets the user ID
    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = id;
        self
    }

    /// Sets the email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Builds the user
    pub fn build(self) -> User {
        User {
            id: self.id,
            email: self.email,
            name: self.name,
            created_at: self.created_at,
        }
    }
}

/// Builder for constructing test companies
pub struct CompanyBuilder {
    id: CompanyId,
    name: String,
    credit_limit: i32,
    used_credit: i32,
    status: CompanyStatus,
    activated_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl Default for CompanyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CompanyBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: CompanyId::new(),
            name: StringFixtures::company_name().to_string(),
            credit_limit: 10_000,
            used_credit: 2_000,
            status: CompanyStatus::Inactive,
            activated_at: None,
            created_at: TemporalFixtures::company_created(),
        }
    }

    /// Sets the company ID
    pub fn with_id(mut self, id: CompanyId) -> Self {
        self.id = id;
        self
    }

    /// Sets the company name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the credit limit
    pub fn with_credit_limit(mut self, credit_limit: i32) -> Self {
        self.credit_limit = credit_limit;
        self
    }

    /// Sets the used credit
    pub fn with_used_credit(mut self, used_credit: i32) -> Self {
        self.used_credit = used_credit;
        self
    }

    /// Marks the company as active since the standard activation time
    pub fn active(mut self) -> Self {
        self.status = CompanyStatus::Active;
        self.activated_at = Some(TemporalFixtures::activation_time());
        self
    }

    /// Sets the creation timestamp
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds the company
    pub fn build(self) -> Company {
        Company {
            id: self.id,
            name: self.name,
            credit_limit: self.credit_limit,
            used_credit: self.used_credit,
            status: self.status,
            activated_at: self.activated_at,
            created_at: self.created_at,
        }
    }
}

/// Builder for constructing test transactions
pub struct TransactionBuilder {
    id: TransactionId,
    company_id: CompanyId,
    user_id: UserId,
    amount: i32,
    currency: String,
    counterparty: String,
    created_at: DateTime<Utc>,
}

impl Default for TransactionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: TransactionId::new(),
            company_id: IdFixtures::company_id(),
            user_id: IdFixtures::user_id(),
            amount: 1500,
            currency: StringFixtures::currency().to_string(),
            counterparty: StringFixtures::counterparty().to_string(),
            created_at: TemporalFixtures::transaction_time(0),
        }
    }

    /// Sets the transaction ID
    pub fn with_id(mut self, id: TransactionId) -> Self {
        self.id = id;
        self
    }

    /// Sets the owning company
    pub fn with_company_id(mut self, company_id: CompanyId) -> Self {
        self.company_id = company_id;
        self
    }

    /// Sets the initiating user
    pub fn with_user_id(mut self, user_id: UserId) -> Self {
        self.user_id = user_id;
        self
    }

    /// Sets the amount (minor units)
    pub fn with_amount(mut self, amount: i32) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the currency code
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Sets the counterparty
    pub fn with_counterparty(mut self, counterparty: impl Into<String>) -> Self {
        self.counterparty = counterparty.into();
        self
    }

    /// Sets the creation timestamp
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds the transaction
    pub fn build(self) -> Transaction {
        Transaction {
            id: self.id,
            company_id: self.company_id,
            user_id: self.user_id,
            amount: self.amount,
            currency: self.currency,
            counterparty: self.counterparty,
            created_at: self.created_at,
        }
    }
}
