//! Company entity and derived summary types
//!
//! A company owns a card with a credit limit. The card starts out
//! inactive and can be activated exactly once in terms of state: the
//! status transition is one-way (`Inactive -> Active`) and there is no
//! deactivation operation. Re-activating an already active company is an
//! idempotent success that refreshes the activation timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::CompanyId;

use crate::error::CardsError;
use crate::transaction::Transaction;

/// Number of transactions attached to a company summary.
pub const LATEST_TRANSACTIONS_LIMIT: i64 = 3;

/// Card status of a company.
///
/// Stored in the database as the text values `ACTIVE` / `INACTIVE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CompanyStatus {
    Active,
    Inactive,
}

impl CompanyStatus {
    /// Returns the database text representation
    pub fn as_str(&self) -> &'static str {
        match self {
            CompanyStatus::Active => "ACTIVE",
            CompanyStatus::Inactive => "INACTIVE",
        }
    }
}

impl fmt::Display for CompanyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompanyStatus {
    type Err = CardsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(CompanyStatus::Active),
            "INACTIVE" => Ok(CompanyStatus::Inactive),
            other => Err(CardsError::validation(format!(
                "unknown company status '{}'",
                other
            ))),
        }
    }
}

/// A company as exposed by the cards system
///
/// Credit fields are integers in the currency's minor unit. `used_credit`
/// is expected to stay within `credit_limit` but that bound is not
/// enforced here; the validator reports a breach as a warning.
#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub credit_limit: i32,
    pub used_credit: i32,
    pub status: CompanyStatus,
    /// Set the first time the card is activated, refreshed on re-activation
    pub activated_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Company {
    /// Returns true when the company's card is active
    pub fn is_active(&self) -> bool {
        self.status == CompanyStatus::Active
    }

    /// Activates the company's card
    ///
    /// The only mutation this system performs on a company. Idempotent:
    /// activating an already active company keeps it active and refreshes
    /// `activated_at`.
    ///
    /// # Arguments
    ///
    /// * `at` - The activation timestamp
    pub fn activate(&mut self, at: DateTime<Utc>) {
        self.status = CompanyStatus::Active;
        self.activated_at = Some(at);
    }
}

/// A company enriched with aggregate transaction statistics
///
/// Derived on read, never persisted. `transactions_count` is the true
/// total for the company, independent of the `latest_transactions` cap.
/// The two reads behind those fields are not taken inside one database
/// transaction, so the count may disagree with the list by one if a
/// transaction lands mid-request; that window is accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanySummary {
    pub company: Company,
    pub transactions_count: i64,
    pub latest_transactions: Vec<Transaction>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn company(status: CompanyStatus) -> Company {
        Company {
            id: CompanyId::new(),
            name: "Acme Ltd".to_string(),
            credit_limit: 10_000,
            used_credit: 2_000,
            status,
            activated_at: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_activate_transitions_to_active() {
        let mut company = company(CompanyStatus::Inactive);
        let at = Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap();

        company.activate(at);

        assert!(company.is_active());
        assert_eq!(company.activated_at, Some(at));
    }

    #[test]
    fn test_activate_is_idempotent_and_refreshes_timestamp() {
        let mut company = company(CompanyStatus::Inactive);
        let first = Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap();
        let second = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();

        company.activate(first);
        company.activate(second);

        assert!(company.is_active());
        assert_eq!(company.activated_at, Some(second));
    }

    #[test]
    fn test_status_parse_roundtrip() {
        assert_eq!(
            "ACTIVE".parse::<CompanyStatus>().unwrap(),
            CompanyStatus::Active
        );
        assert_eq!(
            "INACTIVE".parse::<CompanyStatus>().unwrap(),
            CompanyStatus::Inactive
        );
        assert_eq!(CompanyStatus::Active.as_str(), "ACTIVE");
    }

    #[test]
    fn test_status_parse_rejects_unknown() {
        assert!("SUSPENDED".parse::<CompanyStatus>().is_err());
        // Case-sensitive: the check constraint stores uppercase only
        assert!("active".parse::<CompanyStatus>().is_err());
    }

    #[test]
    fn test_status_serializes_uppercase() {
        let json = serde_json::to_string(&CompanyStatus::Active).unwrap();
        assert_eq!(json, "\"ACTIVE\"");
    }
}
