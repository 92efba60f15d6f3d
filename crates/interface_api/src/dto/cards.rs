//! Cards DTOs
//!
//! Wire shapes for the three endpoints. Field names are camelCase on the
//! wire; timestamps serialize as ISO-8601 strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{CompanyId, TransactionId};
use domain_cards::{Company, CompanyStatus, CompanySummary, Transaction};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub id: TransactionId,
    pub amount: i32,
    pub currency: String,
    pub counterparty: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyResponse {
    pub id: CompanyId,
    pub name: String,
    pub credit_limit: i32,
    pub used_credit: i32,
    pub created_at: DateTime<Utc>,
    pub status: CompanyStatus,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySummaryResponse {
    #[serde(flatten)]
    pub company: CompanyResponse,
    pub transactions_count: i64,
    pub latest_transactions: Vec<TransactionResponse>,
}

/// Body of `GET /users/{userId}/companies`
#[derive(Debug, Serialize, Deserialize)]
pub struct CompanyListResponse {
    pub companies: Vec<CompanySummaryResponse>,
}

/// Body of `GET /companies/{companyId}/transactions`
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionListResponse {
    pub transactions: Vec<TransactionResponse>,
}

/// Body of `PATCH /companies/{companyId}/activate`
#[derive(Debug, Serialize, Deserialize)]
pub struct ActivationResponse {
    pub company: CompanyResponse,
}

impl From<Transaction> for TransactionResponse {
    fn from(transaction: Transaction) -> Self {
        Self {
            id: transaction.id,
            amount: transaction.amount,
            currency: transaction.currency,
            counterparty: transaction.counterparty,
            created_at: transaction.created_at,
        }
    }
}

impl From<Company> for CompanyResponse {
    fn from(company: Company) -> Self {
        Self {
            id: company.id,
            name: company.name,
            credit_limit: company.credit_limit,
            used_credit: company.used_credit,
            created_at: company.created_at,
            status: company.status,
        }
    }
}

impl From<CompanySummary> for CompanySummaryResponse {
    fn from(summary: CompanySummary) -> Self {
        Self {
            company: summary.company.into(),
            transactions_count: summary.transactions_count,
            latest_transactions: summary
                .latest_transactions
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use core_kernel::UserId;

    fn sample_company() -> Company {
        Company {
            id: CompanyId::new(),
            name: "Acme Ltd".to_string(),
            credit_limit: 10_000,
            used_credit: 2_000,
            status: CompanyStatus::Active,
            activated_at: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_company_serializes_camel_case() {
        let response: CompanyResponse = sample_company().into();
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("creditLimit").is_some());
        assert!(json.get("usedCredit").is_some());
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["status"], "ACTIVE");
        // Internal-only fields stay off the wire
        assert!(json.get("activatedAt").is_none());
    }

    #[test]
    fn test_created_at_is_iso8601() {
        let response: CompanyResponse = sample_company().into();
        let json = serde_json::to_value(&response).unwrap();
        let created_at = json["createdAt"].as_str().unwrap();
        assert!(created_at.starts_with("2024-01-01T00:00:00"));
    }

    #[test]
    fn test_summary_flattens_company_fields() {
        let company = sample_company();
        let transaction = Transaction {
            id: TransactionId::new(),
            company_id: company.id,
            user_id: UserId::new(),
            amount: 1500,
            currency: "SEK".to_string(),
            counterparty: "IKEA".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
        };
        let summary = CompanySummary {
            company,
            transactions_count: 1,
            latest_transactions: vec![transaction],
        };

        let response: CompanySummaryResponse = summary.into();
        let json = serde_json::to_value(&response).unwrap();

        // Company fields sit at the top level next to the aggregates
        assert!(json.get("name").is_some());
        assert_eq!(json["transactionsCount"], 1);
        assert_eq!(json["latestTransactions"].as_array().unwrap().len(), 1);
        assert_eq!(json["latestTransactions"][0]["amount"], 1500);
    }
}
