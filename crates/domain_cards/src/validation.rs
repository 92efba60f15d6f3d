//! Summary validation rules
//!
//! Explicit validate-or-reject checks applied where assembled data crosses
//! a trust boundary, before it is serialized to a client.
//!
//! # Validation Rules
//!
//! ## Companies
//! - Name must be non-empty
//! - Credit limit and used credit must be non-negative
//! - Used credit above the credit limit is reported as a warning only
//!   (the bound is expected but not enforced)
//!
//! ## Summaries
//! - The latest-transactions list must not exceed the configured cap
//! - Every attached transaction must belong to the summarized company
//! - A total count below the attached list length is a warning only
//!   (the two reads come from separate statements, not one snapshot)
//!
//! ## Transactions
//! - Currency must be a 3-letter uppercase ISO code
//! - Counterparty must be non-empty

use crate::company::{Company, CompanySummary, LATEST_TRANSACTIONS_LIMIT};
use crate::transaction::Transaction;

/// Result of a validation pass
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the data is valid
    pub is_valid: bool,
    /// List of validation errors
    pub errors: Vec<String>,
    /// List of validation warnings (non-fatal issues)
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }

    /// Adds a warning to the result
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Merges another validation result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        if !other.is_valid {
            self.is_valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Validator for company summaries and their parts
pub struct SummaryValidator;

impl SummaryValidator {
    /// Validates a list of assembled company summaries
    ///
    /// # Arguments
    ///
    /// * `summaries` - The summaries about to cross the HTTP boundary
    ///
    /// # Returns
    ///
    /// A `ValidationResult` containing any errors or warnings
    pub fn validate(summaries: &[CompanySummary]) -> ValidationResult {
        let mut result = ValidationResult::ok();
        for summary in summaries {
            result.merge(Self::validate_summary(summary));
        }
        result
    }

    /// Validates a single company summary
    pub fn validate_summary(summary: &CompanySummary) -> ValidationResult {
        let mut result = Self::validate_company(&summary.company);

        if summary.latest_transactions.len() as i64 > LATEST_TRANSACTIONS_LIMIT {
            result.add_error(format!(
                "company {} carries {} latest transactions, cap is {}",
                summary.company.id,
                summary.latest_transactions.len(),
                LATEST_TRANSACTIONS_LIMIT
            ));
        }

        if summary.transactions_count < summary.latest_transactions.len() as i64 {
            // Count and list come from separate statements; a row inserted
            // between them can put the count one behind the list.
            result.add_warning(format!(
                "company {} count {} is below its latest list length {}",
                summary.company.id,
                summary.transactions_count,
                summary.latest_transactions.len()
            ));
        }

        for transaction in &summary.latest_transactions {
            if transaction.company_id != summary.company.id {
                result.add_error(format!(
                    "transaction {} attached to company {} belongs to {}",
                    transaction.id, summary.company.id, transaction.company_id
                ));
            }
            result.merge(Self::validate_transaction(transaction));
        }

        result
    }

    /// Validates a company's own fields
    pub fn validate_company(company: &Company) -> ValidationResult {
        let mut result = ValidationResult::ok();

        if company.name.trim().is_empty() {
            result.add_error(format!("company {} has an empty name", company.id));
        }
        if company.credit_limit < 0 {
            result.add_error(format!(
                "company {} has negative credit limit {}",
                company.id, company.credit_limit
            ));
        }
        if company.used_credit < 0 {
            result.add_error(format!(
                "company {} has negative used credit {}",
                company.id, company.used_credit
            ));
        }
        if company.used_credit > company.credit_limit && company.credit_limit >= 0 {
            result.add_warning(format!(
                "company {} used credit {} exceeds its limit {}",
                company.id, company.used_credit, company.credit_limit
            ));
        }

        result
    }

    /// Validates a transaction's fields
    pub fn validate_transaction(transaction: &Transaction) -> ValidationResult {
        let mut result = ValidationResult::ok();

        if !is_iso_currency(&transaction.currency) {
            result.add_error(format!(
                "transaction {} has invalid currency '{}'",
                transaction.id, transaction.currency
            ));
        }
        if transaction.counterparty.trim().is_empty() {
            result.add_error(format!(
                "transaction {} has an empty counterparty",
                transaction.id
            ));
        }

        result
    }
}

/// True when the value looks like an ISO 4217 code: 3 uppercase ASCII letters
fn is_iso_currency(code: &str) -> bool {
    code.len() == 3 && code.chars().all(|c| c.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::company::CompanyStatus;
    use chrono::{TimeZone, Utc};
    use core_kernel::{CompanyId, TransactionId, UserId};
    use proptest::prelude::*;

    fn valid_company() -> Company {
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

    fn valid_transaction(company_id: CompanyId) -> Transaction {
        Transaction {
            id: TransactionId::new(),
            company_id,
            user_id: UserId::new(),
            amount: 1500,
            currency: "SEK".to_string(),
            counterparty: "IKEA".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
        }
    }

    fn valid_summary() -> CompanySummary {
        let company = valid_company();
        let transaction = valid_transaction(company.id);
        CompanySummary {
            company,
            transactions_count: 1,
            latest_transactions: vec![transaction],
        }
    }

    #[test]
    fn test_valid_summary() {
        let result = SummaryValidator::validate(&[valid_summary()]);
        assert!(result.is_valid, "Errors: {:?}", result.errors);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_empty_list_is_valid() {
        let result = SummaryValidator::validate(&[]);
        assert!(result.is_valid);
    }

    #[test]
    fn test_empty_company_name_rejected() {
        let mut summary = valid_summary();
        summary.company.name = "  ".to_string();
        let result = SummaryValidator::validate(&[summary]);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("empty name")));
    }

    #[test]
    fn test_negative_credit_limit_rejected() {
        let mut summary = valid_summary();
        summary.company.credit_limit = -1;
        let result = SummaryValidator::validate(&[summary]);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("credit limit")));
    }

    #[test]
    fn test_overspent_credit_is_warning_not_error() {
        let mut summary = valid_summary();
        summary.company.used_credit = summary.company.credit_limit + 1;
        let result = SummaryValidator::validate(&[summary]);
        assert!(result.is_valid);
        assert!(result.warnings.iter().any(|w| w.contains("exceeds")));
    }

    #[test]
    fn test_bad_currency_rejected() {
        let mut summary = valid_summary();
        summary.latest_transactions[0].currency = "sek".to_string();
        let result = SummaryValidator::validate(&[summary]);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("currency")));
    }

    #[test]
    fn test_foreign_transaction_rejected() {
        let mut summary = valid_summary();
        summary.latest_transactions[0].company_id = CompanyId::new();
        let result = SummaryValidator::validate(&[summary]);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("belongs to")));
    }

    #[test]
    fn test_oversized_latest_list_rejected() {
        let mut summary = valid_summary();
        let company_id = summary.company.id;
        summary.latest_transactions = (0..4).map(|_| valid_transaction(company_id)).collect();
        summary.transactions_count = 4;
        let result = SummaryValidator::validate(&[summary]);
        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.contains("cap")));
    }

    #[test]
    fn test_count_behind_list_is_warning() {
        let mut summary = valid_summary();
        summary.transactions_count = 0;
        let result = SummaryValidator::validate(&[summary]);
        assert!(result.is_valid);
        assert!(!result.warnings.is_empty());
    }

    proptest! {
        #[test]
        fn prop_three_uppercase_letters_accepted(code in "[A-Z]{3}") {
            let mut summary = valid_summary();
            summary.latest_transactions[0].currency = code;
            let result = SummaryValidator::validate(&[summary]);
            prop_assert!(result.is_valid);
        }

        #[test]
        fn prop_non_iso_currency_rejected(code in "[a-z0-9]{1,8}") {
            let mut summary = valid_summary();
            summary.latest_transactions[0].currency = code;
            let result = SummaryValidator::validate(&[summary]);
            prop_assert!(!result.is_valid);
        }
    }
}
