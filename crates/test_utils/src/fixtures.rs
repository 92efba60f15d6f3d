//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities across the cards
//! system. These fixtures are designed to be consistent and predictable
//! for unit tests.

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::{CompanyId, TransactionId, UserId};
use uuid::Uuid;

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// Creates a deterministic user ID for testing
    pub fn user_id() -> UserId {
        UserId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap())
    }

    /// Creates a deterministic company ID for testing
    pub fn company_id() -> CompanyId {
        CompanyId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440002").unwrap())
    }

    /// Creates a second deterministic company ID for multi-company tests
    pub fn other_company_id() -> CompanyId {
        CompanyId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440003").unwrap())
    }

    /// Creates a deterministic transaction ID for testing
    pub fn transaction_id() -> TransactionId {
        TransactionId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440004").unwrap())
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard company creation timestamp (Jan 1, 2024)
    pub fn company_created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    /// Standard activation timestamp
    pub fn activation_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 1, 9, 30, 0).unwrap()
    }

    /// A transaction timestamp `n` minutes into a fixed trading morning,
    /// for seeding rows with a known order
    pub fn transaction_time(n: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 10, n, 0).unwrap()
    }
}

/// Fixture for string test data
pub struct StringFixtures;

impl StringFixtures {
    /// Standard company name
    pub fn company_name() -> &'static str {
        "Acme Trading AB"
    }

    /// Standard counterparty
    pub fn counterparty() -> &'static str {
        "IKEA"
    }

    /// Standard currency code
    pub fn currency() -> &'static str {
        "SEK"
    }

    /// Standard user email
    pub fn user_email() -> &'static str {
        "user@example.com"
    }

    /// Standard user name
    pub fn user_name() -> &'static str {
        "Test User"
    }
}
