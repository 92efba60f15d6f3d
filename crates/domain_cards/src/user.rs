//! User entity

use chrono::{DateTime, Utc};

use core_kernel::UserId;

/// A user of the cards system
///
/// Users are created outside this system's scope; here they are only
/// existence-checked before their companies are listed.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
