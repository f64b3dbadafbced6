//! Account database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct AccountModel {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Account row with its role assignment joined in (from LEFT JOIN query)
///
/// The role columns are all-`Some` or all-`None` together.
#[derive(Debug, Clone, FromRow)]
pub struct AccountWithRoleModel {
    pub id: i64,
    pub email: String,
    pub role_id: Option<i64>,
    pub role_name: Option<String>,
}
