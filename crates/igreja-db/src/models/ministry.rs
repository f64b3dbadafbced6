//! Ministry database model

use sqlx::FromRow;

/// Database model for the ministry table
#[derive(Debug, Clone, FromRow)]
pub struct MinistryModel {
    pub id: i64,
    pub name: String,
    pub leader_id: Option<i64>,
    pub co_leader_id: Option<i64>,
    pub is_active: bool,
}
