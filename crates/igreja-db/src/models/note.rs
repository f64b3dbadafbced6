//! Note database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for notes table
#[derive(Debug, Clone, FromRow)]
pub struct NoteModel {
    pub id: i64,
    pub member_id: i64,
    pub user_id: i64,
    pub text: String,
    pub date: DateTime<Utc>,
}
