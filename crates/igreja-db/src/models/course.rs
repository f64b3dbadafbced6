//! Course database model

use sqlx::FromRow;

/// Database model for courses table
#[derive(Debug, Clone, FromRow)]
pub struct CourseModel {
    pub id: i64,
    pub name: String,
    pub active: bool,
}
