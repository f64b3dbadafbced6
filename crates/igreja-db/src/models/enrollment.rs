//! Enrollment database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for membercourses table
#[derive(Debug, Clone, FromRow)]
pub struct EnrollmentModel {
    pub id: i64,
    pub member_id: i64,
    pub course_id: i64,
    pub enrollment_date: DateTime<Utc>,
    pub status: String,
    pub completion_date: Option<DateTime<Utc>>,
}
