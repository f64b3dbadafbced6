//! Member database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for members table
///
/// Tag columns (`love_language`, `personality_test`) come back as raw
/// TEXT[] tokens; the mapper decodes them.
#[derive(Debug, Clone, FromRow)]
pub struct MemberModel {
    pub id: i64,
    pub name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub rg: Option<String>,
    pub cpf: Option<String>,
    pub marital_status: String,
    pub spouse_name: Option<String>,
    pub marriage_date: Option<NaiveDate>,
    pub baptized: bool,
    pub baptism_date: Option<NaiveDate>,
    pub church_of_baptism: Option<String>,
    pub love_language: Vec<String>,
    pub personality_test: Vec<String>,
    pub is_pastor: bool,
    pub is_leader: bool,
    pub is_co_leader: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
