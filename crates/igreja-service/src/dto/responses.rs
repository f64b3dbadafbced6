//! Response DTOs returned by service operations

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use igreja_core::value_objects::{
    EnrollmentStatus, LoveLanguage, MaritalStatus, PersonalityTrait, RoleName,
};

// ============================================================================
// Auth Responses
// ============================================================================

/// A role assignment as presented to callers
#[derive(Debug, Clone, Serialize)]
pub struct RoleResponse {
    pub id: i64,
    pub name: RoleName,
}

/// Account response
#[derive(Debug, Clone, Serialize)]
pub struct AccountResponse {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<RoleResponse>,
}

// ============================================================================
// Member Responses
// ============================================================================

/// Full member record
#[derive(Debug, Clone, Serialize)]
pub struct MemberResponse {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    pub marital_status: MaritalStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spouse_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marriage_date: Option<NaiveDate>,
    pub baptized: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baptism_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub church_of_baptism: Option<String>,
    pub love_language: Vec<LoveLanguage>,
    pub personality_test: Vec<PersonalityTrait>,
    pub is_pastor: bool,
    pub is_leader: bool,
    pub is_co_leader: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Ministry Responses
// ============================================================================

/// Ministry record, optionally carrying resolved leader names
#[derive(Debug, Clone, Serialize)]
pub struct MinistryResponse {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leader_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leader_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub co_leader_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub co_leader_name: Option<String>,
    pub is_active: bool,
}

// ============================================================================
// Course Responses
// ============================================================================

/// Course record
#[derive(Debug, Clone, Serialize)]
pub struct CourseResponse {
    pub id: i64,
    pub name: String,
    pub active: bool,
}

/// One member's enrollment in one course
#[derive(Debug, Clone, Serialize)]
pub struct EnrollmentResponse {
    pub id: i64,
    pub member_id: i64,
    pub course_id: i64,
    pub enrollment_date: DateTime<Utc>,
    pub status: EnrollmentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<DateTime<Utc>>,
}

// ============================================================================
// Note Responses
// ============================================================================

/// A pastoral note as returned to its author
#[derive(Debug, Clone, Serialize)]
pub struct NoteResponse {
    pub id: i64,
    pub member_id: i64,
    pub user_id: i64,
    pub text: String,
    pub date: DateTime<Utc>,
}
