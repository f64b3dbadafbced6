//! Request DTOs for service operations
//!
//! All request DTOs implement `Deserialize` and, where fields carry rules,
//! `Validate`. Services validate before touching storage.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use igreja_core::value_objects::{LoveLanguage, MaritalStatus, PersonalityTrait};

// ============================================================================
// Auth Requests
// ============================================================================

/// Sign-in request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

/// Account creation request
///
/// Accounts are created by an administrator; the optional role is assigned
/// right after the account row lands.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAccountRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,

    /// Role to assign at creation; `None` leaves the account roleless
    #[serde(default)]
    pub role_id: Option<i64>,
}

/// Account update request; `None` fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateAccountRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: Option<String>,

    /// New role; replaces any existing assignment
    #[serde(default)]
    pub role_id: Option<i64>,
}

// ============================================================================
// Member Requests
// ============================================================================

/// Member form shared by create and update
///
/// Only the name is required; the edit screen fills the rest in over time,
/// so everything else defaults.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MemberForm {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,

    #[serde(default)]
    #[validate(length(max = 30, message = "Phone number must be at most 30 characters"))]
    pub phone_number: Option<String>,

    #[serde(default)]
    #[validate(length(max = 300, message = "Address must be at most 300 characters"))]
    pub address: Option<String>,

    #[serde(default)]
    #[validate(length(max = 20, message = "RG must be at most 20 characters"))]
    pub rg: Option<String>,

    #[serde(default)]
    #[validate(length(max = 20, message = "CPF must be at most 20 characters"))]
    pub cpf: Option<String>,

    #[serde(default)]
    pub marital_status: MaritalStatus,

    #[serde(default)]
    #[validate(length(max = 200, message = "Spouse name must be at most 200 characters"))]
    pub spouse_name: Option<String>,

    #[serde(default)]
    pub marriage_date: Option<NaiveDate>,

    #[serde(default)]
    pub baptized: bool,

    #[serde(default)]
    pub baptism_date: Option<NaiveDate>,

    #[serde(default)]
    #[validate(length(max = 200, message = "Church name must be at most 200 characters"))]
    pub church_of_baptism: Option<String>,

    #[serde(default)]
    pub love_language: Vec<LoveLanguage>,

    #[serde(default)]
    pub personality_test: Vec<PersonalityTrait>,

    #[serde(default)]
    pub is_pastor: bool,

    #[serde(default)]
    pub is_leader: bool,

    #[serde(default)]
    pub is_co_leader: bool,

    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

// ============================================================================
// Note Requests
// ============================================================================

/// Add a note about a member
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateNoteRequest {
    pub member_id: i64,

    #[validate(length(min = 1, max = 2000, message = "Note text must be 1-2000 characters"))]
    pub text: String,
}
