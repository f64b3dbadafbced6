//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Account not found: {0}")]
    AccountNotFound(i64),

    #[error("No account for email: {0}")]
    AccountEmailNotFound(String),

    #[error("Member not found: {0}")]
    MemberNotFound(i64),

    #[error("Ministry not found: {0}")]
    MinistryNotFound(i64),

    #[error("Course not found: {0}")]
    CourseNotFound(i64),

    #[error("No enrollment of member {member_id} in course {course_id}")]
    EnrollmentNotFound { member_id: i64, course_id: i64 },

    #[error("Note not found: {0}")]
    NoteNotFound(i64),

    #[error("Role not found: {0}")]
    RoleNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Member {member_id} is already in ministry {ministry_id}")]
    AlreadyInMinistry { member_id: i64, ministry_id: i64 },

    #[error("Member {member_id} is already enrolled in course {course_id}")]
    AlreadyEnrolled { member_id: i64, course_id: i64 },

    #[error("Account {0} already has a role assigned")]
    RoleAlreadyAssigned(i64),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get a stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::AccountNotFound(_) | Self::AccountEmailNotFound(_) => "UNKNOWN_ACCOUNT",
            Self::MemberNotFound(_) => "UNKNOWN_MEMBER",
            Self::MinistryNotFound(_) => "UNKNOWN_MINISTRY",
            Self::CourseNotFound(_) => "UNKNOWN_COURSE",
            Self::EnrollmentNotFound { .. } => "UNKNOWN_ENROLLMENT",
            Self::NoteNotFound(_) => "UNKNOWN_NOTE",
            Self::RoleNotFound(_) => "UNKNOWN_ROLE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::AlreadyInMinistry { .. } => "ALREADY_IN_MINISTRY",
            Self::AlreadyEnrolled { .. } => "ALREADY_ENROLLED",
            Self::RoleAlreadyAssigned(_) => "ROLE_ALREADY_ASSIGNED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::AccountNotFound(_)
                | Self::AccountEmailNotFound(_)
                | Self::MemberNotFound(_)
                | Self::MinistryNotFound(_)
                | Self::CourseNotFound(_)
                | Self::EnrollmentNotFound { .. }
                | Self::NoteNotFound(_)
                | Self::RoleNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists
                | Self::AlreadyInMinistry { .. }
                | Self::AlreadyEnrolled { .. }
                | Self::RoleAlreadyAssigned(_)
        )
    }
}
