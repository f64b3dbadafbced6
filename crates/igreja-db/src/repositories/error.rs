//! Error handling utilities for repositories

use igreja_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Check for foreign key violation and return appropriate error or fallback
pub fn map_fk_violation<F>(e: SqlxError, on_fk: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return on_fk();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique and foreign key violations on one statement
///
/// Link inserts can fail either way; the caller names both outcomes.
pub fn map_constraint_violation<U, K>(e: SqlxError, on_unique: U, on_fk: K) -> DomainError
where
    U: FnOnce() -> DomainError,
    K: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
        if db_err.is_foreign_key_violation() {
            return on_fk();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create an "account not found" error
pub fn account_not_found(id: i64) -> DomainError {
    DomainError::AccountNotFound(id)
}

/// Create a "member not found" error
pub fn member_not_found(id: i64) -> DomainError {
    DomainError::MemberNotFound(id)
}

/// Create an "enrollment not found" error
pub fn enrollment_not_found(member_id: i64, course_id: i64) -> DomainError {
    DomainError::EnrollmentNotFound {
        member_id,
        course_id,
    }
}

/// Create a "note not found" error
pub fn note_not_found(id: i64) -> DomainError {
    DomainError::NoteNotFound(id)
}
