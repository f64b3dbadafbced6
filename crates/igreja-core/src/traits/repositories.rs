//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{Course, Enrollment, Identity, Member, Ministry, Note};
use crate::error::DomainError;
use crate::value_objects::EnrollmentStatus;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Account Repository
// ============================================================================

/// Partial update for an account row
///
/// `None` fields are left untouched. An all-`None` patch writes nothing.
#[derive(Debug, Clone, Default)]
pub struct AccountPatch {
    pub email: Option<String>,
    pub password_hash: Option<String>,
}

impl AccountPatch {
    /// Whether the patch would write anything
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password_hash.is_none()
    }
}

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by ID, role joined
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Identity>>;

    /// Find an account by email, role joined
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Identity>>;

    /// List all accounts with roles joined, ordered by id
    async fn list(&self) -> RepoResult<Vec<Identity>>;

    /// Create an account; the role is assigned separately
    async fn create(&self, email: &str, password_hash: &str) -> RepoResult<Identity>;

    /// Apply a partial update and return the updated account
    async fn update(&self, id: i64, patch: AccountPatch) -> RepoResult<Identity>;

    /// Hard delete an account; dependent rows cascade
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Get the password hash for authentication
    async fn password_hash(&self, id: i64) -> RepoResult<Option<String>>;

    /// Insert a role assignment; fails if the account already has one
    async fn insert_role_assignment(&self, user_id: i64, role_id: i64) -> RepoResult<()>;

    /// Insert or replace the role assignment, keyed on the account
    async fn upsert_role_assignment(&self, user_id: i64, role_id: i64) -> RepoResult<()>;
}

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Find a member by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Member>>;

    /// List all members ordered by name
    async fn find_all(&self) -> RepoResult<Vec<Member>>;

    /// List members eligible to lead a ministry (active and baptized)
    async fn find_eligible_leaders(&self) -> RepoResult<Vec<Member>>;

    /// Insert a new member; the id on `member` is ignored and assigned by
    /// the store
    async fn create(&self, member: &Member) -> RepoResult<Member>;

    /// Replace all fields of an existing member
    async fn update(&self, member: &Member) -> RepoResult<Member>;

    /// Hard delete a member; links, enrollments and notes cascade
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Ministry Repository
// ============================================================================

#[async_trait]
pub trait MinistryRepository: Send + Sync {
    /// Find a ministry by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Ministry>>;

    /// List all ministries ordered by name
    async fn find_all(&self) -> RepoResult<Vec<Ministry>>;

    /// List active ministries only
    async fn find_active(&self) -> RepoResult<Vec<Ministry>>;

    /// Link a member into a ministry
    async fn link_member(&self, member_id: i64, ministry_id: i64) -> RepoResult<()>;

    /// Remove every ministry link of a member, returning how many rows went
    async fn unlink_member(&self, member_id: i64) -> RepoResult<u64>;

    /// Ministry ids a member is linked into
    async fn ministry_ids_for_member(&self, member_id: i64) -> RepoResult<Vec<i64>>;
}

// ============================================================================
// Course Repository
// ============================================================================

#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Find a course by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Course>>;

    /// List all courses ordered by name
    async fn find_all(&self) -> RepoResult<Vec<Course>>;
}

// ============================================================================
// Enrollment Repository
// ============================================================================

#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Enroll a member into a course with status `active`
    async fn enroll(
        &self,
        member_id: i64,
        course_id: i64,
        enrolled_at: DateTime<Utc>,
    ) -> RepoResult<Enrollment>;

    /// Remove one member/course enrollment
    async fn remove(&self, member_id: i64, course_id: i64) -> RepoResult<()>;

    /// All enrollments of a member
    async fn find_by_member(&self, member_id: i64) -> RepoResult<Vec<Enrollment>>;

    /// Enrollments of a member filtered by status
    async fn find_by_member_and_status(
        &self,
        member_id: i64,
        status: EnrollmentStatus,
    ) -> RepoResult<Vec<Enrollment>>;

    /// All enrollments in a course (the roster)
    async fn find_by_course(&self, course_id: i64) -> RepoResult<Vec<Enrollment>>;

    /// Update status and completion date of one enrollment
    async fn update_status(
        &self,
        member_id: i64,
        course_id: i64,
        status: EnrollmentStatus,
        completion_date: Option<DateTime<Utc>>,
    ) -> RepoResult<Enrollment>;
}

// ============================================================================
// Note Repository
// ============================================================================

#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Create a note dated now by the store
    async fn create(&self, member_id: i64, user_id: i64, text: &str) -> RepoResult<Note>;

    /// Notes about a member written by one author, newest first
    async fn find_by_member_and_author(
        &self,
        member_id: i64,
        user_id: i64,
    ) -> RepoResult<Vec<Note>>;

    /// Delete a note
    async fn delete(&self, id: i64) -> RepoResult<()>;
}
