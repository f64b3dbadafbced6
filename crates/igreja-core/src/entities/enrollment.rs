//! Enrollment entity - a member's participation in a course

use chrono::{DateTime, Utc};

use crate::value_objects::EnrollmentStatus;

/// One member's enrollment in one course
///
/// Invariant: `completion_date` is `Some` only when `status` is
/// `Completed`. The store backs this with a check constraint; in-process
/// mutation goes through [`Enrollment::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    /// Assigned by the store on insert
    pub id: i64,
    pub member_id: i64,
    pub course_id: i64,
    pub enrollment_date: DateTime<Utc>,
    pub status: EnrollmentStatus,
    pub completion_date: Option<DateTime<Utc>>,
}

impl Enrollment {
    /// New active enrollment, as the course sync inserts them
    pub fn new(member_id: i64, course_id: i64, enrolled_at: DateTime<Utc>) -> Self {
        Self {
            id: 0,
            member_id,
            course_id,
            enrollment_date: enrolled_at,
            status: EnrollmentStatus::Active,
            completion_date: None,
        }
    }

    /// Mark the course completed at the given time
    pub fn complete(&mut self, at: DateTime<Utc>) {
        self.status = EnrollmentStatus::Completed;
        self.completion_date = Some(at);
    }

    /// Reopen a completed enrollment
    pub fn reactivate(&mut self) {
        self.status = EnrollmentStatus::Active;
        self.completion_date = None;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == EnrollmentStatus::Active
    }

    /// Whether the status/completion-date pairing is legal
    pub fn is_consistent(&self) -> bool {
        self.completion_date.is_none() || self.status == EnrollmentStatus::Completed
    }
}
