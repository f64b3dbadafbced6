//! Association service - reconciles ministry links and course enrollments
//!
//! Both sync operations take the desired id set a form submitted and make
//! the stored links match it. Ministry sync wipes and re-inserts; course
//! sync diffs so that surviving enrollments keep their dates and status.
//! Per-id failures are collected into the report instead of aborting the
//! remaining work.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use tracing::{info, instrument, warn};

use igreja_core::value_objects::EnrollmentStatus;
use igreja_core::DomainError;

use crate::dto::EnrollmentResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Outcome of one sync run
///
/// `succeeded` holds the ids whose link/unlink or enroll/remove went
/// through; `failed` pairs each failed id with the error it hit. Ids a
/// sync never needed to touch appear in neither list.
#[derive(Debug, Default)]
pub struct SyncReport {
    pub succeeded: Vec<i64>,
    pub failed: Vec<(i64, DomainError)>,
}

impl SyncReport {
    /// Whether every sub-operation went through
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Association service
pub struct AssociationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AssociationService<'a> {
    /// Create a new AssociationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Make a member's ministry links equal the desired set
    ///
    /// Replace semantics: every existing link is deleted in one call, then
    /// one insert per desired id. The wipe runs even when the set did not
    /// change. A failed wipe aborts; a failed insert is recorded and the
    /// loop continues.
    #[instrument(skip(self, desired), fields(member_id = member_id))]
    pub async fn sync_member_ministries(
        &self,
        member_id: i64,
        desired: &[i64],
    ) -> ServiceResult<SyncReport> {
        // Link inserts blame a foreign key failure on the ministry, so the
        // member must be checked here first
        self.ctx
            .member_repo()
            .find_by_id(member_id)
            .await?
            .ok_or(DomainError::MemberNotFound(member_id))?;

        let desired: BTreeSet<i64> = desired.iter().copied().collect();

        let removed = self.ctx.ministry_repo().unlink_member(member_id).await?;

        let mut report = SyncReport::default();
        for ministry_id in desired {
            match self
                .ctx
                .ministry_repo()
                .link_member(member_id, ministry_id)
                .await
            {
                Ok(()) => report.succeeded.push(ministry_id),
                Err(e) => {
                    warn!(member_id, ministry_id, error = %e, "Ministry link failed");
                    report.failed.push((ministry_id, e));
                }
            }
        }

        info!(
            member_id,
            removed,
            linked = report.succeeded.len(),
            failed = report.failed.len(),
            "Ministry set synced"
        );

        Ok(report)
    }

    /// Make a member's course enrollments equal the desired set
    ///
    /// Diff semantics: enrollments outside the desired set are removed,
    /// missing ones are inserted fresh with status `active`, and rows in
    /// both sets are never touched, keeping their dates and status. A
    /// failed read of the current set aborts; per-pair failures are
    /// recorded and the loop continues.
    #[instrument(skip(self, desired), fields(member_id = member_id))]
    pub async fn sync_member_courses(
        &self,
        member_id: i64,
        desired: &[i64],
    ) -> ServiceResult<SyncReport> {
        self.ctx
            .member_repo()
            .find_by_id(member_id)
            .await?
            .ok_or(DomainError::MemberNotFound(member_id))?;

        let desired: BTreeSet<i64> = desired.iter().copied().collect();

        let current_rows = self.ctx.enrollment_repo().find_by_member(member_id).await?;
        let current: BTreeSet<i64> = current_rows.iter().map(|e| e.course_id).collect();

        let mut report = SyncReport::default();

        for &course_id in current.difference(&desired) {
            match self.ctx.enrollment_repo().remove(member_id, course_id).await {
                Ok(()) => report.succeeded.push(course_id),
                Err(e) => {
                    warn!(member_id, course_id, error = %e, "Enrollment removal failed");
                    report.failed.push((course_id, e));
                }
            }
        }

        let now = Utc::now();
        for &course_id in desired.difference(&current) {
            match self
                .ctx
                .enrollment_repo()
                .enroll(member_id, course_id, now)
                .await
            {
                Ok(_) => report.succeeded.push(course_id),
                Err(e) => {
                    warn!(member_id, course_id, error = %e, "Enrollment failed");
                    report.failed.push((course_id, e));
                }
            }
        }

        info!(
            member_id,
            changed = report.succeeded.len(),
            failed = report.failed.len(),
            "Course set synced"
        );

        Ok(report)
    }

    /// Update status and completion date of one enrollment
    #[instrument(skip(self), fields(member_id = member_id, course_id = course_id))]
    pub async fn update_enrollment_status(
        &self,
        member_id: i64,
        course_id: i64,
        status: EnrollmentStatus,
        completion_date: Option<DateTime<Utc>>,
    ) -> ServiceResult<EnrollmentResponse> {
        // A completion date belongs on completed rows only
        if completion_date.is_some() && status != EnrollmentStatus::Completed {
            return Err(ServiceError::validation(
                "A completion date requires completed status",
            ));
        }

        let enrollment = self
            .ctx
            .enrollment_repo()
            .update_status(member_id, course_id, status, completion_date)
            .await?;

        info!(member_id, course_id, status = %status, "Enrollment updated");

        Ok(EnrollmentResponse::from(enrollment))
    }

    /// Mark one enrollment completed at the given time
    pub async fn complete_course(
        &self,
        member_id: i64,
        course_id: i64,
        completed_at: DateTime<Utc>,
    ) -> ServiceResult<EnrollmentResponse> {
        self.update_enrollment_status(
            member_id,
            course_id,
            EnrollmentStatus::Completed,
            Some(completed_at),
        )
        .await
    }

    /// Ministry ids a member is linked into, ascending
    pub async fn member_ministry_ids(&self, member_id: i64) -> ServiceResult<Vec<i64>> {
        Ok(self
            .ctx
            .ministry_repo()
            .ministry_ids_for_member(member_id)
            .await?)
    }

    /// All enrollments of a member
    pub async fn member_enrollments(&self, member_id: i64) -> ServiceResult<Vec<EnrollmentResponse>> {
        let enrollments = self.ctx.enrollment_repo().find_by_member(member_id).await?;
        Ok(enrollments
            .into_iter()
            .map(EnrollmentResponse::from)
            .collect())
    }

    /// Enrollments of a member in one status
    pub async fn member_enrollments_with_status(
        &self,
        member_id: i64,
        status: EnrollmentStatus,
    ) -> ServiceResult<Vec<EnrollmentResponse>> {
        let enrollments = self
            .ctx
            .enrollment_repo()
            .find_by_member_and_status(member_id, status)
            .await?;
        Ok(enrollments
            .into_iter()
            .map(EnrollmentResponse::from)
            .collect())
    }

    /// Every enrollment in one course
    pub async fn course_roster(&self, course_id: i64) -> ServiceResult<Vec<EnrollmentResponse>> {
        let enrollments = self.ctx.enrollment_repo().find_by_course(course_id).await?;
        Ok(enrollments
            .into_iter()
            .map(EnrollmentResponse::from)
            .collect())
    }
}
