//! PostgreSQL implementation of EnrollmentRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use igreja_core::entities::Enrollment;
use igreja_core::error::DomainError;
use igreja_core::traits::{EnrollmentRepository, RepoResult};
use igreja_core::value_objects::EnrollmentStatus;

use crate::models::EnrollmentModel;

use super::error::{enrollment_not_found, map_constraint_violation, map_db_error};

/// PostgreSQL implementation of EnrollmentRepository
#[derive(Clone)]
pub struct PgEnrollmentRepository {
    pool: PgPool,
}

impl PgEnrollmentRepository {
    /// Create a new PgEnrollmentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EnrollmentRepository for PgEnrollmentRepository {
    #[instrument(skip(self))]
    async fn enroll(
        &self,
        member_id: i64,
        course_id: i64,
        enrolled_at: DateTime<Utc>,
    ) -> RepoResult<Enrollment> {
        let model = sqlx::query_as::<_, EnrollmentModel>(
            r"
            INSERT INTO membercourses (member_id, course_id, enrollment_date)
            VALUES ($1, $2, $3)
            RETURNING id, member_id, course_id, enrollment_date, status, completion_date
            ",
        )
        .bind(member_id)
        .bind(course_id)
        .bind(enrolled_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // The member side is verified by the caller before enrolling
            map_constraint_violation(
                e,
                || DomainError::AlreadyEnrolled {
                    member_id,
                    course_id,
                },
                || DomainError::CourseNotFound(course_id),
            )
        })?;

        Ok(Enrollment::from(model))
    }

    #[instrument(skip(self))]
    async fn remove(&self, member_id: i64, course_id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM membercourses WHERE member_id = $1 AND course_id = $2
            ",
        )
        .bind(member_id)
        .bind(course_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(enrollment_not_found(member_id, course_id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_member(&self, member_id: i64) -> RepoResult<Vec<Enrollment>> {
        let rows = sqlx::query_as::<_, EnrollmentModel>(
            r"
            SELECT id, member_id, course_id, enrollment_date, status, completion_date
            FROM membercourses
            WHERE member_id = $1
            ORDER BY course_id
            ",
        )
        .bind(member_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Enrollment::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_member_and_status(
        &self,
        member_id: i64,
        status: EnrollmentStatus,
    ) -> RepoResult<Vec<Enrollment>> {
        let rows = sqlx::query_as::<_, EnrollmentModel>(
            r"
            SELECT id, member_id, course_id, enrollment_date, status, completion_date
            FROM membercourses
            WHERE member_id = $1 AND status = $2
            ORDER BY course_id
            ",
        )
        .bind(member_id)
        .bind(status.as_db_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Enrollment::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_course(&self, course_id: i64) -> RepoResult<Vec<Enrollment>> {
        let rows = sqlx::query_as::<_, EnrollmentModel>(
            r"
            SELECT id, member_id, course_id, enrollment_date, status, completion_date
            FROM membercourses
            WHERE course_id = $1
            ORDER BY member_id
            ",
        )
        .bind(course_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Enrollment::from).collect())
    }

    #[instrument(skip(self))]
    async fn update_status(
        &self,
        member_id: i64,
        course_id: i64,
        status: EnrollmentStatus,
        completion_date: Option<DateTime<Utc>>,
    ) -> RepoResult<Enrollment> {
        let model = sqlx::query_as::<_, EnrollmentModel>(
            r"
            UPDATE membercourses
            SET status = $3, completion_date = $4
            WHERE member_id = $1 AND course_id = $2
            RETURNING id, member_id, course_id, enrollment_date, status, completion_date
            ",
        )
        .bind(member_id)
        .bind(course_id)
        .bind(status.as_db_str())
        .bind(completion_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match model {
            Some(model) => Ok(Enrollment::from(model)),
            None => Err(enrollment_not_found(member_id, course_id)),
        }
    }
}
