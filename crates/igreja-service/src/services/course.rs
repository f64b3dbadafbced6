//! Course read service

use igreja_core::DomainError;

use crate::dto::CourseResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Course read service
pub struct CourseService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CourseService<'a> {
    /// Create a new CourseService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fetch one course
    pub async fn get_course(&self, id: i64) -> ServiceResult<CourseResponse> {
        let course = self
            .ctx
            .course_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::CourseNotFound(id))?;

        Ok(CourseResponse::from(course))
    }

    /// List all courses ordered by name
    pub async fn list_courses(&self) -> ServiceResult<Vec<CourseResponse>> {
        let courses = self.ctx.course_repo().find_all().await?;
        Ok(courses.into_iter().map(CourseResponse::from).collect())
    }
}
