//! Course entity <-> model mapper

use igreja_core::entities::Course;

use crate::models::CourseModel;

/// Convert CourseModel to Course entity
impl From<CourseModel> for Course {
    fn from(model: CourseModel) -> Self {
        Course {
            id: model.id,
            name: model.name,
            active: model.active,
        }
    }
}
