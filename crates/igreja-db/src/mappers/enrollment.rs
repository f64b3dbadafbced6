//! Enrollment entity <-> model mapper

use igreja_core::entities::Enrollment;
use igreja_core::value_objects::EnrollmentStatus;

use crate::models::EnrollmentModel;

/// Convert EnrollmentModel to Enrollment entity
///
/// An unrecognized status token reads as `active`.
impl From<EnrollmentModel> for Enrollment {
    fn from(model: EnrollmentModel) -> Self {
        Enrollment {
            id: model.id,
            member_id: model.member_id,
            course_id: model.course_id,
            enrollment_date: model.enrollment_date,
            status: EnrollmentStatus::from_db_str(&model.status),
            completion_date: model.completion_date,
        }
    }
}
