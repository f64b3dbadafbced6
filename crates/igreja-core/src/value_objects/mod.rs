//! Value objects - immutable types that represent domain concepts

mod access;
mod enrollment_status;
mod member_profile;
mod role_name;

pub use access::Action;
pub use enrollment_status::EnrollmentStatus;
pub use member_profile::{LoveLanguage, MaritalStatus, PersonalityTrait};
pub use role_name::{ParseRoleError, RoleName};
