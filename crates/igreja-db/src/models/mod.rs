//! Database models - SQLx-compatible structs for PostgreSQL tables

mod account;
mod course;
mod enrollment;
mod member;
mod ministry;
mod note;

pub use account::{AccountModel, AccountWithRoleModel};
pub use course::CourseModel;
pub use enrollment::EnrollmentModel;
pub use member::MemberModel;
pub use ministry::MinistryModel;
pub use note::NoteModel;
