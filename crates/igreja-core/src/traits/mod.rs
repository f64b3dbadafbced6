//! Ports - traits the infrastructure layer implements

mod repositories;
mod session;

pub use repositories::{
    AccountPatch, AccountRepository, CourseRepository, EnrollmentRepository, MemberRepository,
    MinistryRepository, NoteRepository, RepoResult,
};
pub use session::{SessionStore, SessionStoreError};
