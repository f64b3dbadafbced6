//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in igreja-core.
//! Each repository handles database operations for a specific domain entity.

mod account;
mod course;
mod enrollment;
mod error;
mod member;
mod ministry;
mod note;

pub use account::PgAccountRepository;
pub use course::PgCourseRepository;
pub use enrollment::PgEnrollmentRepository;
pub use member::PgMemberRepository;
pub use ministry::PgMinistryRepository;
pub use note::PgNoteRepository;
