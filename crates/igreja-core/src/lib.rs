//! # igreja-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! session-store port. This crate has zero dependencies on infrastructure
//! (database, filesystem, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Course, Enrollment, Identity, Member, Ministry, Note, Role};
pub use error::DomainError;
pub use traits::{
    AccountPatch, AccountRepository, CourseRepository, EnrollmentRepository, MemberRepository,
    MinistryRepository, NoteRepository, RepoResult, SessionStore, SessionStoreError,
};
pub use value_objects::{
    Action, EnrollmentStatus, LoveLanguage, MaritalStatus, ParseRoleError, PersonalityTrait,
    RoleName,
};
