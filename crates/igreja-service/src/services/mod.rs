//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod association;
pub mod auth;
pub mod context;
pub mod course;
pub mod error;
pub mod member;
pub mod ministry;
pub mod note;

// Re-export all services for convenience
pub use association::{AssociationService, SyncReport};
pub use auth::AuthService;
pub use context::{CurrentSession, ServiceContext, ServiceContextBuilder};
pub use course::CourseService;
pub use error::{ServiceError, ServiceResult};
pub use member::MemberService;
pub use ministry::MinistryService;
pub use note::NoteService;
