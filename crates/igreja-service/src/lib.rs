//! # igreja-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AssociationService, AuthService, CourseService, CurrentSession, MemberService,
    MinistryService, NoteService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, SyncReport,
};
