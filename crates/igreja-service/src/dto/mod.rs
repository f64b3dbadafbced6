//! Data transfer objects for service requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for service inputs
//! - Response DTOs for serializing service outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CreateAccountRequest, CreateNoteRequest, MemberForm, SignInRequest, UpdateAccountRequest,
};

// Re-export commonly used response types
pub use responses::{
    AccountResponse, CourseResponse, EnrollmentResponse, MemberResponse, MinistryResponse,
    NoteResponse, RoleResponse,
};

// Re-export mapper helper structs
pub use mappers::MinistryWithLeaders;
