//! Entity to model mappers
//!
//! This module provides conversions between domain entities (igreja-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert`/`*Update` structs: Prepare entity data for database operations

mod account;
mod course;
mod enrollment;
mod member;
mod ministry;
mod note;

pub use member::{MemberInsert, MemberUpdate};
