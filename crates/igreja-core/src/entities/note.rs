//! Note entity - a pastoral note about a member

use chrono::{DateTime, Utc};

/// A note written by an account about a member
///
/// Notes are read scoped to the (member, author) pair; one pastor does not
/// see another's notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// Assigned by the store on insert
    pub id: i64,
    pub member_id: i64,
    /// The authoring account
    pub user_id: i64,
    pub text: String,
    pub date: DateTime<Utc>,
}

impl Note {
    /// Create a new note dated now
    pub fn new(member_id: i64, user_id: i64, text: String) -> Self {
        Self {
            id: 0,
            member_id,
            user_id,
            text,
            date: Utc::now(),
        }
    }
}
