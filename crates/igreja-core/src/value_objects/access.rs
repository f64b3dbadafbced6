//! Gated actions and the static role table behind them
//!
//! Policy is a fixed compile-time table; nothing here touches storage.

use crate::value_objects::RoleName;

/// Operations subject to a role check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Write a pastoral note about a member
    AddNote,
}

impl Action {
    /// Roles allowed to perform this action
    pub fn allowed_roles(self) -> &'static [RoleName] {
        match self {
            Self::AddNote => &[RoleName::Master, RoleName::Pastor],
        }
    }

    /// Stable name used in permission-denied messages
    pub fn name(self) -> &'static str {
        match self {
            Self::AddNote => "add_note",
        }
    }
}
