//! Identity entity - an authenticated account and its role

use serde::{Deserialize, Serialize};

use crate::value_objects::{Action, RoleName};

/// A role assignment as carried on an identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub role_name: RoleName,
}

impl Role {
    /// Build the catalog role for a given tier
    pub fn of(role_name: RoleName) -> Self {
        Self {
            id: role_name.id(),
            role_name,
        }
    }
}

/// An account as seen after authentication
///
/// This is the record the session slot persists between runs. The password
/// hash never travels on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: i64,
    pub email: String,
    /// At most one role per account; `None` for accounts created without one
    pub role: Option<Role>,
}

impl Identity {
    /// Create an identity without a role assignment
    pub fn new(id: i64, email: String) -> Self {
        Self {
            id,
            email,
            role: None,
        }
    }

    /// Create an identity carrying a role
    pub fn with_role(id: i64, email: String, role: Role) -> Self {
        Self {
            id,
            email,
            role: Some(role),
        }
    }

    /// The assigned role name, if any
    #[inline]
    pub fn role_name(&self) -> Option<RoleName> {
        self.role.as_ref().map(|r| r.role_name)
    }

    /// Check whether this identity may perform a gated action
    ///
    /// Roleless identities are denied everything gated.
    pub fn can(&self, action: Action) -> bool {
        match self.role_name() {
            Some(role) => action.allowed_roles().contains(&role),
            None => false,
        }
    }
}
