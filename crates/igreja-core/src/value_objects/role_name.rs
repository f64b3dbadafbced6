//! Role catalog - the four access tiers accounts can hold

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Access tier of an account
///
/// A closed catalog: the store seeds exactly these four roles with ids 1-4.
/// Canonical store strings are the Portuguese names; parsing also accepts
/// the ASCII and English spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleName {
    #[serde(rename = "master")]
    Master,
    #[serde(rename = "pastor")]
    Pastor,
    #[serde(rename = "líder", alias = "lider", alias = "leader")]
    Leader,
    #[serde(rename = "tesoureiro", alias = "treasurer")]
    Treasurer,
}

/// Error for strings outside the role catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown role name: {0}")]
pub struct ParseRoleError(pub String);

impl RoleName {
    /// Canonical store string
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Master => "master",
            Self::Pastor => "pastor",
            Self::Leader => "líder",
            Self::Treasurer => "tesoureiro",
        }
    }

    /// Catalog id of the seeded role row
    #[inline]
    pub fn id(self) -> i64 {
        match self {
            Self::Master => 1,
            Self::Pastor => 2,
            Self::Leader => 3,
            Self::Treasurer => 4,
        }
    }

    /// Look a role up by its catalog id
    pub fn from_id(id: i64) -> Option<Self> {
        match id {
            1 => Some(Self::Master),
            2 => Some(Self::Pastor),
            3 => Some(Self::Leader),
            4 => Some(Self::Treasurer),
            _ => None,
        }
    }

    /// All roles in catalog order
    pub fn all() -> [Self; 4] {
        [Self::Master, Self::Pastor, Self::Leader, Self::Treasurer]
    }
}

impl FromStr for RoleName {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "master" => Ok(Self::Master),
            "pastor" => Ok(Self::Pastor),
            "líder" | "lider" | "leader" => Ok(Self::Leader),
            "tesoureiro" | "treasurer" => Ok(Self::Treasurer),
            _ => Err(ParseRoleError(s.to_string())),
        }
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
