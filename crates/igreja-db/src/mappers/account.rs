//! Account entity <-> model mapper

use igreja_core::entities::{Identity, Role};
use igreja_core::value_objects::RoleName;

use crate::models::{AccountModel, AccountWithRoleModel};

/// Convert AccountModel to Identity entity
///
/// The plain users row has no role columns; accounts come out of this with
/// no assignment.
impl From<AccountModel> for Identity {
    fn from(model: AccountModel) -> Self {
        Identity::new(model.id, model.email)
    }
}

/// Convert AccountWithRoleModel to Identity entity
impl From<AccountWithRoleModel> for Identity {
    fn from(model: AccountWithRoleModel) -> Self {
        // A role name outside the catalog reads as no assignment
        let role = match (model.role_id, model.role_name) {
            (Some(id), Some(name)) => name
                .parse::<RoleName>()
                .ok()
                .map(|role_name| Role { id, role_name }),
            _ => None,
        };

        Identity {
            id: model.id,
            email: model.email,
            role,
        }
    }
}
