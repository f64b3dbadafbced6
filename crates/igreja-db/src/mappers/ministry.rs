//! Ministry entity <-> model mapper

use igreja_core::entities::Ministry;

use crate::models::MinistryModel;

/// Convert MinistryModel to Ministry entity
impl From<MinistryModel> for Ministry {
    fn from(model: MinistryModel) -> Self {
        Ministry {
            id: model.id,
            name: model.name,
            leader_id: model.leader_id,
            co_leader_id: model.co_leader_id,
            is_active: model.is_active,
        }
    }
}
