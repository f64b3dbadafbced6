//! Ministry read service
//!
//! Ministries themselves are simple rows; what this service adds is the
//! leader and co-leader names resolved through the member repository.

use igreja_core::entities::Ministry;
use igreja_core::DomainError;

use crate::dto::{MinistryResponse, MinistryWithLeaders};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Ministry read service
pub struct MinistryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MinistryService<'a> {
    /// Create a new MinistryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fetch one ministry with leader names resolved
    pub async fn get_ministry(&self, id: i64) -> ServiceResult<MinistryResponse> {
        let ministry = self
            .ctx
            .ministry_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::MinistryNotFound(id))?;

        self.resolve(ministry).await
    }

    /// List all ministries with leader names resolved, ordered by name
    pub async fn list_ministries(&self) -> ServiceResult<Vec<MinistryResponse>> {
        let ministries = self.ctx.ministry_repo().find_all().await?;

        let mut responses = Vec::with_capacity(ministries.len());
        for ministry in ministries {
            responses.push(self.resolve(ministry).await?);
        }

        Ok(responses)
    }

    /// Active ministries, the set offered when editing a member's links
    pub async fn list_active_ministries(&self) -> ServiceResult<Vec<MinistryResponse>> {
        let ministries = self.ctx.ministry_repo().find_active().await?;
        Ok(ministries.into_iter().map(MinistryResponse::from).collect())
    }

    /// Resolve leader references to names
    ///
    /// A reference to a member that no longer exists reads as no leader.
    async fn resolve(&self, ministry: Ministry) -> ServiceResult<MinistryResponse> {
        let leader = match ministry.leader_id {
            Some(id) => self.ctx.member_repo().find_by_id(id).await?,
            None => None,
        };
        let co_leader = match ministry.co_leader_id {
            Some(id) => self.ctx.member_repo().find_by_id(id).await?,
            None => None,
        };

        Ok(MinistryResponse::from(MinistryWithLeaders {
            ministry,
            leader,
            co_leader,
        }))
    }
}
