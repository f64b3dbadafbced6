//! Member management service

use tracing::{info, instrument};
use validator::Validate;

use igreja_core::entities::Member;
use igreja_core::DomainError;

use crate::dto::{MemberForm, MemberResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Member management service
pub struct MemberService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MemberService<'a> {
    /// Create a new MemberService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a member from the registration form
    #[instrument(skip(self, form), fields(name = %form.name))]
    pub async fn create_member(&self, form: MemberForm) -> ServiceResult<MemberResponse> {
        form.validate()?;

        let member = Member::from(form);
        // The length rule counts whitespace; the trimmed name is the one
        // that must be non-empty
        if member.name.is_empty() {
            return Err(ServiceError::validation("Name must not be blank"));
        }

        let created = self.ctx.member_repo().create(&member).await?;

        info!(member_id = created.id, "Member created");

        Ok(MemberResponse::from(created))
    }

    /// Fetch one member
    pub async fn get_member(&self, id: i64) -> ServiceResult<MemberResponse> {
        let member = self
            .ctx
            .member_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::MemberNotFound(id))?;

        Ok(MemberResponse::from(member))
    }

    /// List all members ordered by name
    pub async fn list_members(&self) -> ServiceResult<Vec<MemberResponse>> {
        let members = self.ctx.member_repo().find_all().await?;
        Ok(members.into_iter().map(MemberResponse::from).collect())
    }

    /// Replace a member's record with the edit form
    ///
    /// Full-row replace: every field takes the form's value. The creation
    /// timestamp is kept by the store.
    #[instrument(skip(self, form), fields(member_id = id))]
    pub async fn update_member(&self, id: i64, form: MemberForm) -> ServiceResult<MemberResponse> {
        form.validate()?;

        let mut member = Member::from(form);
        if member.name.is_empty() {
            return Err(ServiceError::validation("Name must not be blank"));
        }
        member.id = id;

        let updated = self.ctx.member_repo().update(&member).await?;

        info!(member_id = id, "Member updated");

        Ok(MemberResponse::from(updated))
    }

    /// Hard delete a member
    ///
    /// Ministry links, enrollments and notes cascade; ministries led by
    /// the member keep running with their leader reference nulled.
    #[instrument(skip(self), fields(member_id = id))]
    pub async fn delete_member(&self, id: i64) -> ServiceResult<()> {
        self.ctx.member_repo().delete(id).await?;

        info!(member_id = id, "Member deleted");

        Ok(())
    }

    /// Members offered in leader and co-leader choice lists
    pub async fn eligible_leaders(&self) -> ServiceResult<Vec<MemberResponse>> {
        let members = self.ctx.member_repo().find_eligible_leaders().await?;
        Ok(members.into_iter().map(MemberResponse::from).collect())
    }
}
