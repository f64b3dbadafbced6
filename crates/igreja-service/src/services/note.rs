//! Note service - role-gated pastoral notes
//!
//! Note writes go through the role gate; reads are scoped to the
//! (member, author) pair so one pastor never sees another's notes.

use tracing::{info, instrument, warn};
use validator::Validate;

use igreja_core::entities::Identity;
use igreja_core::value_objects::Action;

use crate::dto::{CreateNoteRequest, NoteResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Note service
pub struct NoteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NoteService<'a> {
    /// Create a new NoteService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Write a note about a member
    ///
    /// Denied authors get a permission error and nothing is written.
    #[instrument(
        skip(self, author, request),
        fields(author_id = author.id, member_id = request.member_id)
    )]
    pub async fn add_note(
        &self,
        author: &Identity,
        request: CreateNoteRequest,
    ) -> ServiceResult<NoteResponse> {
        request.validate()?;

        if !author.can(Action::AddNote) {
            warn!(author_id = author.id, role = ?author.role_name(), "Note write denied");
            return Err(ServiceError::permission_denied(Action::AddNote.name()));
        }

        let note = self
            .ctx
            .note_repo()
            .create(request.member_id, author.id, &request.text)
            .await?;

        info!(note_id = note.id, "Note added");

        Ok(NoteResponse::from(note))
    }

    /// Notes about a member written by one author, newest first
    pub async fn member_notes(
        &self,
        member_id: i64,
        author_id: i64,
    ) -> ServiceResult<Vec<NoteResponse>> {
        let notes = self
            .ctx
            .note_repo()
            .find_by_member_and_author(member_id, author_id)
            .await?;

        Ok(notes.into_iter().map(NoteResponse::from).collect())
    }

    /// Delete a note
    #[instrument(skip(self), fields(note_id = id))]
    pub async fn delete_note(&self, id: i64) -> ServiceResult<()> {
        self.ctx.note_repo().delete(id).await?;

        info!(note_id = id, "Note deleted");

        Ok(())
    }
}
