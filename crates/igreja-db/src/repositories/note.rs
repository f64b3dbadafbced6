//! PostgreSQL implementation of NoteRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use igreja_core::entities::Note;
use igreja_core::error::DomainError;
use igreja_core::traits::{NoteRepository, RepoResult};

use crate::models::NoteModel;

use super::error::{map_db_error, map_fk_violation, note_not_found};

/// PostgreSQL implementation of NoteRepository
#[derive(Clone)]
pub struct PgNoteRepository {
    pool: PgPool,
}

impl PgNoteRepository {
    /// Create a new PgNoteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    #[instrument(skip(self, text))]
    async fn create(&self, member_id: i64, user_id: i64, text: &str) -> RepoResult<Note> {
        let model = sqlx::query_as::<_, NoteModel>(
            r"
            INSERT INTO notes (member_id, user_id, text)
            VALUES ($1, $2, $3)
            RETURNING id, member_id, user_id, text, date
            ",
        )
        .bind(member_id)
        .bind(user_id)
        .bind(text)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // The author is the authenticated account; a foreign key failure
            // points at the member
            map_fk_violation(e, || DomainError::MemberNotFound(member_id))
        })?;

        Ok(Note::from(model))
    }

    #[instrument(skip(self))]
    async fn find_by_member_and_author(
        &self,
        member_id: i64,
        user_id: i64,
    ) -> RepoResult<Vec<Note>> {
        let rows = sqlx::query_as::<_, NoteModel>(
            r"
            SELECT id, member_id, user_id, text, date
            FROM notes
            WHERE member_id = $1 AND user_id = $2
            ORDER BY date DESC
            ",
        )
        .bind(member_id)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Note::from).collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM notes WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(note_not_found(id));
        }

        Ok(())
    }
}
