//! PostgreSQL implementation of MinistryRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use igreja_core::entities::Ministry;
use igreja_core::error::DomainError;
use igreja_core::traits::{MinistryRepository, RepoResult};

use crate::models::MinistryModel;

use super::error::{map_constraint_violation, map_db_error};

/// PostgreSQL implementation of MinistryRepository
#[derive(Clone)]
pub struct PgMinistryRepository {
    pool: PgPool,
}

impl PgMinistryRepository {
    /// Create a new PgMinistryRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MinistryRepository for PgMinistryRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Ministry>> {
        let result = sqlx::query_as::<_, MinistryModel>(
            r"
            SELECT id, name, leader_id, co_leader_id, is_active
            FROM ministry
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Ministry::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Ministry>> {
        let rows = sqlx::query_as::<_, MinistryModel>(
            r"
            SELECT id, name, leader_id, co_leader_id, is_active
            FROM ministry
            ORDER BY name
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Ministry::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_active(&self) -> RepoResult<Vec<Ministry>> {
        let rows = sqlx::query_as::<_, MinistryModel>(
            r"
            SELECT id, name, leader_id, co_leader_id, is_active
            FROM ministry
            WHERE is_active
            ORDER BY name
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Ministry::from).collect())
    }

    #[instrument(skip(self))]
    async fn link_member(&self, member_id: i64, ministry_id: i64) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO memberministries (member_id, ministry_id)
            VALUES ($1, $2)
            ",
        )
        .bind(member_id)
        .bind(ministry_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            // The member side is verified by the caller before linking, so a
            // foreign key failure points at the ministry
            map_constraint_violation(
                e,
                || DomainError::AlreadyInMinistry {
                    member_id,
                    ministry_id,
                },
                || DomainError::MinistryNotFound(ministry_id),
            )
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn unlink_member(&self, member_id: i64) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            DELETE FROM memberministries WHERE member_id = $1
            ",
        )
        .bind(member_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn ministry_ids_for_member(&self, member_id: i64) -> RepoResult<Vec<i64>> {
        let ids = sqlx::query_scalar::<_, i64>(
            r"
            SELECT ministry_id FROM memberministries
            WHERE member_id = $1
            ORDER BY ministry_id
            ",
        )
        .bind(member_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(ids)
    }
}
