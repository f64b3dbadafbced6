//! PostgreSQL implementation of AccountRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use igreja_core::entities::Identity;
use igreja_core::error::DomainError;
use igreja_core::traits::{AccountPatch, AccountRepository, RepoResult};

use crate::models::{AccountModel, AccountWithRoleModel};

use super::error::{
    account_not_found, map_constraint_violation, map_db_error, map_fk_violation,
    map_unique_violation,
};

/// PostgreSQL implementation of AccountRepository
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    /// Create a new PgAccountRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Identity>> {
        let result = sqlx::query_as::<_, AccountWithRoleModel>(
            r"
            SELECT u.id, u.email, ur.role_id, r.role_name
            FROM users u
            LEFT JOIN user_roles ur ON ur.user_id = u.id
            LEFT JOIN roles r ON r.id = ur.role_id
            WHERE u.id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Identity::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Identity>> {
        let result = sqlx::query_as::<_, AccountWithRoleModel>(
            r"
            SELECT u.id, u.email, ur.role_id, r.role_name
            FROM users u
            LEFT JOIN user_roles ur ON ur.user_id = u.id
            LEFT JOIN roles r ON r.id = ur.role_id
            WHERE u.email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Identity::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Identity>> {
        let rows = sqlx::query_as::<_, AccountWithRoleModel>(
            r"
            SELECT u.id, u.email, ur.role_id, r.role_name
            FROM users u
            LEFT JOIN user_roles ur ON ur.user_id = u.id
            LEFT JOIN roles r ON r.id = ur.role_id
            ORDER BY u.id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Identity::from).collect())
    }

    #[instrument(skip(self, password_hash))]
    async fn create(&self, email: &str, password_hash: &str) -> RepoResult<Identity> {
        let model = sqlx::query_as::<_, AccountModel>(
            r"
            INSERT INTO users (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, email, password_hash, created_at
            ",
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        Ok(Identity::from(model))
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: i64, patch: AccountPatch) -> RepoResult<Identity> {
        if !patch.is_empty() {
            let result = sqlx::query(
                r"
                UPDATE users
                SET email = COALESCE($2, email),
                    password_hash = COALESCE($3, password_hash)
                WHERE id = $1
                ",
            )
            .bind(id)
            .bind(patch.email)
            .bind(patch.password_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

            if result.rows_affected() == 0 {
                return Err(account_not_found(id));
            }
        }

        // Re-fetch so the caller gets the role joined in
        self.find_by_id(id)
            .await?
            .ok_or_else(|| account_not_found(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM users WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(account_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn password_hash(&self, id: i64) -> RepoResult<Option<String>> {
        let result = sqlx::query_scalar::<_, String>(
            r"
            SELECT password_hash FROM users WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn insert_role_assignment(&self, user_id: i64, role_id: i64) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO user_roles (user_id, role_id)
            VALUES ($1, $2)
            ",
        )
        .bind(user_id)
        .bind(role_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_constraint_violation(
                e,
                || DomainError::RoleAlreadyAssigned(user_id),
                || DomainError::RoleNotFound(role_id),
            )
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn upsert_role_assignment(&self, user_id: i64, role_id: i64) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO user_roles (user_id, role_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id) DO UPDATE SET role_id = EXCLUDED.role_id
            ",
        )
        .bind(user_id)
        .bind(role_id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_fk_violation(e, || DomainError::RoleNotFound(role_id)))?;

        Ok(())
    }
}
