//! PostgreSQL implementation of MemberRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use igreja_core::entities::Member;
use igreja_core::traits::{MemberRepository, RepoResult};

use crate::mappers::{MemberInsert, MemberUpdate};
use crate::models::MemberModel;

use super::error::{map_db_error, member_not_found};

/// PostgreSQL implementation of MemberRepository
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    /// Create a new PgMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Member>> {
        let result = sqlx::query_as::<_, MemberModel>(
            r"
            SELECT id, name, date_of_birth, phone_number, address, rg, cpf, marital_status,
                   spouse_name, marriage_date, baptized, baptism_date, church_of_baptism,
                   love_language, personality_test, is_pastor, is_leader, is_co_leader,
                   is_active, created_at
            FROM members
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Member::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Member>> {
        let rows = sqlx::query_as::<_, MemberModel>(
            r"
            SELECT id, name, date_of_birth, phone_number, address, rg, cpf, marital_status,
                   spouse_name, marriage_date, baptized, baptism_date, church_of_baptism,
                   love_language, personality_test, is_pastor, is_leader, is_co_leader,
                   is_active, created_at
            FROM members
            ORDER BY name
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Member::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_eligible_leaders(&self) -> RepoResult<Vec<Member>> {
        let rows = sqlx::query_as::<_, MemberModel>(
            r"
            SELECT id, name, date_of_birth, phone_number, address, rg, cpf, marital_status,
                   spouse_name, marriage_date, baptized, baptism_date, church_of_baptism,
                   love_language, personality_test, is_pastor, is_leader, is_co_leader,
                   is_active, created_at
            FROM members
            WHERE is_active AND baptized
            ORDER BY name
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Member::from).collect())
    }

    #[instrument(skip(self, member))]
    async fn create(&self, member: &Member) -> RepoResult<Member> {
        let insert = MemberInsert::new(member);

        let model = sqlx::query_as::<_, MemberModel>(
            r"
            INSERT INTO members (name, date_of_birth, phone_number, address, rg, cpf,
                                 marital_status, spouse_name, marriage_date, baptized,
                                 baptism_date, church_of_baptism, love_language,
                                 personality_test, is_pastor, is_leader, is_co_leader,
                                 is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
            RETURNING id, name, date_of_birth, phone_number, address, rg, cpf, marital_status,
                      spouse_name, marriage_date, baptized, baptism_date, church_of_baptism,
                      love_language, personality_test, is_pastor, is_leader, is_co_leader,
                      is_active, created_at
            ",
        )
        .bind(insert.name)
        .bind(insert.date_of_birth)
        .bind(insert.phone_number)
        .bind(insert.address)
        .bind(insert.rg)
        .bind(insert.cpf)
        .bind(insert.marital_status)
        .bind(insert.spouse_name)
        .bind(insert.marriage_date)
        .bind(insert.baptized)
        .bind(insert.baptism_date)
        .bind(insert.church_of_baptism)
        .bind(insert.love_language)
        .bind(insert.personality_test)
        .bind(insert.is_pastor)
        .bind(insert.is_leader)
        .bind(insert.is_co_leader)
        .bind(insert.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Member::from(model))
    }

    #[instrument(skip(self, member))]
    async fn update(&self, member: &Member) -> RepoResult<Member> {
        let update = MemberUpdate::new(member);

        let model = sqlx::query_as::<_, MemberModel>(
            r"
            UPDATE members
            SET name = $2, date_of_birth = $3, phone_number = $4, address = $5, rg = $6,
                cpf = $7, marital_status = $8, spouse_name = $9, marriage_date = $10,
                baptized = $11, baptism_date = $12, church_of_baptism = $13,
                love_language = $14, personality_test = $15, is_pastor = $16,
                is_leader = $17, is_co_leader = $18, is_active = $19
            WHERE id = $1
            RETURNING id, name, date_of_birth, phone_number, address, rg, cpf, marital_status,
                      spouse_name, marriage_date, baptized, baptism_date, church_of_baptism,
                      love_language, personality_test, is_pastor, is_leader, is_co_leader,
                      is_active, created_at
            ",
        )
        .bind(update.id)
        .bind(update.values.name)
        .bind(update.values.date_of_birth)
        .bind(update.values.phone_number)
        .bind(update.values.address)
        .bind(update.values.rg)
        .bind(update.values.cpf)
        .bind(update.values.marital_status)
        .bind(update.values.spouse_name)
        .bind(update.values.marriage_date)
        .bind(update.values.baptized)
        .bind(update.values.baptism_date)
        .bind(update.values.church_of_baptism)
        .bind(update.values.love_language)
        .bind(update.values.personality_test)
        .bind(update.values.is_pastor)
        .bind(update.values.is_leader)
        .bind(update.values.is_co_leader)
        .bind(update.values.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match model {
            Some(model) => Ok(Member::from(model)),
            None => Err(member_not_found(member.id)),
        }
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM members WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(member_not_found(id));
        }

        Ok(())
    }
}
