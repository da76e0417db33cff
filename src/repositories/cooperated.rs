//! CooperatedRepository - Repository per la gestione dei cooperati

use super::{Create, CreateMany, FindOne, Paginate, Read, SoftDelete, Update, inserted_id};
use crate::dtos::{CooperatedCondition, NewCooperated, UpdateCooperatedDTO};
use crate::entities::Cooperated;
use sqlx::{Error, MySql, MySqlPool, QueryBuilder};
use tracing::{debug, error, warn};

const SELECT_COOPERATED: &str = "SELECT id, first_name, last_name, email, phone, document, \
     organization_id, created_at, updated_at, deleted_at FROM cooperated";

// COOPERATED REPO
pub struct CooperatedRepository {
    connection_pool: MySqlPool,
}

impl CooperatedRepository {
    pub fn new(connection_pool: MySqlPool) -> CooperatedRepository {
        Self { connection_pool }
    }

    async fn insert_one<'e, E>(executor: E, data: &NewCooperated) -> Result<i32, Error>
    where
        E: sqlx::Executor<'e, Database = MySql>,
    {
        let result = sqlx::query(
            "INSERT INTO cooperated (first_name, last_name, email, phone, document, organization_id) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.document)
        .bind(data.organization_id)
        .execute(executor)
        .await?;

        inserted_id(result.last_insert_id())
    }
}

impl Create<Cooperated, NewCooperated> for CooperatedRepository {
    async fn create(&self, data: &NewCooperated) -> Result<Cooperated, Error> {
        let new_id = Self::insert_one(&self.connection_pool, data).await?;

        // rilettura per avere i timestamp assegnati dal DB
        self.read(&new_id).await?.ok_or(Error::RowNotFound)
    }
}

impl CreateMany<NewCooperated> for CooperatedRepository {
    async fn create_many(&self, data: &[NewCooperated]) -> Result<u64, Error> {
        let mut tx = self.connection_pool.begin().await?;

        for (index, row) in data.iter().enumerate() {
            if let Err(err) = Self::insert_one(&mut *tx, row).await {
                warn!("Bulk insert failed at row {}, rolling back: {}", index, err);
                if let Err(rollback_err) = tx.rollback().await {
                    error!("Rollback failed: {}", rollback_err);
                }
                return Err(err);
            }
        }

        tx.commit().await?;
        debug!("Committed {} cooperated rows", data.len());
        Ok(data.len() as u64)
    }
}

impl Read<Cooperated, i32> for CooperatedRepository {
    async fn read(&self, id: &i32) -> Result<Option<Cooperated>, Error> {
        let cooperated = sqlx::query_as::<_, Cooperated>(&format!(
            "{SELECT_COOPERATED} WHERE id = ? AND deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(cooperated)
    }
}

impl FindOne<Cooperated, CooperatedCondition> for CooperatedRepository {
    async fn find_one(&self, condition: &CooperatedCondition) -> Result<Option<Cooperated>, Error> {
        let mut query = QueryBuilder::<MySql>::new(SELECT_COOPERATED);
        query.push(" WHERE deleted_at IS NULL");

        if let Some(id) = condition.id {
            query.push(" AND id = ").push_bind(id);
        }
        if let Some(document) = &condition.document {
            query.push(" AND document = ").push_bind(document);
        }
        if let Some(email) = &condition.email {
            query.push(" AND email = ").push_bind(email);
        }
        if let Some(organization_id) = condition.organization_id {
            query.push(" AND organization_id = ").push_bind(organization_id);
        }
        query.push(" ORDER BY id LIMIT 1");

        let cooperated = query
            .build_query_as::<Cooperated>()
            .fetch_optional(&self.connection_pool)
            .await?;

        Ok(cooperated)
    }
}

impl Paginate<Cooperated> for CooperatedRepository {
    async fn find_page(&self, offset: u64, limit: u64) -> Result<Vec<Cooperated>, Error> {
        let page = sqlx::query_as::<_, Cooperated>(&format!(
            "{SELECT_COOPERATED} WHERE deleted_at IS NULL ORDER BY id LIMIT ? OFFSET ?"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(page)
    }
}

impl Update<Cooperated, UpdateCooperatedDTO, i32> for CooperatedRepository {
    async fn update(&self, id: &i32, data: &UpdateCooperatedDTO) -> Result<Cooperated, Error> {
        // First, get the current row to ensure it exists
        let current = self.read(id).await?.ok_or(Error::RowNotFound)?;

        if data.is_empty() {
            return Ok(current);
        }

        let mut query = QueryBuilder::<MySql>::new("UPDATE cooperated SET ");
        {
            let mut fields = query.separated(", ");
            if let Some(first_name) = &data.first_name {
                fields.push("first_name = ").push_bind_unseparated(first_name);
            }
            if let Some(last_name) = &data.last_name {
                fields.push("last_name = ").push_bind_unseparated(last_name);
            }
            if let Some(email) = &data.email {
                fields.push("email = ").push_bind_unseparated(email);
            }
            if let Some(phone) = &data.phone {
                fields.push("phone = ").push_bind_unseparated(phone);
            }
            if let Some(document) = &data.document {
                fields.push("document = ").push_bind_unseparated(document);
            }
            if let Some(organization_id) = data.organization_id {
                fields
                    .push("organization_id = ")
                    .push_bind_unseparated(organization_id);
            }
        }
        query
            .push(" WHERE id = ")
            .push_bind(*id)
            .push(" AND deleted_at IS NULL");

        query.build().execute(&self.connection_pool).await?;

        // Fetch and return the updated row
        self.read(id).await?.ok_or(Error::RowNotFound)
    }
}

impl SoftDelete<i32> for CooperatedRepository {
    async fn soft_delete(&self, id: &i32) -> Result<(), Error> {
        sqlx::query(
            "UPDATE cooperated SET deleted_at = CURRENT_TIMESTAMP WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.connection_pool)
        .await?;

        Ok(())
    }
}
