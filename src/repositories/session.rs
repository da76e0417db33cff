//! SessionRepository - Repository per la gestione delle sessioni utente

use super::{Create, FindOne, SoftDeleteWhere, inserted_id};
use crate::dtos::{CreateSessionDTO, SessionCondition, SessionDeleteCriteria};
use crate::entities::Session;
use sqlx::{Error, MySql, MySqlPool, QueryBuilder};

// SESSION REPO
pub struct SessionRepository {
    connection_pool: MySqlPool,
}

impl SessionRepository {
    pub fn new(connection_pool: MySqlPool) -> SessionRepository {
        Self { connection_pool }
    }

    async fn read(&self, id: i32) -> Result<Option<Session>, Error> {
        self.find_one(&SessionCondition {
            id: Some(id),
            user_id: None,
        })
        .await
    }
}

impl Create<Session, CreateSessionDTO> for SessionRepository {
    async fn create(&self, data: &CreateSessionDTO) -> Result<Session, Error> {
        let result = sqlx::query("INSERT INTO session (user_id) VALUES (?)")
            .bind(data.user_id)
            .execute(&self.connection_pool)
            .await?;

        let new_id = inserted_id(result.last_insert_id())?;
        self.read(new_id).await?.ok_or(Error::RowNotFound)
    }
}

impl FindOne<Session, SessionCondition> for SessionRepository {
    async fn find_one(&self, condition: &SessionCondition) -> Result<Option<Session>, Error> {
        let mut query = QueryBuilder::<MySql>::new(
            "SELECT id, user_id, created_at, deleted_at FROM session WHERE deleted_at IS NULL",
        );
        if let Some(id) = condition.id {
            query.push(" AND id = ").push_bind(id);
        }
        if let Some(user_id) = condition.user_id {
            query.push(" AND user_id = ").push_bind(user_id);
        }
        query.push(" ORDER BY id LIMIT 1");

        let session = query
            .build_query_as::<Session>()
            .fetch_optional(&self.connection_pool)
            .await?;

        Ok(session)
    }
}

impl SoftDeleteWhere<SessionDeleteCriteria> for SessionRepository {
    async fn soft_delete_where(&self, criteria: &SessionDeleteCriteria) -> Result<u64, Error> {
        let mut query = QueryBuilder::<MySql>::new(
            "UPDATE session SET deleted_at = CURRENT_TIMESTAMP WHERE deleted_at IS NULL",
        );
        if let Some(id) = criteria.id {
            query.push(" AND id = ").push_bind(id);
        }
        if let Some(user_id) = criteria.user_id {
            query.push(" AND user_id = ").push_bind(user_id);
        }
        if let Some(exclude_id) = criteria.exclude_id {
            query.push(" AND id <> ").push_bind(exclude_id);
        }

        let result = query.build().execute(&self.connection_pool).await?;
        Ok(result.rows_affected())
    }
}
