//! UserRepository - Lookup degli utenti

use super::Read;
use crate::entities::User;
use sqlx::{Error, MySqlPool};

// USER REPO
pub struct UserRepository {
    connection_pool: MySqlPool,
}

impl UserRepository {
    pub fn new(connection_pool: MySqlPool) -> UserRepository {
        Self { connection_pool }
    }
}

impl Read<User, i32> for UserRepository {
    async fn read(&self, id: &i32) -> Result<Option<User>, Error> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, first_name, last_name, created_at, deleted_at FROM `user` \
             WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(user)
    }
}
