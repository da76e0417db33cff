//! OrganizationRepository - Lookup delle organizzazioni

use super::Read;
use crate::entities::Organization;
use sqlx::{Error, MySqlPool};

// ORGANIZATION REPO
pub struct OrganizationRepository {
    connection_pool: MySqlPool,
}

impl OrganizationRepository {
    pub fn new(connection_pool: MySqlPool) -> OrganizationRepository {
        Self { connection_pool }
    }
}

impl Read<Organization, i32> for OrganizationRepository {
    async fn read(&self, id: &i32) -> Result<Option<Organization>, Error> {
        let organization = sqlx::query_as::<_, Organization>(
            "SELECT id, name, created_at, deleted_at FROM organization WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(organization)
    }
}
