//! Common repository traits
//!
//! This module defines generic interfaces for database operations. Services are
//! generic over these traits, so the MySQL repositories can be swapped for any
//! other implementation (the integration tests use in-memory ones).
//!
//! Every read skips soft-deleted rows.

/// Trait for creating new entities in the database
///
/// # Type Parameters
/// * `Entity` - Type of the returned entity (with ID assigned by the database)
/// * `CreateDTO` - DTO for creation (without ID, will be automatically generated)
pub trait Create<Entity, CreateDTO> {
    /// Creates a new entity in the database
    ///
    /// # Returns
    /// * `Ok(Entity)` - Created entity with ID assigned by the database
    /// * `Err(sqlx::Error)` - Error during insertion
    async fn create(&self, data: &CreateDTO) -> Result<Entity, sqlx::Error>;
}

/// Trait for inserting a batch of entities atomically
pub trait CreateMany<CreateDTO> {
    /// Inserts every row inside a single transaction.
    ///
    /// Either all rows are committed or none is: on the first failure the
    /// transaction is rolled back and the error is returned.
    ///
    /// # Returns
    /// * `Ok(u64)` - Number of inserted rows
    /// * `Err(sqlx::Error)` - Error that caused the rollback
    async fn create_many(&self, data: &[CreateDTO]) -> Result<u64, sqlx::Error>;
}

/// Trait for reading a single entity by primary key
///
/// # Type Parameters
/// * `Entity` - Type of the entity to read
/// * `Id` - Type of the primary key (e.g. `i32`)
pub trait Read<Entity, Id> {
    /// Reads an entity from the database by its primary key
    ///
    /// # Returns
    /// * `Ok(Some(Entity))` - Entity found
    /// * `Ok(None)` - No live entity with that ID
    /// * `Err(sqlx::Error)` - Error during reading
    async fn read(&self, id: &Id) -> Result<Option<Entity>, sqlx::Error>;
}

/// Trait for reading the first entity matching a condition
///
/// # Type Parameters
/// * `Condition` - Struct of optional fields, combined with AND
pub trait FindOne<Entity, Condition> {
    async fn find_one(&self, condition: &Condition) -> Result<Option<Entity>, sqlx::Error>;
}

/// Trait for reading a window of entities ordered by primary key
pub trait Paginate<Entity> {
    /// # Arguments
    /// * `offset` - Number of rows to skip
    /// * `limit` - Maximum number of rows to return
    async fn find_page(&self, offset: u64, limit: u64) -> Result<Vec<Entity>, sqlx::Error>;
}

/// Trait for updating existing entities
///
/// # Type Parameters
/// * `Entity` - Type of the updated entity
/// * `UpdateDTO` - DTO for updating (optional fields for partial updates)
/// * `Id` - Type of the primary key
pub trait Update<Entity, UpdateDTO, Id> {
    /// Updates an existing entity in the database
    ///
    /// # Returns
    /// * `Ok(Entity)` - Updated entity
    /// * `Err(sqlx::Error::RowNotFound)` - No live entity with that ID
    async fn update(&self, id: &Id, data: &UpdateDTO) -> Result<Entity, sqlx::Error>;
}

/// Trait for soft-deleting entities by primary key
pub trait SoftDelete<Id> {
    /// Stamps `deleted_at` on the entity. Missing or already deleted rows are
    /// left untouched and are not an error.
    async fn soft_delete(&self, id: &Id) -> Result<(), sqlx::Error>;
}

/// Trait for soft-deleting every entity matching some criteria
pub trait SoftDeleteWhere<Criteria> {
    /// # Returns
    /// * `Ok(u64)` - Number of rows that were soft-deleted
    async fn soft_delete_where(&self, criteria: &Criteria) -> Result<u64, sqlx::Error>;
}
