//! Common repository traits
//!
//! This module defines generic interfaces for database operations.
//! Every method runs a single statement, so each call commits on its own.

/// Trait for creating new entities in the database
///
/// # Type Parameters
/// * `Entity` - Type of the returned entity (with ID assigned by the database)
/// * `CreateData` - Data for creation (any ID it carries is ignored)
pub trait Create<Entity, CreateData> {
    /// Creates a new entity in the database
    ///
    /// # Returns
    /// * `Ok(Entity)` - Created entity with ID assigned by the database
    /// * `Err(sqlx::Error)` - Error during insertion
    async fn create(&self, data: &CreateData) -> Result<Entity, sqlx::Error>;
}

/// Trait for reading a single entity by primary key
///
/// # Type Parameters
/// * `Entity` - Type of the entity to read
/// * `Id` - Type of the primary key
pub trait Read<Entity, Id> {
    /// Reads an entity from the database by its primary key
    ///
    /// # Returns
    /// * `Ok(Some(Entity))` - Entity found
    /// * `Ok(None)` - No entity with that ID
    /// * `Err(sqlx::Error)` - Error during reading
    async fn read(&self, id: &Id) -> Result<Option<Entity>, sqlx::Error>;
}

/// Trait for reading a window of entities in the table's natural order
pub trait ReadPage<Entity> {
    /// Skips the first `skip` rows and returns at most `take` rows.
    /// Both values are expected to be non-negative.
    ///
    /// # Returns
    /// * `Ok(Vec<Entity>)` - Possibly empty page
    /// * `Err(sqlx::Error)` - Error during reading
    async fn read_page(&self, skip: i64, take: i64) -> Result<Vec<Entity>, sqlx::Error>;
}

/// Trait for updating existing entities
///
/// # Type Parameters
/// * `Entity` - Type of the updated entity
/// * `UpdateData` - Data to write over the stored row
/// * `Id` - Type of the primary key
pub trait Update<Entity, UpdateData, Id> {
    /// Updates an existing entity in the database
    ///
    /// # Returns
    /// * `Ok(Entity)` - Updated entity
    /// * `Err(sqlx::Error::RowNotFound)` - No row with that ID
    /// * `Err(sqlx::Error)` - Any other error during update
    async fn update(&self, id: &Id, data: &UpdateData) -> Result<Entity, sqlx::Error>;
}

/// Trait for deleting entities
///
/// # Type Parameters
/// * `Id` - Type of the primary key
pub trait Delete<Id> {
    /// Deletes an entity from the database
    ///
    /// # Returns
    /// * `Ok(())` - Deletion successful
    /// * `Err(sqlx::Error::RowNotFound)` - No row with that ID
    /// * `Err(sqlx::Error)` - Any other error during deletion
    async fn delete(&self, id: &Id) -> Result<(), sqlx::Error>;
}
