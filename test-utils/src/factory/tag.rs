//! Tag factory for creating test tag entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tags with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let tag = TagFactory::new(&db).name("outdoor").build().await?;
/// ```
pub struct TagFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> TagFactory<'a> {
    /// Creates a new TagFactory with default values.
    ///
    /// Defaults:
    /// - name: `"tag-{id}"` where id is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `TagFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("tag-{}", next_id()),
        }
    }

    /// Sets the name for the tag.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the tag entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::tag::Model)` - Created tag entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::tag::Model, DbErr> {
        entity::tag::ActiveModel {
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a tag with default values.
///
/// Shorthand for `TagFactory::new(db).build().await`.
pub async fn create_tag(db: &DatabaseConnection) -> Result<entity::tag::Model, DbErr> {
    TagFactory::new(db).build().await
}

/// Creates a tag with a specific name.
pub async fn create_tag_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::tag::Model, DbErr> {
    TagFactory::new(db).name(name).build().await
}
