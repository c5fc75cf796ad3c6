//! Tag business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{tag::TagRepository, CrudRepository},
    error::AppError,
    model::{
        gift_certificate::GiftCertificate,
        tag::{CreateTagParams, Tag},
    },
    search::{page::SearchParamResponse, Searchable},
};

pub struct TagService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a tag.
    ///
    /// # Returns
    /// - `Ok(Tag)` - Created tag
    /// - `Err(AppError::Conflict)` - A tag with this name exists
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateTagParams) -> Result<Tag, AppError> {
        let repo = TagRepository::new(self.db);

        if repo.find_by_name(&params.name).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Tag '{}' already exists",
                params.name
            )));
        }

        let tag = repo.create(params).await?;

        tracing::info!("Created tag {} ({})", tag.id, tag.name);

        Ok(tag)
    }

    pub async fn get(&self, id: i32) -> Result<Tag, AppError> {
        TagRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Deletes a tag and detaches it from every certificate.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !TagRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!("Deleted tag {}", id);

        Ok(())
    }

    pub async fn search(
        &self,
        params: &[(String, String)],
    ) -> Result<SearchParamResponse<Tag>, AppError> {
        let request = entity::tag::Entity::parse_request(params)?;

        TagRepository::new(self.db).search(&request).await
    }

    /// Lists the certificates carrying a tag.
    ///
    /// # Returns
    /// - `Ok(Vec<GiftCertificate>)` - Certificates ordered by ID, without their tags
    /// - `Err(AppError::NotFound)` - No tag with this ID
    pub async fn certificates_of(&self, id: i32) -> Result<Vec<GiftCertificate>, AppError> {
        let repo = TagRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }

        Ok(repo.certificates_of(id).await?)
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Tag with id {} not found", id))
}
