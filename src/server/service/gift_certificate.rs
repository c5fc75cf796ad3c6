//! Gift certificate business logic.
//!
//! Enforces name uniqueness on create and rename and turns missing records into
//! `AppError::NotFound` before the repository is asked to write.

use sea_orm::{DatabaseConnection, EntityTrait};

use crate::server::{
    data::{gift_certificate::GiftCertificateRepository, CrudRepository},
    error::AppError,
    model::{
        gift_certificate::{
            CreateGiftCertificateParams, GiftCertificate, UpdateGiftCertificateParams,
        },
        tag::{normalize_tag_names, Tag},
    },
    search::{page::SearchParamResponse, Searchable},
};

pub struct GiftCertificateService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GiftCertificateService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a certificate, creating any tags that do not exist yet.
    ///
    /// # Returns
    /// - `Ok(GiftCertificate)` - Created certificate with its tags
    /// - `Err(AppError::Conflict)` - Another certificate already has this name
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(
        &self,
        params: CreateGiftCertificateParams,
    ) -> Result<GiftCertificate, AppError> {
        let repo = GiftCertificateRepository::new(self.db);

        if repo.find_by_name(&params.name).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Gift certificate '{}' already exists",
                params.name
            )));
        }

        let certificate = repo.create(params).await?;

        tracing::info!(
            "Created gift certificate {} ({})",
            certificate.id,
            certificate.name
        );

        Ok(certificate)
    }

    /// Gets a certificate with its tags.
    pub async fn get(&self, id: i32) -> Result<GiftCertificate, AppError> {
        GiftCertificateRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(GiftCertificate)` - Updated certificate with its tags
    /// - `Err(AppError::NotFound)` - No certificate with this ID
    /// - `Err(AppError::Conflict)` - The new name belongs to another certificate
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(
        &self,
        params: UpdateGiftCertificateParams,
    ) -> Result<GiftCertificate, AppError> {
        let repo = GiftCertificateRepository::new(self.db);

        if let Some(name) = &params.name {
            if let Some(existing) = repo.find_by_name(name).await? {
                if existing.id != params.id {
                    return Err(AppError::Conflict(format!(
                        "Gift certificate '{}' already exists",
                        name
                    )));
                }
            }
        }

        let id = params.id;
        repo.update(params).await?.ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !GiftCertificateRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!("Deleted gift certificate {}", id);

        Ok(())
    }

    /// Searches certificates with raw query parameters.
    ///
    /// # Returns
    /// - `Ok(SearchParamResponse)` - Requested page
    /// - `Err(AppError::SearchErr)` - Malformed query parameters
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn search(
        &self,
        params: &[(String, String)],
    ) -> Result<SearchParamResponse<GiftCertificate>, AppError> {
        let request = entity::gift_certificate::Entity::parse_request(params)?;

        GiftCertificateRepository::new(self.db)
            .search(&request)
            .await
    }

    pub async fn tags_of(&self, id: i32) -> Result<Vec<Tag>, AppError> {
        self.ensure_exists(id).await?;

        Ok(GiftCertificateRepository::new(self.db).tags_of(id).await?)
    }

    /// Attaches tags by name, creating missing tags.
    ///
    /// # Returns
    /// - `Ok(Vec<Tag>)` - Full tag set after the change
    /// - `Err(AppError::BadRequest)` - Blank tag name
    /// - `Err(AppError::NotFound)` - No certificate with this ID
    pub async fn add_tags(&self, id: i32, names: &[String]) -> Result<Vec<Tag>, AppError> {
        let names = normalize_tag_names(names)?;
        self.ensure_exists(id).await?;

        Ok(GiftCertificateRepository::new(self.db)
            .add_tags(id, &names)
            .await?)
    }

    /// Detaches tags by name; names that are not attached are ignored.
    ///
    /// # Returns
    /// - `Ok(Vec<Tag>)` - Remaining tags
    /// - `Err(AppError::BadRequest)` - Blank tag name
    /// - `Err(AppError::NotFound)` - No certificate with this ID
    pub async fn remove_tags(&self, id: i32, names: &[String]) -> Result<Vec<Tag>, AppError> {
        let names = normalize_tag_names(names)?;
        self.ensure_exists(id).await?;

        let repo = GiftCertificateRepository::new(self.db);
        let removed = repo.remove_tags(id, &names).await?;

        tracing::debug!("Removed {} tags from gift certificate {}", removed, id);

        Ok(repo.tags_of(id).await?)
    }

    async fn ensure_exists(&self, id: i32) -> Result<(), AppError> {
        let exists = entity::prelude::GiftCertificate::find_by_id(id)
            .one(self.db)
            .await?
            .is_some();

        if !exists {
            return Err(not_found(id));
        }

        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Gift certificate with id {} not found", id))
}
