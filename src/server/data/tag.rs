//! Tag data repository for database operations.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::{unsupported, CrudRepository},
    error::AppError,
    model::{
        gift_certificate::GiftCertificate,
        tag::{CreateTagParams, Tag},
    },
    search::{self, page::SearchParamResponse, request::SearchParamRequest},
};

pub struct TagRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Tag>, DbErr> {
        let entity = entity::prelude::Tag::find()
            .filter(entity::tag::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Tag::from_entity))
    }

    /// Loads the certificates carrying each of the given tags.
    ///
    /// # Returns
    /// - `Ok(HashMap)` - Certificates per tag ID ordered by certificate ID, without their
    ///   own tags
    /// - `Err(DbErr)` - Database error during either query
    pub async fn certificates_for(
        &self,
        tag_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<GiftCertificate>>, DbErr> {
        if tag_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let links = entity::prelude::GiftCertificateTag::find()
            .filter(entity::gift_certificate_tag::Column::TagId.is_in(tag_ids.iter().copied()))
            .all(self.db)
            .await?;

        if links.is_empty() {
            return Ok(HashMap::new());
        }

        let certificates: HashMap<i32, entity::gift_certificate::Model> =
            entity::prelude::GiftCertificate::find()
                .filter(
                    entity::gift_certificate::Column::Id
                        .is_in(links.iter().map(|link| link.gift_certificate_id)),
                )
                .order_by_asc(entity::gift_certificate::Column::Id)
                .all(self.db)
                .await?
                .into_iter()
                .map(|certificate| (certificate.id, certificate))
                .collect();

        let mut result: HashMap<i32, Vec<GiftCertificate>> = HashMap::new();
        for link in links {
            if let Some(certificate) = certificates.get(&link.gift_certificate_id) {
                result
                    .entry(link.tag_id)
                    .or_default()
                    .push(GiftCertificate::from_entity(certificate.clone()));
            }
        }

        for certificates in result.values_mut() {
            certificates.sort_by_key(|certificate| certificate.id);
        }

        Ok(result)
    }

    /// Gets the certificates carrying a tag, ordered by ID.
    pub async fn certificates_of(&self, tag_id: i32) -> Result<Vec<GiftCertificate>, DbErr> {
        Ok(self
            .certificates_for(&[tag_id])
            .await?
            .remove(&tag_id)
            .unwrap_or_default())
    }
}

impl CrudRepository for TagRepository<'_> {
    type Model = Tag;
    type Id = i32;
    type Create = CreateTagParams;
    type Update = ();

    async fn create(&self, params: CreateTagParams) -> Result<Tag, AppError> {
        let entity = entity::tag::ActiveModel {
            name: ActiveValue::Set(params.name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Tag::from_entity(entity))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Tag>, AppError> {
        let entity = entity::prelude::Tag::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Tag::from_entity))
    }

    /// Tags are immutable once created.
    async fn update(&self, _params: ()) -> Result<Option<Tag>, AppError> {
        unsupported("tags", "update")
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Tag::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Searches tags, loading their certificates unless the request is folded.
    async fn search(&self, request: &SearchParamRequest) -> Result<SearchParamResponse<Tag>, AppError> {
        let mut page = search::search(self.db, entity::prelude::Tag::find(), request)
            .await?
            .map(Tag::from_entity);

        if !request.fold {
            let ids: Vec<i32> = page.items.iter().map(|tag| tag.id).collect();
            let mut certificates = self.certificates_for(&ids).await?;

            for tag in page.items.iter_mut() {
                tag.certificates = Some(certificates.remove(&tag.id).unwrap_or_default());
            }
        }

        Ok(page)
    }
}
