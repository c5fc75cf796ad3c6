//! Gift certificate data repository for database operations.
//!
//! This module provides the `GiftCertificateRepository` for the certificate catalog and
//! its tag links. Writes that touch several tables run in a single transaction; tag
//! names supplied on create and update are resolved to existing tags or inserted.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    data::CrudRepository,
    error::AppError,
    model::{
        gift_certificate::{
            CreateGiftCertificateParams, GiftCertificate, UpdateGiftCertificateParams,
        },
        tag::Tag,
    },
    search::{self, page::SearchParamResponse, request::SearchParamRequest},
};

pub struct GiftCertificateRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GiftCertificateRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a certificate by its exact name, without tags.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<GiftCertificate>, DbErr> {
        let entity = entity::prelude::GiftCertificate::find()
            .filter(entity::gift_certificate::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(GiftCertificate::from_entity))
    }

    /// Loads the tags of several certificates in two queries.
    ///
    /// # Arguments
    /// - `certificate_ids` - Certificates to load tags for
    ///
    /// # Returns
    /// - `Ok(HashMap)` - Tags per certificate ID ordered by tag ID; certificates without
    ///   tags have no entry
    /// - `Err(DbErr)` - Database error during either query
    pub async fn tags_for(&self, certificate_ids: &[i32]) -> Result<HashMap<i32, Vec<Tag>>, DbErr> {
        tags_for(self.db, certificate_ids).await
    }

    /// Gets the tags of one certificate ordered by ID.
    pub async fn tags_of(&self, certificate_id: i32) -> Result<Vec<Tag>, DbErr> {
        Ok(tags_for(self.db, &[certificate_id])
            .await?
            .remove(&certificate_id)
            .unwrap_or_default())
    }

    /// Attaches tags by name, creating missing tags. Tags already attached are skipped.
    ///
    /// # Arguments
    /// - `certificate_id` - Certificate to attach tags to; must exist
    /// - `names` - Normalized tag names
    ///
    /// # Returns
    /// - `Ok(Vec<Tag>)` - Full tag set of the certificate after the change
    /// - `Err(DbErr)` - Database error; no links are written
    pub async fn add_tags(&self, certificate_id: i32, names: &[String]) -> Result<Vec<Tag>, DbErr> {
        let txn = self.db.begin().await?;

        let tags = find_or_create_tags(&txn, names).await?;
        link_tags(&txn, certificate_id, &tags).await?;
        touch(&txn, certificate_id).await?;

        txn.commit().await?;

        self.tags_of(certificate_id).await
    }

    /// Detaches tags by name. Unknown or unattached names are ignored.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of links removed
    /// - `Err(DbErr)` - Database error
    pub async fn remove_tags(&self, certificate_id: i32, names: &[String]) -> Result<u64, DbErr> {
        if names.is_empty() {
            return Ok(0);
        }

        let txn = self.db.begin().await?;

        let tag_ids: Vec<i32> = entity::prelude::Tag::find()
            .filter(entity::tag::Column::Name.is_in(names.iter().cloned()))
            .all(&txn)
            .await?
            .into_iter()
            .map(|tag| tag.id)
            .collect();

        let removed = if tag_ids.is_empty() {
            0
        } else {
            entity::prelude::GiftCertificateTag::delete_many()
                .filter(entity::gift_certificate_tag::Column::GiftCertificateId.eq(certificate_id))
                .filter(entity::gift_certificate_tag::Column::TagId.is_in(tag_ids))
                .exec(&txn)
                .await?
                .rows_affected
        };

        if removed > 0 {
            touch(&txn, certificate_id).await?;
        }

        txn.commit().await?;

        Ok(removed)
    }

    /// Attaches loaded tags to each certificate in place.
    pub async fn load_tags(&self, certificates: &mut [GiftCertificate]) -> Result<(), DbErr> {
        let ids: Vec<i32> = certificates.iter().map(|c| c.id).collect();
        let mut tags = self.tags_for(&ids).await?;

        for certificate in certificates.iter_mut() {
            certificate.tags = Some(tags.remove(&certificate.id).unwrap_or_default());
        }

        Ok(())
    }
}

impl CrudRepository for GiftCertificateRepository<'_> {
    type Model = GiftCertificate;
    type Id = i32;
    type Create = CreateGiftCertificateParams;
    type Update = UpdateGiftCertificateParams;

    /// Creates a certificate and links its tags in one transaction.
    ///
    /// Both dates are set to the current time.
    async fn create(&self, params: CreateGiftCertificateParams) -> Result<GiftCertificate, AppError> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let entity = entity::gift_certificate::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            price: ActiveValue::Set(params.price),
            duration: ActiveValue::Set(params.duration),
            create_date: ActiveValue::Set(now),
            last_update_date: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let tags = find_or_create_tags(&txn, &params.tags).await?;
        link_tags(&txn, entity.id, &tags).await?;

        txn.commit().await?;

        let mut certificate = GiftCertificate::from_entity(entity);
        certificate.tags = Some(self.tags_of(certificate.id).await?);

        Ok(certificate)
    }

    /// Gets a certificate with its tags.
    async fn find_by_id(&self, id: i32) -> Result<Option<GiftCertificate>, AppError> {
        let Some(entity) = entity::prelude::GiftCertificate::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut certificate = GiftCertificate::from_entity(entity);
        certificate.tags = Some(self.tags_of(id).await?);

        Ok(Some(certificate))
    }

    /// Applies the present fields and bumps `last_update_date`.
    ///
    /// A present tag list replaces the full tag set.
    async fn update(
        &self,
        params: UpdateGiftCertificateParams,
    ) -> Result<Option<GiftCertificate>, AppError> {
        let txn = self.db.begin().await?;

        let Some(existing) = entity::prelude::GiftCertificate::find_by_id(params.id)
            .one(&txn)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::gift_certificate::ActiveModel = existing.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(price) = params.price {
            active.price = ActiveValue::Set(price);
        }
        if let Some(duration) = params.duration {
            active.duration = ActiveValue::Set(duration);
        }
        active.last_update_date = ActiveValue::Set(Utc::now());

        let entity = active.update(&txn).await?;

        if let Some(names) = params.tags {
            entity::prelude::GiftCertificateTag::delete_many()
                .filter(entity::gift_certificate_tag::Column::GiftCertificateId.eq(entity.id))
                .exec(&txn)
                .await?;

            let tags = find_or_create_tags(&txn, &names).await?;
            link_tags(&txn, entity.id, &tags).await?;
        }

        txn.commit().await?;

        let mut certificate = GiftCertificate::from_entity(entity);
        certificate.tags = Some(self.tags_of(certificate.id).await?);

        Ok(Some(certificate))
    }

    /// Deletes a certificate; tag links, order links and purchases cascade.
    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::GiftCertificate::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Searches certificates, loading tags unless the request is folded.
    async fn search(
        &self,
        request: &SearchParamRequest,
    ) -> Result<SearchParamResponse<GiftCertificate>, AppError> {
        let mut page = search::search(self.db, entity::prelude::GiftCertificate::find(), request)
            .await?
            .map(GiftCertificate::from_entity);

        if !request.fold {
            self.load_tags(&mut page.items).await?;
        }

        Ok(page)
    }
}

async fn tags_for<C: ConnectionTrait>(
    db: &C,
    certificate_ids: &[i32],
) -> Result<HashMap<i32, Vec<Tag>>, DbErr> {
    if certificate_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let links = entity::prelude::GiftCertificateTag::find()
        .filter(
            entity::gift_certificate_tag::Column::GiftCertificateId
                .is_in(certificate_ids.iter().copied()),
        )
        .all(db)
        .await?;

    if links.is_empty() {
        return Ok(HashMap::new());
    }

    let tags: HashMap<i32, entity::tag::Model> = entity::prelude::Tag::find()
        .filter(entity::tag::Column::Id.is_in(links.iter().map(|link| link.tag_id)))
        .order_by_asc(entity::tag::Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(|tag| (tag.id, tag))
        .collect();

    let mut result: HashMap<i32, Vec<Tag>> = HashMap::new();
    for link in links {
        if let Some(tag) = tags.get(&link.tag_id) {
            result
                .entry(link.gift_certificate_id)
                .or_default()
                .push(Tag::from_entity(tag.clone()));
        }
    }

    for tags in result.values_mut() {
        tags.sort_by_key(|tag| tag.id);
    }

    Ok(result)
}

/// Resolves tag names to tag rows, inserting the missing ones.
async fn find_or_create_tags<C: ConnectionTrait>(
    db: &C,
    names: &[String],
) -> Result<Vec<entity::tag::Model>, DbErr> {
    if names.is_empty() {
        return Ok(Vec::new());
    }

    let mut tags = entity::prelude::Tag::find()
        .filter(entity::tag::Column::Name.is_in(names.iter().cloned()))
        .all(db)
        .await?;

    for name in names {
        if tags.iter().any(|tag| &tag.name == name) {
            continue;
        }

        let tag = entity::tag::ActiveModel {
            name: ActiveValue::Set(name.clone()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        tags.push(tag);
    }

    Ok(tags)
}

/// Inserts links for the tags not yet attached to the certificate.
async fn link_tags<C: ConnectionTrait>(
    db: &C,
    certificate_id: i32,
    tags: &[entity::tag::Model],
) -> Result<(), DbErr> {
    if tags.is_empty() {
        return Ok(());
    }

    let attached: Vec<i32> = entity::prelude::GiftCertificateTag::find()
        .filter(entity::gift_certificate_tag::Column::GiftCertificateId.eq(certificate_id))
        .all(db)
        .await?
        .into_iter()
        .map(|link| link.tag_id)
        .collect();

    for tag in tags.iter().filter(|tag| !attached.contains(&tag.id)) {
        entity::gift_certificate_tag::ActiveModel {
            gift_certificate_id: ActiveValue::Set(certificate_id),
            tag_id: ActiveValue::Set(tag.id),
        }
        .insert(db)
        .await?;
    }

    Ok(())
}

/// Bumps `last_update_date` of a certificate.
async fn touch<C: ConnectionTrait>(db: &C, certificate_id: i32) -> Result<(), DbErr> {
    entity::prelude::GiftCertificate::update_many()
        .col_expr(
            entity::gift_certificate::Column::LastUpdateDate,
            sea_orm::sea_query::Expr::value(Utc::now()),
        )
        .filter(entity::gift_certificate::Column::Id.eq(certificate_id))
        .exec(db)
        .await?;

    Ok(())
}
