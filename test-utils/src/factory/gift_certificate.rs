//! Gift certificate factory for creating test certificate entities.
//!
//! Also provides `link_tag` for attaching tags to certificates through the
//! `gift_certificate_tag` link table.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test gift certificates with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let certificate = GiftCertificateFactory::new(&db)
///     .name("Spa day")
///     .price(Decimal::new(4999, 2))
///     .build()
///     .await?;
/// ```
pub struct GiftCertificateFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: String,
    price: Decimal,
    duration: i32,
    create_date: DateTime<Utc>,
}

impl<'a> GiftCertificateFactory<'a> {
    /// Creates a new GiftCertificateFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Certificate {id}"` where id is auto-incremented
    /// - description: `"Description {id}"`
    /// - price: `10.00`
    /// - duration: `30` days
    /// - create_date: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `GiftCertificateFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Certificate {}", id),
            description: format!("Description {}", id),
            price: Decimal::new(1000, 2),
            duration: 30,
            create_date: Utc::now(),
        }
    }

    /// Sets the unique name of the certificate.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the description of the certificate.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the price of the certificate.
    pub fn price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }

    /// Sets the validity duration in days.
    pub fn duration(mut self, duration: i32) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the creation timestamp; the last update timestamp is set to the same value.
    pub fn create_date(mut self, create_date: DateTime<Utc>) -> Self {
        self.create_date = create_date;
        self
    }

    /// Builds and inserts the gift certificate entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::gift_certificate::Model)` - Created certificate entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::gift_certificate::Model, DbErr> {
        entity::gift_certificate::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            price: ActiveValue::Set(self.price),
            duration: ActiveValue::Set(self.duration),
            create_date: ActiveValue::Set(self.create_date),
            last_update_date: ActiveValue::Set(self.create_date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a gift certificate with default values.
///
/// Shorthand for `GiftCertificateFactory::new(db).build().await`.
pub async fn create_gift_certificate(
    db: &DatabaseConnection,
) -> Result<entity::gift_certificate::Model, DbErr> {
    GiftCertificateFactory::new(db).build().await
}

/// Attaches a tag to a gift certificate.
///
/// # Arguments
/// - `db` - Database connection
/// - `gift_certificate_id` - ID of the certificate
/// - `tag_id` - ID of the tag
///
/// # Returns
/// - `Ok(entity::gift_certificate_tag::Model)` - Created link row
/// - `Err(DbErr)` - Database error during insert (e.g. duplicate link)
pub async fn link_tag(
    db: &DatabaseConnection,
    gift_certificate_id: i32,
    tag_id: i32,
) -> Result<entity::gift_certificate_tag::Model, DbErr> {
    entity::gift_certificate_tag::ActiveModel {
        gift_certificate_id: ActiveValue::Set(gift_certificate_id),
        tag_id: ActiveValue::Set(tag_id),
    }
    .insert(db)
    .await
}
