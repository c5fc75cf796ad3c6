//! Purchase factory for creating test purchase entities.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test purchases.
///
/// # Example
///
/// ```rust,ignore
/// let overdue = PurchaseFactory::new(&db, user.id, certificate.id, order.id)
///     .end_date(days_ago(1))
///     .build()
///     .await?;
/// ```
pub struct PurchaseFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    gift_certificate_id: i32,
    order_id: i32,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    status: String,
}

impl<'a> PurchaseFactory<'a> {
    /// Creates a new PurchaseFactory with default values.
    ///
    /// Defaults:
    /// - start_date: now
    /// - end_date: 30 days from now
    /// - status: `ACTIVE`
    pub fn new(
        db: &'a DatabaseConnection,
        user_id: i32,
        gift_certificate_id: i32,
        order_id: i32,
    ) -> Self {
        let now = Utc::now();
        Self {
            db,
            user_id,
            gift_certificate_id,
            order_id,
            start_date: now,
            end_date: now + Duration::days(30),
            status: entity::purchase::STATUS_ACTIVE.to_string(),
        }
    }

    /// Sets the start of the validity window.
    pub fn start_date(mut self, start_date: DateTime<Utc>) -> Self {
        self.start_date = start_date;
        self
    }

    /// Sets the end of the validity window.
    pub fn end_date(mut self, end_date: DateTime<Utc>) -> Self {
        self.end_date = end_date;
        self
    }

    /// Sets the stored status value.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the purchase entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::purchase::Model)` - Created purchase entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::purchase::Model, DbErr> {
        entity::purchase::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            gift_certificate_id: ActiveValue::Set(self.gift_certificate_id),
            order_id: ActiveValue::Set(self.order_id),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active purchase with default dates.
pub async fn create_purchase(
    db: &DatabaseConnection,
    user_id: i32,
    gift_certificate_id: i32,
    order_id: i32,
) -> Result<entity::purchase::Model, DbErr> {
    PurchaseFactory::new(db, user_id, gift_certificate_id, order_id)
        .build()
        .await
}
