//! Order factory for creating test order entities.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders.
///
/// The order does not get any certificate links on its own; use `link_certificate`
/// or `helpers::create_order_with_purchases` for a consistent order graph.
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    cost: Decimal,
    purchase_date: DateTime<Utc>,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory with default values.
    ///
    /// Defaults:
    /// - cost: `0`
    /// - purchase_date: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Owner of the order
    ///
    /// # Returns
    /// - `OrderFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            cost: Decimal::ZERO,
            purchase_date: Utc::now(),
        }
    }

    /// Sets the order cost.
    pub fn cost(mut self, cost: Decimal) -> Self {
        self.cost = cost;
        self
    }

    /// Sets the purchase timestamp.
    pub fn purchase_date(mut self, purchase_date: DateTime<Utc>) -> Self {
        self.purchase_date = purchase_date;
        self
    }

    /// Builds and inserts the order entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::order::Model)` - Created order entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        entity::order::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            cost: ActiveValue::Set(self.cost),
            purchase_date: ActiveValue::Set(self.purchase_date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an empty order for the given user.
pub async fn create_order(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, user_id).build().await
}

/// Attaches a gift certificate to an order.
pub async fn link_certificate(
    db: &DatabaseConnection,
    order_id: i32,
    gift_certificate_id: i32,
) -> Result<entity::order_gift_certificate::Model, DbErr> {
    entity::order_gift_certificate::ActiveModel {
        order_id: ActiveValue::Set(order_id),
        gift_certificate_id: ActiveValue::Set(gift_certificate_id),
    }
    .insert(db)
    .await
}
