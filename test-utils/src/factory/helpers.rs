//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{order::OrderFactory, purchase::PurchaseFactory};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an order for `user` covering `certificates`, plus one active purchase per
/// certificate.
///
/// The order cost is the sum of the certificate prices and each purchase runs from now
/// for the certificate's duration in days.
///
/// # Arguments
/// - `db` - Database connection
/// - `user` - Owner of the order
/// - `certificates` - Certificates to include in the order
///
/// # Returns
/// - `Ok((order, purchases))` - Created order and its purchases
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_with_purchases(
    db: &DatabaseConnection,
    user: &entity::user::Model,
    certificates: &[entity::gift_certificate::Model],
) -> Result<(entity::order::Model, Vec<entity::purchase::Model>), DbErr> {
    let cost = certificates
        .iter()
        .fold(Decimal::ZERO, |sum, certificate| sum + certificate.price);

    let order = OrderFactory::new(db, user.id).cost(cost).build().await?;

    let mut purchases = Vec::with_capacity(certificates.len());
    for certificate in certificates {
        crate::factory::order::link_certificate(db, order.id, certificate.id).await?;

        let purchase = PurchaseFactory::new(db, user.id, certificate.id, order.id)
            .start_date(order.purchase_date)
            .end_date(order.purchase_date + Duration::days(certificate.duration as i64))
            .build()
            .await?;
        purchases.push(purchase);
    }

    Ok((order, purchases))
}

/// Returns a timestamp `days` days in the past, useful for already-overdue purchases.
pub fn days_ago(days: i64) -> chrono::DateTime<Utc> {
    Utc::now() - Duration::days(days)
}
