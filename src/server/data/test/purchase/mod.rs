use crate::server::{
    data::{purchase::PurchaseRepository, test::params, CrudRepository},
    error::AppError,
    model::purchase::PurchaseStatus,
    search::Searchable,
};
use chrono::Utc;
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers, purchase::PurchaseFactory},
};

mod expire_overdue;
mod search;

/// Creates a user with one order and returns the IDs needed for purchase rows.
async fn order_fixture(db: &sea_orm::DatabaseConnection) -> Result<(i32, i32, i32), AppError> {
    let user = factory::create_user(db).await?;
    let certificate = factory::create_gift_certificate(db).await?;
    let order = factory::create_order(db, user.id).await?;

    Ok((user.id, certificate.id, order.id))
}
