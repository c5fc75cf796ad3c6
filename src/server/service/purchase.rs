//! Purchase business logic.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{purchase::PurchaseRepository, CrudRepository},
    error::AppError,
    model::purchase::Purchase,
    search::{page::SearchParamResponse, Searchable},
};

pub struct PurchaseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PurchaseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn search(
        &self,
        params: &[(String, String)],
    ) -> Result<SearchParamResponse<Purchase>, AppError> {
        let request = entity::purchase::Entity::parse_request(params)?;

        PurchaseRepository::new(self.db).search(&request).await
    }

    /// Expires every active purchase whose end date is before `now`.
    ///
    /// # Arguments
    /// - `now` - Reference time, normally the current time
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of purchases expired
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn expire_overdue(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let expired = PurchaseRepository::new(self.db).expire_overdue(now).await?;

        if expired > 0 {
            tracing::info!("Expired {} overdue purchases", expired);
        } else {
            tracing::debug!("No overdue purchases to expire");
        }

        Ok(expired)
    }
}
