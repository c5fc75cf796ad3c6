//! Order business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{order::OrderRepository, CrudRepository},
    error::AppError,
    model::{gift_certificate::GiftCertificate, order::Order},
    search::{page::SearchParamResponse, Searchable},
};

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets an order with its certificates.
    pub async fn get(&self, id: i32) -> Result<Order, AppError> {
        OrderRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Deletes an order together with its purchases.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !OrderRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!("Deleted order {}", id);

        Ok(())
    }

    pub async fn search(
        &self,
        params: &[(String, String)],
    ) -> Result<SearchParamResponse<Order>, AppError> {
        let request = entity::order::Entity::parse_request(params)?;

        OrderRepository::new(self.db).search(&request).await
    }

    pub async fn certificates_of(&self, id: i32) -> Result<Vec<GiftCertificate>, AppError> {
        let order = self.get(id).await?;

        Ok(order.certificates.unwrap_or_default())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Order with id {} not found", id))
}
