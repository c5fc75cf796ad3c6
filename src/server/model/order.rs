//! Order domain models and parameters.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::{
    model::order::{CreateOrderDto, OrderDto},
    server::{error::AppError, model::gift_certificate::GiftCertificate},
};

/// Order of one or more certificates by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    /// Sum of the certificate prices at purchase time.
    pub cost: Decimal,
    pub purchase_date: DateTime<Utc>,
    /// Ordered certificates; `None` when not loaded or folded.
    pub certificates: Option<Vec<GiftCertificate>>,
}

impl Order {
    /// Converts an entity model to an order domain model at the repository boundary.
    pub fn from_entity(entity: entity::order::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            cost: entity.cost.round_dp(2),
            purchase_date: entity.purchase_date,
            certificates: None,
        }
    }

    /// Converts the order domain model to a DTO for API responses.
    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            user_id: self.user_id,
            cost: self.cost,
            purchase_date: self.purchase_date,
            certificates: self
                .certificates
                .map(|certificates| certificates.into_iter().map(|c| c.into_dto()).collect()),
        }
    }
}

/// Validated parameters for placing an order.
#[derive(Debug, Clone)]
pub struct CreateOrderParams {
    pub user_id: i32,
    /// Distinct certificate IDs in request order.
    pub gift_certificate_ids: Vec<i32>,
}

impl CreateOrderParams {
    /// # Returns
    /// - `Ok(CreateOrderParams)` - At least one certificate, duplicates removed
    /// - `Err(AppError::BadRequest)` - Empty certificate list
    pub fn from_dto(user_id: i32, dto: CreateOrderDto) -> Result<Self, AppError> {
        let mut ids: Vec<i32> = Vec::with_capacity(dto.gift_certificate_ids.len());
        for id in dto.gift_certificate_ids {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }

        if ids.is_empty() {
            return Err(AppError::BadRequest(
                "An order must contain at least one gift certificate".to_string(),
            ));
        }

        Ok(Self {
            user_id,
            gift_certificate_ids: ids,
        })
    }
}
