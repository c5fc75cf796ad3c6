//! Purchase domain models.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::{model::purchase::PurchaseDto, server::error::AppError};

/// Redemption status of a purchased certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseStatus {
    Active,
    Expired,
}

impl PurchaseStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PurchaseStatus::Active => entity::purchase::STATUS_ACTIVE,
            PurchaseStatus::Expired => entity::purchase::STATUS_EXPIRED,
        }
    }

    /// Parses the stored column value.
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            entity::purchase::STATUS_ACTIVE => Some(PurchaseStatus::Active),
            entity::purchase::STATUS_EXPIRED => Some(PurchaseStatus::Expired),
            _ => None,
        }
    }
}

impl fmt::Display for PurchaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validity window of one certificate bought within an order.
#[derive(Debug, Clone, PartialEq)]
pub struct Purchase {
    pub id: i32,
    pub user_id: i32,
    pub gift_certificate_id: i32,
    pub order_id: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: PurchaseStatus,
}

impl Purchase {
    /// Converts an entity model to a purchase domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Purchase)` - Converted purchase
    /// - `Err(AppError::InternalError)` - Stored status is not a known value
    pub fn from_entity(entity: entity::purchase::Model) -> Result<Self, AppError> {
        let status = PurchaseStatus::from_stored(&entity.status).ok_or_else(|| {
            AppError::InternalError(format!(
                "Purchase {} has unknown status '{}'",
                entity.id, entity.status
            ))
        })?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            gift_certificate_id: entity.gift_certificate_id,
            order_id: entity.order_id,
            start_date: entity.start_date,
            end_date: entity.end_date,
            status,
        })
    }

    pub fn into_dto(self) -> PurchaseDto {
        PurchaseDto {
            id: self.id,
            user_id: self.user_id,
            gift_certificate_id: self.gift_certificate_id,
            order_id: self.order_id,
            start_date: self.start_date,
            end_date: self.end_date,
            status: self.status.to_string(),
        }
    }
}
