//! Gift certificate domain models and parameters.
//!
//! Validation of create and update payloads happens here, when DTOs are converted into
//! parameter types, so services only ever see well-formed input.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::{
    model::gift_certificate::{
        CreateGiftCertificateDto, GiftCertificateDto, UpdateGiftCertificateDto,
    },
    server::{
        error::AppError,
        model::tag::{normalize_tag_names, Tag},
    },
};

/// Gift certificate offered in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct GiftCertificate {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    /// Validity in days from the purchase date.
    pub duration: i32,
    pub create_date: DateTime<Utc>,
    pub last_update_date: DateTime<Utc>,
    /// Attached tags; `None` when not loaded or folded.
    pub tags: Option<Vec<Tag>>,
}

impl GiftCertificate {
    /// Converts an entity model to a certificate domain model at the repository boundary.
    ///
    /// Tags are not loaded; see `GiftCertificateRepository::tags_for`.
    pub fn from_entity(entity: entity::gift_certificate::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            price: entity.price.round_dp(2),
            duration: entity.duration,
            create_date: entity.create_date,
            last_update_date: entity.last_update_date,
            tags: None,
        }
    }

    /// Converts the certificate domain model to a DTO for API responses.
    pub fn into_dto(self) -> GiftCertificateDto {
        GiftCertificateDto {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            duration: self.duration,
            create_date: self.create_date,
            last_update_date: self.last_update_date,
            tags: self
                .tags
                .map(|tags| tags.into_iter().map(Tag::into_dto).collect()),
        }
    }
}

/// Validated parameters for creating a certificate.
#[derive(Debug, Clone)]
pub struct CreateGiftCertificateParams {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub duration: i32,
    pub tags: Vec<String>,
}

impl CreateGiftCertificateParams {
    /// Validates a create payload.
    ///
    /// # Returns
    /// - `Ok(CreateGiftCertificateParams)` - Valid parameters with trimmed names
    /// - `Err(AppError::BadRequest)` - Blank name, negative price, non-positive duration
    ///   or blank tag name
    pub fn from_dto(dto: CreateGiftCertificateDto) -> Result<Self, AppError> {
        Ok(Self {
            name: validate_name(&dto.name)?,
            description: dto.description,
            price: validate_price(dto.price)?,
            duration: validate_duration(dto.duration)?,
            tags: normalize_tag_names(&dto.tags)?,
        })
    }
}

/// Validated parameters for a partial certificate update.
#[derive(Debug, Clone)]
pub struct UpdateGiftCertificateParams {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub duration: Option<i32>,
    pub tags: Option<Vec<String>>,
}

impl UpdateGiftCertificateParams {
    /// Validates an update payload; absent fields are left unchanged.
    pub fn from_dto(id: i32, dto: UpdateGiftCertificateDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            name: dto.name.as_deref().map(validate_name).transpose()?,
            description: dto.description,
            price: dto.price.map(validate_price).transpose()?,
            duration: dto.duration.map(validate_duration).transpose()?,
            tags: dto
                .tags
                .as_deref()
                .map(normalize_tag_names)
                .transpose()?,
        })
    }
}

fn validate_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest(
            "Gift certificate name must not be blank".to_string(),
        ));
    }
    Ok(name.to_string())
}

fn validate_price(price: Decimal) -> Result<Decimal, AppError> {
    if price.is_sign_negative() {
        return Err(AppError::BadRequest(format!(
            "Price {} is incorrect, expected a non-negative amount",
            price
        )));
    }
    Ok(price.round_dp(2))
}

/// Longest validity a certificate may carry, in days (100 years).
pub const MAX_DURATION_DAYS: i32 = 36_500;

fn validate_duration(duration: i32) -> Result<i32, AppError> {
    if duration <= 0 || duration > MAX_DURATION_DAYS {
        return Err(AppError::BadRequest(format!(
            "Duration {} is incorrect, expected between 1 and {} days",
            duration, MAX_DURATION_DAYS
        )));
    }
    Ok(duration)
}
