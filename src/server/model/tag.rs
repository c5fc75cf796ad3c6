//! Tag domain models and parameters.

use crate::{
    model::tag::{CreateTagDto, TagDto},
    server::{error::AppError, model::gift_certificate::GiftCertificate},
};

/// Label attached to gift certificates.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: i32,
    pub name: String,
    /// Certificates carrying the tag; `None` when not loaded or folded.
    pub certificates: Option<Vec<GiftCertificate>>,
}

impl Tag {
    /// Converts an entity model to a tag domain model at the repository boundary.
    pub fn from_entity(entity: entity::tag::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            certificates: None,
        }
    }

    /// Converts the tag domain model to a DTO for API responses.
    pub fn into_dto(self) -> TagDto {
        TagDto {
            id: self.id,
            name: self.name,
            certificates: self
                .certificates
                .map(|certificates| certificates.into_iter().map(|c| c.into_dto()).collect()),
        }
    }
}

/// Parameters for creating a tag.
#[derive(Debug, Clone)]
pub struct CreateTagParams {
    pub name: String,
}

impl CreateTagParams {
    /// Validates the payload and trims the name.
    ///
    /// # Returns
    /// - `Ok(CreateTagParams)` - Valid parameters
    /// - `Err(AppError::BadRequest)` - Blank name
    pub fn from_dto(dto: CreateTagDto) -> Result<Self, AppError> {
        Ok(Self {
            name: normalize_tag_name(&dto.name)?,
        })
    }
}

/// Trims a tag name and rejects blank names.
pub fn normalize_tag_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("Tag name must not be blank".to_string()));
    }
    Ok(name.to_string())
}

/// Trims, validates and de-duplicates a list of tag names, keeping first occurrences.
pub fn normalize_tag_names(names: &[String]) -> Result<Vec<String>, AppError> {
    let mut normalized: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        let name = normalize_tag_name(name)?;
        if !normalized.contains(&name) {
            normalized.push(name);
        }
    }
    Ok(normalized)
}
