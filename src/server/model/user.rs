//! User domain models and parameters.

use rust_decimal::Decimal;

use crate::{
    model::user::{CreateUserDto, TagUsageDto, UpdateUserDto, UserDto},
    server::error::AppError,
};

/// Customer placing orders.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
        }
    }
}

/// Tag usage across one user's orders.
#[derive(Debug, Clone, PartialEq)]
pub struct TagUsage {
    pub name: String,
    /// Number of ordered certificates carrying the tag.
    pub count: u64,
    /// Highest cost among the orders containing the tag.
    pub max_order_cost: Decimal,
}

impl TagUsage {
    pub fn into_dto(self) -> TagUsageDto {
        TagUsageDto {
            name: self.name,
            count: self.count,
            max_order_cost: self.max_order_cost,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
}

impl CreateUserParams {
    /// # Returns
    /// - `Ok(CreateUserParams)` - Valid parameters with a trimmed username
    /// - `Err(AppError::BadRequest)` - Blank username
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, AppError> {
        Ok(Self {
            username: validate_username(&dto.username)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    pub id: i32,
    pub username: String,
}

impl UpdateUserParams {
    pub fn from_dto(id: i32, dto: UpdateUserDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            username: validate_username(&dto.username)?,
        })
    }
}

fn validate_username(username: &str) -> Result<String, AppError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(AppError::BadRequest("Username must not be blank".to_string()));
    }
    Ok(username.to_string())
}
