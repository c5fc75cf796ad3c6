use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreateUserDto {
    pub username: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct UpdateUserDto {
    pub username: String,
}

/// How often a tag appears across a user's orders.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TagUsageDto {
    pub name: String,
    pub count: u64,
    /// Highest cost among the orders containing the tag.
    pub max_order_cost: Decimal,
}
