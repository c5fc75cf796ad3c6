//! Database repository layer for all domain entities.
//!
//! Each repository holds a borrowed connection and converts SeaORM entity models into
//! domain models at the boundary. The five catalog repositories share the
//! `CrudRepository` capability so create, read, update, delete and search read the same
//! way across resources; resource-specific queries are inherent methods.

pub mod gift_certificate;
pub mod order;
pub mod purchase;
pub mod tag;
pub mod user;

#[cfg(test)]
mod test;

use crate::server::{
    error::AppError,
    search::{page::SearchParamResponse, request::SearchParamRequest},
};

/// Create, read, update, delete and search over one resource.
///
/// Operations a resource does not support return `AppError::BadRequest`.
#[allow(async_fn_in_trait)]
pub trait CrudRepository {
    /// Domain model returned by every operation.
    type Model;
    type Id: Copy;
    /// Validated create parameters.
    type Create;
    /// Validated update parameters, carrying the target ID.
    type Update;

    async fn create(&self, params: Self::Create) -> Result<Self::Model, AppError>;

    /// # Returns
    /// - `Ok(Some(Model))` - Record found
    /// - `Ok(None)` - No record with this ID
    /// - `Err(AppError)` - Database error
    async fn find_by_id(&self, id: Self::Id) -> Result<Option<Self::Model>, AppError>;

    /// # Returns
    /// - `Ok(Some(Model))` - Updated record
    /// - `Ok(None)` - No record with the target ID
    /// - `Err(AppError)` - Database error or unsupported operation
    async fn update(&self, params: Self::Update) -> Result<Option<Self::Model>, AppError>;

    /// # Returns
    /// - `Ok(true)` - Record deleted
    /// - `Ok(false)` - No record with this ID
    /// - `Err(AppError)` - Database error or unsupported operation
    async fn delete(&self, id: Self::Id) -> Result<bool, AppError>;

    /// Lists one page of records matching `request`.
    async fn search(
        &self,
        request: &SearchParamRequest,
    ) -> Result<SearchParamResponse<Self::Model>, AppError>;
}

/// Error for an operation a resource does not expose.
pub(crate) fn unsupported<T>(resource: &str, operation: &str) -> Result<T, AppError> {
    Err(AppError::BadRequest(format!(
        "Operation '{}' is not supported for {}",
        operation, resource
    )))
}
