//! Request and response DTOs exchanged over the HTTP API.
//!
//! DTOs are serialized in camelCase and carry `utoipa` schemas for the API docs.
//! Conversion from and to server domain models lives in `server::model`.

pub mod api;
pub mod gift_certificate;
pub mod order;
pub mod purchase;
pub mod search;
pub mod tag;
pub mod user;
