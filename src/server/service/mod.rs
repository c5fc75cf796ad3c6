//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They parse raw search parameters against the resource's field registry, enforce
//! uniqueness rules, and turn missing records into `AppError::NotFound`. Services work
//! with domain models rather than DTOs or entity models.

pub mod gift_certificate;
pub mod order;
pub mod purchase;
pub mod tag;
pub mod user;
