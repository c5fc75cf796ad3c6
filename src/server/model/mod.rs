//! Domain models and operation parameters.
//!
//! Domain models are built from entity models at the repository boundary
//! (`from_entity`) and converted to DTOs at the controller boundary (`into_dto`).
//! Parameter types carry validated input from controllers into services.

pub mod gift_certificate;
pub mod order;
pub mod purchase;
pub mod search;
pub mod tag;
pub mod user;
