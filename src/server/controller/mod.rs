//! HTTP request handlers.
//!
//! Controllers convert DTOs to parameters, call the matching service and convert the
//! resulting domain models back to DTOs. Search handlers pass the raw, multi-valued
//! query string through to the service, which parses it against the resource's field
//! registry.

pub mod gift_certificate;
pub mod order;
pub mod purchase;
pub mod tag;
pub mod user;

use serde::Deserialize;
use utoipa::IntoParams;

/// Reserved query parameters accepted by every search endpoint.
///
/// Any other parameter is a filter written as `[op:]key=value`, where `op` is one of
/// `eq` (default), `like`, `gt`, `gte`, `lt` or `lte`. Repeating a multi-valued key
/// matches any of the values.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[allow(dead_code)]
pub struct SearchParams {
    /// Registry key to sort by; defaults to `id`.
    sort: Option<String>,
    /// `asc` or `desc`; defaults to `asc`.
    order: Option<String>,
    /// Zero-based page index; defaults to 0.
    page: Option<u64>,
    /// Page size greater than zero; defaults to 10.
    size: Option<u64>,
    /// `true`/`on` omits related collections from the items.
    fold: Option<String>,
}
