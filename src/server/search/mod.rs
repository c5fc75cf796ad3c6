//! Search pipeline shared by every list endpoint.
//!
//! Raw query parameters flow through four stages:
//!
//! 1. **Registry** (`field`, `registry`) - per-entity whitelist of filterable keys
//! 2. **Parser** (`request`) - validates parameters into a `SearchParamRequest`, filling
//!    gaps from the resource's `SearchPolicy` (`policy`)
//! 3. **Predicate builder** (`predicate`) - compiles criteria, joins and ordering onto a
//!    SeaORM `Select`
//! 4. **Paginator** (`page`) - runs the count and page queries and assembles a
//!    `SearchParamResponse`
//!
//! Registries are immutable after first use; every other value lives for one request.

pub mod field;
pub mod page;
pub mod policy;
pub mod predicate;
pub mod registry;
pub mod request;

use sea_orm::{ConnectionTrait, EntityTrait, Select};

use crate::server::{
    error::AppError,
    search::{
        field::FieldRegistry, page::SearchParamResponse, policy::Resource,
        request::SearchParamRequest,
    },
};

/// Entity that can be listed through the search pipeline.
pub trait Searchable: EntityTrait {
    const RESOURCE: Resource;

    fn registry() -> &'static FieldRegistry<Self>;

    /// Parses raw query parameters against this entity's registry and policy.
    fn parse_request(params: &[(String, String)]) -> Result<SearchParamRequest, AppError> {
        Ok(SearchParamRequest::parse(
            params,
            Self::registry(),
            Self::RESOURCE.policy(),
        )?)
    }

    /// Request without criteria using this entity's default policy.
    fn default_request() -> SearchParamRequest {
        SearchParamRequest::from_policy(Self::RESOURCE.policy())
    }
}

impl Searchable for entity::gift_certificate::Entity {
    const RESOURCE: Resource = Resource::GiftCertificate;

    fn registry() -> &'static FieldRegistry<Self> {
        registry::gift_certificates()
    }
}

impl Searchable for entity::tag::Entity {
    const RESOURCE: Resource = Resource::Tag;

    fn registry() -> &'static FieldRegistry<Self> {
        registry::tags()
    }
}

impl Searchable for entity::user::Entity {
    const RESOURCE: Resource = Resource::User;

    fn registry() -> &'static FieldRegistry<Self> {
        registry::users()
    }
}

impl Searchable for entity::order::Entity {
    const RESOURCE: Resource = Resource::Order;

    fn registry() -> &'static FieldRegistry<Self> {
        registry::orders()
    }
}

impl Searchable for entity::purchase::Entity {
    const RESOURCE: Resource = Resource::Purchase;

    fn registry() -> &'static FieldRegistry<Self> {
        registry::purchases()
    }
}

/// Compiles `request` onto `base` and fetches the requested page.
///
/// # Arguments
/// - `db` - Connection the count and page queries run on
/// - `base` - Root query, optionally pre-filtered to a scope
/// - `request` - Parsed request for the same entity
///
/// # Returns
/// - `Ok(SearchParamResponse)` - Requested page of entity models
/// - `Err(AppError::SearchErr)` - Criteria incompatible with the registry
/// - `Err(AppError::DbErr)` - Database error during count or page query
pub async fn search<E, C>(
    db: &C,
    base: Select<E>,
    request: &SearchParamRequest,
) -> Result<SearchParamResponse<E::Model>, AppError>
where
    E: Searchable,
    E::Model: Send + Sync,
    C: ConnectionTrait,
{
    let select = predicate::build(base, request, E::registry())?;
    Ok(page::fetch_page(db, select, request).await?)
}
