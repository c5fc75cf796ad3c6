//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories that need related rows take them as arguments
//! so each test controls its own object graph.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let tag = factory::tag::create_tag(&db).await?;
//!     let certificate = factory::gift_certificate::create_gift_certificate(&db).await?;
//!     factory::gift_certificate::link_tag(&db, certificate.id, tag.id).await?;
//!
//!     // Create an order with its purchases
//!     let user = factory::user::create_user(&db).await?;
//!     let (order, purchases) =
//!         factory::helpers::create_order_with_purchases(&db, &user, &[certificate]).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let certificate = factory::gift_certificate::GiftCertificateFactory::new(&db)
//!     .name("Spa day")
//!     .price(Decimal::new(4999, 2))
//!     .duration(30)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `tag` - Create tag entities
//! - `gift_certificate` - Create gift certificate entities and tag links
//! - `user` - Create user entities
//! - `order` - Create order entities and certificate links
//! - `purchase` - Create purchase entities
//! - `helpers` - ID generation and multi-entity helpers

pub mod gift_certificate;
pub mod helpers;
pub mod order;
pub mod purchase;
pub mod tag;
pub mod user;

pub use gift_certificate::{create_gift_certificate, link_tag};
pub use order::create_order;
pub use purchase::create_purchase;
pub use tag::create_tag;
pub use user::create_user;
