//! SeaORM entities for gift certificates, tags, users, orders and purchases.

pub mod prelude;

pub mod gift_certificate;
pub mod gift_certificate_tag;
pub mod order;
pub mod order_gift_certificate;
pub mod purchase;
pub mod tag;
pub mod user;
