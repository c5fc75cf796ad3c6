//! Static field registration tables for every searchable resource.
//!
//! Each table is built on first use and shared for the lifetime of the process.

use std::sync::OnceLock;

use entity::{
    gift_certificate, gift_certificate_tag, order, order_gift_certificate, purchase, tag, user,
};
use sea_orm::RelationTrait;

use crate::server::search::field::{FieldKind, FieldRegistry, FilterField, JoinPath};

const CERTIFICATE_TAGS: JoinPath = JoinPath::new("tags", || {
    vec![
        gift_certificate::Relation::GiftCertificateTag.def(),
        gift_certificate_tag::Relation::Tag.def(),
    ]
});

const TAG_CERTIFICATES: JoinPath = JoinPath::new("certificates", || {
    vec![
        tag::Relation::GiftCertificateTag.def(),
        gift_certificate_tag::Relation::GiftCertificate.def(),
    ]
});

const ORDER_USER: JoinPath = JoinPath::new("user", || vec![order::Relation::User.def()]);

const ORDER_CERTIFICATES: JoinPath = JoinPath::new("certificates", || {
    vec![
        order::Relation::OrderGiftCertificate.def(),
        order_gift_certificate::Relation::GiftCertificate.def(),
    ]
});

const PURCHASE_USER: JoinPath = JoinPath::new("user", || vec![purchase::Relation::User.def()]);

const PURCHASE_CERTIFICATE: JoinPath = JoinPath::new("certificate", || {
    vec![purchase::Relation::GiftCertificate.def()]
});

static GIFT_CERTIFICATES: OnceLock<FieldRegistry<gift_certificate::Entity>> = OnceLock::new();
static TAGS: OnceLock<FieldRegistry<tag::Entity>> = OnceLock::new();
static USERS: OnceLock<FieldRegistry<user::Entity>> = OnceLock::new();
static ORDERS: OnceLock<FieldRegistry<order::Entity>> = OnceLock::new();
static PURCHASES: OnceLock<FieldRegistry<purchase::Entity>> = OnceLock::new();

pub fn gift_certificates() -> &'static FieldRegistry<gift_certificate::Entity> {
    use gift_certificate::Column;

    GIFT_CERTIFICATES.get_or_init(|| {
        FieldRegistry::new()
            .field(FilterField::new("id", FieldKind::Integer, Column::Id))
            .field(FilterField::new("name", FieldKind::String, Column::Name))
            .field(FilterField::new(
                "description",
                FieldKind::String,
                Column::Description,
            ))
            .field(FilterField::new("price", FieldKind::Decimal, Column::Price).range())
            .field(FilterField::new("duration", FieldKind::Integer, Column::Duration).range())
            .field(
                FilterField::new("createDate", FieldKind::DateTime, Column::CreateDate)
                    .range()
                    .alias("create"),
            )
            .field(
                FilterField::new(
                    "lastUpdateDate",
                    FieldKind::DateTime,
                    Column::LastUpdateDate,
                )
                .range()
                .alias("update"),
            )
            .field(
                FilterField::new("tag", FieldKind::String, tag::Column::Name)
                    .join(CERTIFICATE_TAGS)
                    .multi_valued(),
            )
    })
}

pub fn tags() -> &'static FieldRegistry<tag::Entity> {
    TAGS.get_or_init(|| {
        FieldRegistry::new()
            .field(FilterField::new("id", FieldKind::Integer, tag::Column::Id))
            .field(FilterField::new("name", FieldKind::String, tag::Column::Name))
            .field(
                FilterField::new(
                    "certificate",
                    FieldKind::String,
                    gift_certificate::Column::Name,
                )
                .join(TAG_CERTIFICATES)
                .multi_valued(),
            )
    })
}

pub fn users() -> &'static FieldRegistry<user::Entity> {
    USERS.get_or_init(|| {
        FieldRegistry::new()
            .field(FilterField::new("id", FieldKind::Integer, user::Column::Id))
            .field(FilterField::new(
                "username",
                FieldKind::String,
                user::Column::Username,
            ))
    })
}

pub fn orders() -> &'static FieldRegistry<order::Entity> {
    use order::Column;

    ORDERS.get_or_init(|| {
        FieldRegistry::new()
            .field(FilterField::new("id", FieldKind::Integer, Column::Id))
            .field(FilterField::new("cost", FieldKind::Decimal, Column::Cost).range())
            .field(
                FilterField::new("purchaseDate", FieldKind::DateTime, Column::PurchaseDate)
                    .range(),
            )
            .field(
                FilterField::new("user", FieldKind::String, user::Column::Username)
                    .join(ORDER_USER),
            )
            .field(
                FilterField::new(
                    "certificate",
                    FieldKind::String,
                    gift_certificate::Column::Name,
                )
                .join(ORDER_CERTIFICATES)
                .multi_valued(),
            )
    })
}

pub fn purchases() -> &'static FieldRegistry<purchase::Entity> {
    use purchase::Column;

    PURCHASES.get_or_init(|| {
        FieldRegistry::new()
            .field(FilterField::new("id", FieldKind::Integer, Column::Id))
            .field(
                FilterField::new("startDate", FieldKind::DateTime, Column::StartDate)
                    .range()
                    .alias("start"),
            )
            .field(
                FilterField::new("endDate", FieldKind::DateTime, Column::EndDate)
                    .range()
                    .alias("end"),
            )
            .field(FilterField::new("status", FieldKind::Status, Column::Status))
            .field(
                FilterField::new(
                    "certificate",
                    FieldKind::String,
                    gift_certificate::Column::Name,
                )
                .join(PURCHASE_CERTIFICATE)
                .multi_valued(),
            )
            .field(
                FilterField::new("user", FieldKind::String, user::Column::Username)
                    .join(PURCHASE_USER),
            )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registry_has_sortable_id() {
        assert!(gift_certificates().resolve("id").unwrap().is_sortable());
        assert!(tags().resolve("id").unwrap().is_sortable());
        assert!(users().resolve("id").unwrap().is_sortable());
        assert!(orders().resolve("id").unwrap().is_sortable());
        assert!(purchases().resolve("id").unwrap().is_sortable());
    }

    #[test]
    fn joined_fields_are_not_sortable() {
        let tag = gift_certificates().resolve("tag").unwrap();

        assert_eq!(tag.join_path().map(|j| j.name), Some("tags"));
        assert!(!tag.is_sortable());
        assert!(tag.is_multi_valued());
        assert_eq!(tag.join_path().unwrap().relations().len(), 2);
    }

    #[test]
    fn only_marked_fields_accept_ranges() {
        let registry = gift_certificates();

        assert!(registry.resolve("price").unwrap().is_range());
        assert!(registry.resolve("update").unwrap().is_range());
        assert!(!registry.resolve("id").unwrap().is_range());
        assert!(!registry.resolve("name").unwrap().is_range());
    }
}
