use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "gift_certificate")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,
    pub duration: i32,
    pub create_date: DateTimeUtc,
    pub last_update_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::gift_certificate_tag::Entity")]
    GiftCertificateTag,
    #[sea_orm(has_many = "super::order_gift_certificate::Entity")]
    OrderGiftCertificate,
    #[sea_orm(has_many = "super::purchase::Entity")]
    Purchase,
}

impl Related<super::gift_certificate_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GiftCertificateTag.def()
    }
}

impl Related<super::order_gift_certificate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderGiftCertificate.def()
    }
}

impl Related<super::purchase::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Purchase.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::gift_certificate_tag::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::gift_certificate_tag::Relation::GiftCertificate.def().rev())
    }
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        super::order_gift_certificate::Relation::Order.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::order_gift_certificate::Relation::GiftCertificate.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
