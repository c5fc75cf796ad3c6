use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tag")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::gift_certificate_tag::Entity")]
    GiftCertificateTag,
}

impl Related<super::gift_certificate_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GiftCertificateTag.def()
    }
}

impl Related<super::gift_certificate::Entity> for Entity {
    fn to() -> RelationDef {
        super::gift_certificate_tag::Relation::GiftCertificate.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::gift_certificate_tag::Relation::Tag.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
