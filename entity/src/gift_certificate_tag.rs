use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "gift_certificate_tag")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub gift_certificate_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub tag_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::gift_certificate::Entity",
        from = "Column::GiftCertificateId",
        to = "super::gift_certificate::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    GiftCertificate,
    #[sea_orm(
        belongs_to = "super::tag::Entity",
        from = "Column::TagId",
        to = "super::tag::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Tag,
}

impl Related<super::gift_certificate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GiftCertificate.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tag.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
