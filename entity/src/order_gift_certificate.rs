use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "order_gift_certificate")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub order_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub gift_certificate_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Order,
    #[sea_orm(
        belongs_to = "super::gift_certificate::Entity",
        from = "Column::GiftCertificateId",
        to = "super::gift_certificate::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    GiftCertificate,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::gift_certificate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GiftCertificate.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
