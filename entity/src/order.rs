use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub cost: Decimal,
    pub purchase_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::order_gift_certificate::Entity")]
    OrderGiftCertificate,
    #[sea_orm(has_many = "super::purchase::Entity")]
    Purchase,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
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

impl Related<super::gift_certificate::Entity> for Entity {
    fn to() -> RelationDef {
        super::order_gift_certificate::Relation::GiftCertificate.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::order_gift_certificate::Relation::Order.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
