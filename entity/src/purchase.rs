use sea_orm::entity::prelude::*;

/// Stored value of `status` while the certificate can still be redeemed.
pub const STATUS_ACTIVE: &str = "ACTIVE";
/// Stored value of `status` once `end_date` has passed.
pub const STATUS_EXPIRED: &str = "EXPIRED";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "purchase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub gift_certificate_id: i32,
    pub order_id: i32,
    pub start_date: DateTimeUtc,
    pub end_date: DateTimeUtc,
    pub status: String,
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
    #[sea_orm(
        belongs_to = "super::gift_certificate::Entity",
        from = "Column::GiftCertificateId",
        to = "super::gift_certificate::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    GiftCertificate,
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Order,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::gift_certificate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GiftCertificate.def()
    }
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
