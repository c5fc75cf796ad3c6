use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000002_create_gift_certificate_table::GiftCertificate,
    m20260105_000004_create_user_table::User, m20260106_000005_create_order_table::Order,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Purchase::Table)
                    .if_not_exists()
                    .col(pk_auto(Purchase::Id))
                    .col(integer(Purchase::UserId))
                    .col(integer(Purchase::GiftCertificateId))
                    .col(integer(Purchase::OrderId))
                    .col(timestamp_with_time_zone(Purchase::StartDate))
                    .col(timestamp_with_time_zone(Purchase::EndDate))
                    .col(string_len(Purchase::Status, 16))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_purchase_user_id")
                            .from(Purchase::Table, Purchase::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_purchase_gift_certificate_id")
                            .from(Purchase::Table, Purchase::GiftCertificateId)
                            .to(GiftCertificate::Table, GiftCertificate::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_purchase_order_id")
                            .from(Purchase::Table, Purchase::OrderId)
                            .to(Order::Table, Order::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_purchase_status_end_date")
                    .table(Purchase::Table)
                    .col(Purchase::Status)
                    .col(Purchase::EndDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Purchase::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Purchase {
    Table,
    Id,
    UserId,
    GiftCertificateId,
    OrderId,
    StartDate,
    EndDate,
    Status,
}
