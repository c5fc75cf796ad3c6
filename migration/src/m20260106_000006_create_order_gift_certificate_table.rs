use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000002_create_gift_certificate_table::GiftCertificate,
    m20260106_000005_create_order_table::Order,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderGiftCertificate::Table)
                    .if_not_exists()
                    .col(integer(OrderGiftCertificate::OrderId))
                    .col(integer(OrderGiftCertificate::GiftCertificateId))
                    .primary_key(
                        Index::create()
                            .col(OrderGiftCertificate::OrderId)
                            .col(OrderGiftCertificate::GiftCertificateId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_gift_certificate_order_id")
                            .from(OrderGiftCertificate::Table, OrderGiftCertificate::OrderId)
                            .to(Order::Table, Order::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_gift_certificate_gift_certificate_id")
                            .from(
                                OrderGiftCertificate::Table,
                                OrderGiftCertificate::GiftCertificateId,
                            )
                            .to(GiftCertificate::Table, GiftCertificate::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderGiftCertificate::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderGiftCertificate {
    Table,
    OrderId,
    GiftCertificateId,
}
