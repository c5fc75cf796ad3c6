use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_tag_table::Tag,
    m20260105_000002_create_gift_certificate_table::GiftCertificate,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GiftCertificateTag::Table)
                    .if_not_exists()
                    .col(integer(GiftCertificateTag::GiftCertificateId))
                    .col(integer(GiftCertificateTag::TagId))
                    .primary_key(
                        Index::create()
                            .col(GiftCertificateTag::GiftCertificateId)
                            .col(GiftCertificateTag::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gift_certificate_tag_gift_certificate_id")
                            .from(
                                GiftCertificateTag::Table,
                                GiftCertificateTag::GiftCertificateId,
                            )
                            .to(GiftCertificate::Table, GiftCertificate::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_gift_certificate_tag_tag_id")
                            .from(GiftCertificateTag::Table, GiftCertificateTag::TagId)
                            .to(Tag::Table, Tag::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GiftCertificateTag::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GiftCertificateTag {
    Table,
    GiftCertificateId,
    TagId,
}
