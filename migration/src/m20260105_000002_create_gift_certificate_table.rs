use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GiftCertificate::Table)
                    .if_not_exists()
                    .col(pk_auto(GiftCertificate::Id))
                    .col(string_uniq(GiftCertificate::Name))
                    .col(text(GiftCertificate::Description))
                    .col(decimal_len(GiftCertificate::Price, 10, 2))
                    .col(integer(GiftCertificate::Duration))
                    .col(timestamp_with_time_zone(GiftCertificate::CreateDate))
                    .col(timestamp_with_time_zone(GiftCertificate::LastUpdateDate))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GiftCertificate::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GiftCertificate {
    Table,
    Id,
    Name,
    Description,
    Price,
    Duration,
    CreateDate,
    LastUpdateDate,
}
