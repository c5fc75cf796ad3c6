pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_tag_table;
mod m20260105_000002_create_gift_certificate_table;
mod m20260105_000003_create_gift_certificate_tag_table;
mod m20260105_000004_create_user_table;
mod m20260106_000005_create_order_table;
mod m20260106_000006_create_order_gift_certificate_table;
mod m20260106_000007_create_purchase_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_tag_table::Migration),
            Box::new(m20260105_000002_create_gift_certificate_table::Migration),
            Box::new(m20260105_000003_create_gift_certificate_tag_table::Migration),
            Box::new(m20260105_000004_create_user_table::Migration),
            Box::new(m20260106_000005_create_order_table::Migration),
            Box::new(m20260106_000006_create_order_gift_certificate_table::Migration),
            Box::new(m20260106_000007_create_purchase_table::Migration),
        ]
    }
}
