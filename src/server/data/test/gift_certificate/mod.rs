use crate::server::{
    data::{gift_certificate::GiftCertificateRepository, test::params, CrudRepository},
    error::AppError,
    model::gift_certificate::{CreateGiftCertificateParams, UpdateGiftCertificateParams},
    search::{policy::SortDirection, Searchable},
};
use rust_decimal::Decimal;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, gift_certificate::GiftCertificateFactory},
};

mod create;
mod search;
mod tags;
mod update;

fn create_params(name: &str, tags: &[&str]) -> CreateGiftCertificateParams {
    CreateGiftCertificateParams {
        name: name.to_string(),
        description: format!("{} description", name),
        price: Decimal::new(2550, 2),
        duration: 14,
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
    }
}

fn tag_names(certificate: &crate::server::model::gift_certificate::GiftCertificate) -> Vec<String> {
    certificate
        .tags
        .as_ref()
        .map(|tags| tags.iter().map(|tag| tag.name.clone()).collect())
        .unwrap_or_default()
}
