use crate::server::{
    data::{order::OrderRepository, test::params, CrudRepository},
    error::AppError,
    model::order::CreateOrderParams,
    search::Searchable,
};
use rust_decimal::Decimal;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, gift_certificate::GiftCertificateFactory, helpers},
};

mod create;
mod search;
