use crate::server::{
    data::{test::params, user::UserRepository, CrudRepository},
    error::AppError,
    model::user::{CreateUserParams, UpdateUserParams},
    search::Searchable,
};
use rust_decimal::Decimal;
use test_utils::{
    builder::TestBuilder,
    factory::{self, gift_certificate::GiftCertificateFactory, helpers},
};

mod create;
mod search;
mod tag_usage;
