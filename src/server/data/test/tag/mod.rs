use crate::server::{
    data::{tag::TagRepository, test::params, CrudRepository},
    error::AppError,
    model::tag::CreateTagParams,
    search::Searchable,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod search;
