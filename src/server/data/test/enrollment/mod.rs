use crate::server::{
    data::enrollment::EnrollmentRepository, model::enrollment::EnrollmentOutcome,
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create_within_capacity;
mod roster;
