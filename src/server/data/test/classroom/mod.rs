use crate::server::{
    data::classroom::ClassroomRepository,
    model::{classroom::CreateClassroomParams, schedule::TimeInterval},
};
use chrono::NaiveTime;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_ids;

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}
