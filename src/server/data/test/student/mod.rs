use crate::server::{
    data::student::StudentRepository,
    model::student::{CreateStudentParams, UpdateStudentParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod contact_taken;
mod create;
mod get_paginated;
