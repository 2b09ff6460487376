use crate::server::{
    data::student_file::StudentFileRepository, model::submission::CreateStudentFileParams,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_student_and_classroom;
