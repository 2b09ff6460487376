use crate::server::{
    error::AppError,
    model::{instructor::CreateInstructorParams, student::CreateStudentParams},
    service::{instructor::InstructorService, student::StudentService},
    util::password::verify_password,
};
use test_utils::{builder::TestBuilder, factory};

mod student;
