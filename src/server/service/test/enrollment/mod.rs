use super::mail_stub;
use crate::server::{
    data::enrollment::EnrollmentRepository,
    error::{enrollment::EnrollmentRejection, AppError},
    service::enrollment::EnrollmentService,
};
use test_utils::{builder::TestBuilder, factory};

mod enroll;
