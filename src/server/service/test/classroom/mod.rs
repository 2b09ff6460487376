use crate::server::{
    error::AppError,
    model::{classroom::CreateClassroomParams, schedule::TimeInterval},
    service::classroom::ClassroomService,
};
use chrono::NaiveTime;
use test_utils::{builder::TestBuilder, factory};


fn params(instructor_id: i32, subject: &str) -> CreateClassroomParams {
    CreateClassroomParams {
        instructor_id,
        subject: subject.to_string(),
        link: "https://meet.example.com/room".to_string(),
        schedule: vec![TimeInterval::new(
            "Tuesday",
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(10, 50, 0).unwrap(),
        )],
    }
}
