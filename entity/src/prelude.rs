pub use super::admin::Entity as Admin;
pub use super::classroom::Entity as Classroom;
pub use super::classroom_schedule::Entity as ClassroomSchedule;
pub use super::enrollment::Entity as Enrollment;
pub use super::instructor::Entity as Instructor;
pub use super::student::Entity as Student;
pub use super::student_file::Entity as StudentFile;
