use crate::server::{
    error::enrollment::EnrollmentRejection,
    model::{
        classroom::CLASSROOM_CAPACITY,
        enrollment::{ClassroomSnapshot, StudentScheduleSnapshot},
    },
    service::enrollment::conflict::conflicts,
};

/// Applies the enrollment rules that need the loaded snapshots.
///
/// Identifier and existence checks happen before the snapshots can be read, so
/// this covers the remaining rules in order, stopping at the first failure:
///
/// 1. the roster must not already contain the student
/// 2. no slot of the classroom may collide with a class the student attends
/// 3. the roster must be below capacity
///
/// Conflicts from every slot of the classroom are reported together, each
/// description once, in the order first found.
pub fn decide(
    student: &StudentScheduleSnapshot,
    classroom: &ClassroomSnapshot,
) -> Result<(), EnrollmentRejection> {
    if classroom.roster.contains(&student.student_id) {
        return Err(EnrollmentRejection::AlreadyEnrolled);
    }

    let mut found: Vec<String> = Vec::new();
    for description in classroom
        .schedule
        .iter()
        .flat_map(|candidate| conflicts(candidate, &student.classes))
    {
        if !found.contains(&description) {
            found.push(description);
        }
    }

    if !found.is_empty() {
        return Err(EnrollmentRejection::ScheduleConflict(found));
    }

    if classroom.roster.len() >= CLASSROOM_CAPACITY {
        return Err(EnrollmentRejection::CapacityExceeded);
    }

    Ok(())
}
