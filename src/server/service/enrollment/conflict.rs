use crate::server::{
    model::{enrollment::ScheduledClass, schedule::TimeInterval},
    service::enrollment::overlap::overlaps,
    util::parse::format_time,
};

/// Lists every existing slot the candidate collides with.
///
/// Each conflict reads `"<subject> at <day> <HH:MM:SS>"` using the existing slot's
/// day and start time, in the order the classes and their slots were given. Slots
/// on other days are skipped without evaluation.
pub fn conflicts(candidate: &TimeInterval, existing: &[ScheduledClass]) -> Vec<String> {
    existing
        .iter()
        .flat_map(|class| {
            class
                .schedule
                .iter()
                .filter(|slot| slot.same_day(candidate))
                .filter(|slot| overlaps(candidate, slot))
                .map(move |slot| describe(&class.subject, slot))
        })
        .collect()
}

fn describe(subject: &str, slot: &TimeInterval) -> String {
    format!("{} at {} {}", subject, slot.day, format_time(slot.start_time))
}
