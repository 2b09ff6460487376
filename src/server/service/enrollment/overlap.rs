use chrono::NaiveTime;

use crate::server::model::schedule::TimeInterval;

/// Decides whether an existing weekly slot collides with a candidate slot.
///
/// Slots on different days never collide. On the same day the existing slot
/// collides when any of these hold:
///
/// - it starts when the candidate starts
/// - it ends when the candidate starts
/// - it starts strictly inside the candidate
/// - it ends strictly inside the candidate
///
/// The rule is not symmetric. A candidate lying strictly inside a longer existing
/// slot is not reported, and swapping the arguments can change the answer.
pub fn overlaps(candidate: &TimeInterval, existing: &TimeInterval) -> bool {
    if !candidate.same_day(existing) {
        return false;
    }

    let inside = |t: NaiveTime| candidate.start_time < t && t < candidate.end_time;

    existing.start_time == candidate.start_time
        || existing.end_time == candidate.start_time
        || inside(existing.start_time)
        || inside(existing.end_time)
}
