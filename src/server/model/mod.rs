//! Server-side domain models and operation parameters.
//!
//! Repositories convert SeaORM entities into these types at the data boundary and
//! controllers convert them into DTOs at the HTTP boundary. Parameter types carry
//! already-validated input into services.

pub mod admin;
pub mod auth;
pub mod classroom;
pub mod enrollment;
pub mod instructor;
pub mod schedule;
pub mod student;
pub mod submission;

/// Number of pages needed to show `total` items `per_page` at a time.
pub fn total_pages(total: u64, per_page: u64) -> u64 {
    if per_page > 0 {
        total.div_ceil(per_page)
    } else {
        0
    }
}
