//! Database repository layer for all domain entities.
//!
//! One repository per table. Repositories use SeaORM entity models internally and
//! return domain models, except where a caller needs a column the domain model
//! hides (password hashes for login).

pub mod admin;
pub mod classroom;
pub mod enrollment;
pub mod instructor;
pub mod student;
pub mod student_file;
