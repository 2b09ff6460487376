//! SeaORM entity models for the school database.
//!
//! One module per table. The `prelude` re-exports every entity under its
//! PascalCase name so callers can write `entity::prelude::Student::find()`.

pub mod prelude;

pub mod admin;
pub mod classroom;
pub mod classroom_schedule;
pub mod enrollment;
pub mod instructor;
pub mod student;
pub mod student_file;
