//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce
//! business rules, coordinate several repositories per operation and work with
//! domain models rather than DTOs or entity models.

pub mod admin;
pub mod auth;
pub mod classroom;
pub mod enrollment;
pub mod instructor;
pub mod mail;
pub mod student;
pub mod submission;

#[cfg(test)]
mod test;
