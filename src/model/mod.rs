//! API data transfer objects.
//!
//! Request and response bodies exchanged over HTTP. Server-side domain models convert
//! into these at the controller boundary; nothing in here touches the database.

pub mod admin;
pub mod api;
pub mod auth;
pub mod classroom;
pub mod enrollment;
pub mod instructor;
pub mod student;
pub mod submission;
