//! Small helpers shared across layers: identifier and time parsing, request field
//! validation, and password hashing.

pub mod parse;
pub mod password;
pub mod validation;
