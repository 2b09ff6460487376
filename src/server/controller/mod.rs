//! HTTP request handlers.
//!
//! Handlers extract the request, run `AuthGuard`, convert DTOs into validated
//! parameters, call a service and convert the result back into a DTO.

pub mod admin;
pub mod auth;
pub mod instructor;
pub mod student;

use serde::Deserialize;

/// Page selection for paginated listings; `page` is zero-based.
#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}
