//! Request-scoped authentication helpers.
//!
//! - `session` - typed access to the identity stored in the session
//! - `auth` - `AuthGuard`, the role and ownership check run at the top of handlers

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
