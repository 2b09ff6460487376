use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Password hashing or hash parsing failed.
    ///
    /// argon2 errors do not implement `std::error::Error`, so only the message is kept.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}
