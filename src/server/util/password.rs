//! Argon2 password hashing.
//!
//! Hashing and verification are CPU and memory heavy, so the async entry points
//! run them on tokio's blocking pool instead of a runtime worker.

use std::sync::OnceLock;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::{internal::InternalError, AppError};

/// Stand-in hash verified against when a login names an unknown user, so that
/// branch costs as much as a wrong password.
static UNKNOWN_USER_HASH: OnceLock<String> = OnceLock::new();

/// Hashes a plaintext password into a PHC string with a fresh random salt.
pub async fn hash_password(password: &str) -> Result<String, AppError> {
    let password = password.to_owned();
    run_blocking(move || hash_blocking(&password)).await
}

/// Checks a plaintext password against a stored PHC string.
///
/// A stored value that is not a valid PHC string never verifies; it is treated as
/// a wrong password rather than an error so placeholder hashes lock the account.
pub async fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AppError> {
    let password = password.to_owned();
    let stored_hash = stored_hash.to_owned();
    run_blocking(move || Ok(verify_blocking(&password, &stored_hash))).await
}

/// Runs a full verification for a login whose username matched no account.
///
/// Always returns `Ok(false)`.
pub async fn verify_unknown_user(password: &str) -> Result<bool, AppError> {
    let password = password.to_owned();
    run_blocking(move || {
        let stand_in = unknown_user_hash()?;
        verify_blocking(&password, stand_in);
        Ok(false)
    })
    .await
}

async fn run_blocking<T, F>(work: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, InternalError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AppError::InternalError(format!("Password task join error: {}", e)))?
        .map_err(AppError::from)
}

fn hash_blocking(password: &str) -> Result<String, InternalError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| InternalError::PasswordHash(e.to_string()))
}

fn verify_blocking(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

fn unknown_user_hash() -> Result<&'static str, InternalError> {
    if let Some(hash) = UNKNOWN_USER_HASH.get() {
        return Ok(hash);
    }

    let hash = hash_blocking("no account has this password")?;
    Ok(UNKNOWN_USER_HASH.get_or_init(|| hash))
}
