//! Password credential hashing and verification.
//!
//! New credentials are Argon2id PHC strings with a random per-record salt.
//! Verification also accepts the `pbkdf2:sha256:<iterations>$<salt>$<hex>`
//! format written by the previous deployment, so imported accounts keep working.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use pbkdf2::pbkdf2_hmac;
use serde_json::json;
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::error::AppError;

/// Prefix of credentials in the legacy PBKDF2 format.
const LEGACY_PREFIX: &str = "pbkdf2:";

/// SHA-256 output size; legacy digests are never truncated.
const LEGACY_DIGEST_LEN: usize = 32;

/// Iteration count assumed when a legacy credential omits it.
const LEGACY_DEFAULT_ITERATIONS: u32 = 260_000;

/// Hashes a plaintext password into an Argon2id PHC string.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the hasher rejects its parameters.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::internal("Password hashing failed", json!({ "reason": e.to_string() })))
}

/// Checks `password` against a stored credential.
///
/// Malformed or unsupported credentials never verify.
pub fn verify_password(password: &str, credential: &str) -> bool {
    if credential.starts_with(LEGACY_PREFIX) {
        return verify_legacy_pbkdf2(password, credential);
    }

    match PasswordHash::new(credential) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

/// Verifies `pbkdf2:sha256[:<iterations>]$<salt>$<hex digest>`.
fn verify_legacy_pbkdf2(password: &str, credential: &str) -> bool {
    let mut sections = credential.splitn(3, '$');
    let (Some(method), Some(salt), Some(digest)) =
        (sections.next(), sections.next(), sections.next())
    else {
        return false;
    };

    let mut method_parts = method.split(':');
    if method_parts.next() != Some("pbkdf2") || method_parts.next() != Some("sha256") {
        return false;
    }

    let iterations = match method_parts.next() {
        Some(raw) => match raw.parse::<u32>() {
            Ok(n) if n > 0 => n,
            _ => return false,
        },
        None => LEGACY_DEFAULT_ITERATIONS,
    };

    let Ok(expected) = hex::decode(digest) else {
        return false;
    };
    if expected.len() != LEGACY_DIGEST_LEN {
        return false;
    }

    let mut derived = vec![0u8; expected.len()];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt.as_bytes(), iterations, &mut derived);

    derived.ct_eq(&expected).into()
}
