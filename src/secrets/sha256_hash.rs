//! One-way SHA-256 strategy.

use sha2::{Digest, Sha256};

use crate::domain::SecretRecord;
use crate::errors::{Error, Result};

use super::SecretStrategy;

/// Stores the hex-encoded SHA-256 digest of the secret.
///
/// The digest is deterministic, so stored values can double as lookup keys.
/// Plaintexts are unrecoverable; `restore_secret` is a hard failure.
///
/// A deployment migrating from [`Plain`](super::Plain) storage can enable the
/// plaintext fallback so secrets stored before the migration keep verifying.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hash {
    fallback_to_plain: bool,
}

impl Sha256Hash {
    pub fn new() -> Self {
        Self { fallback_to_plain: false }
    }

    /// Also accept stored values that are raw plaintexts (pre-migration
    /// records). The fallback comparison is constant time as well.
    pub fn with_plain_fallback() -> Self {
        Self { fallback_to_plain: true }
    }
}

impl SecretStrategy for Sha256Hash {
    fn name(&self) -> &'static str {
        "sha256_hash"
    }

    fn transform_secret(&self, plaintext: &str) -> Result<String> {
        Ok(hex::encode(Sha256::digest(plaintext.as_bytes())))
    }

    fn restore_secret(&self, _record: &dyn SecretRecord, _attribute: &str) -> Result<String> {
        Err(Error::UnsupportedRestore { strategy: self.name() })
    }

    fn allows_restoring_secrets(&self) -> bool {
        false
    }

    fn fallback_to_plain(&self) -> bool {
        self.fallback_to_plain
    }
}
