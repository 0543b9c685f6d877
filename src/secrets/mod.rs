//! # Secret Storage Strategies
//!
//! Pluggable algorithms that turn a plaintext secret (an access token or a
//! client secret) into its storage-safe representation and verify presented
//! plaintexts against stored values.
//!
//! Splitting `transform_secret` from `secret_matches` lets one-way
//! ([`Sha256Hash`], [`Argon2Hash`]) and reversible ([`Plain`],
//! [`EncryptedSecrets`]) strategies share a single comparison entry point
//! without callers branching on reversibility.
//!
//! Stored-value formats are a persistence contract: values written by one
//! process version must verify in the next, so changing the format of an
//! existing variant breaks all previously stored secrets.

mod argon2_hash;
mod encrypted;
mod plain;
mod sha256_hash;

pub use argon2_hash::Argon2Hash;
pub use encrypted::EncryptedSecrets;
pub use plain::Plain;
pub use sha256_hash::Sha256Hash;

use std::fmt;
use std::str::FromStr;

use crate::domain::SecretRecord;
use crate::errors::{Error, Result};

/// What a secret strategy is being used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecretUsage {
    /// Access token secrets
    Token,
    /// Client application secrets
    Application,
}

impl fmt::Display for SecretUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecretUsage::Token => write!(f, "token"),
            SecretUsage::Application => write!(f, "application"),
        }
    }
}

impl FromStr for SecretUsage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "token" => Ok(SecretUsage::Token),
            "application" => Ok(SecretUsage::Application),
            other => Err(Error::UnknownUsage { usage: other.to_string() }),
        }
    }
}

/// A secret storage strategy.
///
/// Implementations are stateless (any key material is immutable after
/// construction) and may be shared freely across threads.
pub trait SecretStrategy: fmt::Debug + Send + Sync {
    /// Stable identifier used in warnings and error messages.
    fn name(&self) -> &'static str;

    /// Transform a plaintext secret into its storage-safe representation.
    ///
    /// Side-effect-free. Deterministic for [`Plain`] and [`Sha256Hash`];
    /// [`EncryptedSecrets`] and [`Argon2Hash`] embed randomization (nonce,
    /// salt) that `secret_matches` does not depend on.
    fn transform_secret(&self, plaintext: &str) -> Result<String>;

    /// Recover the plaintext secret from a persisted record's stored
    /// attribute.
    ///
    /// One-way strategies fail with [`Error::UnsupportedRestore`]; callers
    /// must branch on [`allows_restoring_secrets`](Self::allows_restoring_secrets)
    /// before calling this.
    fn restore_secret(&self, record: &dyn SecretRecord, attribute: &str) -> Result<String>;

    /// Whether `restore_secret` can succeed for this strategy.
    fn allows_restoring_secrets(&self) -> bool;

    /// Check that this strategy may be used for the given usage.
    ///
    /// The default policy allows both usages; a strategy may restrict itself
    /// by failing with [`Error::InvalidUsage`]. A rejected pairing is a
    /// programmer error with no safe substitute and aborts startup.
    fn validate_for(&self, usage: SecretUsage) -> Result<()> {
        let _ = usage;
        Ok(())
    }

    /// Whether `secret_matches` additionally accepts stored values that were
    /// never transformed (migration from plaintext storage). Default: no.
    fn fallback_to_plain(&self) -> bool {
        false
    }

    /// Verify a presented plaintext against a stored value.
    ///
    /// Returns `false`, never an error, when either side is absent or empty:
    /// "nothing to compare" is not a match. Comparison of secret material
    /// runs in constant time.
    fn secret_matches(&self, input: Option<&str>, stored: Option<&str>) -> bool {
        let (Some(input), Some(stored)) = (input, stored) else {
            return false;
        };
        if input.is_empty() || stored.is_empty() {
            return false;
        }
        let transformed = match self.transform_secret(input) {
            Ok(value) => value,
            Err(_) => return false,
        };
        if secure_compare(transformed.as_bytes(), stored.as_bytes()) {
            return true;
        }
        self.fallback_to_plain() && secure_compare(input.as_bytes(), stored.as_bytes())
    }
}

/// Fixed-time byte comparison.
///
/// Mismatching lengths return early; the comparison itself never short
/// circuits on content, so timing reveals nothing about partial matches.
pub fn secure_compare(a: &[u8], b: &[u8]) -> bool {
    ring::constant_time::verify_slices_are_equal(a, b).is_ok()
}
