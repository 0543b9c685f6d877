//! Serde-facing settings for selecting and building secret strategies.
//!
//! Deployment files name a strategy per usage; [`SecretStrategySettings::build`]
//! turns the named variant into a shareable [`SecretStrategy`] value. The
//! encrypted variant needs key material, loaded from the environment unless
//! supplied inline.

use std::sync::Arc;

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::secrets::{Argon2Hash, EncryptedSecrets, Plain, SecretStrategy, Sha256Hash};

/// Environment variable holding the base64-encoded 32-byte master key for
/// the encrypted strategy.
pub const ENCRYPTION_KEY_ENV: &str = "TOLLGATE_SECRET_ENCRYPTION_KEY";

/// Master key configuration for the encrypted strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptionKeyConfig {
    /// Base64-encoded 32-byte master encryption key
    pub master_key_base64: String,
}

impl EncryptionKeyConfig {
    /// Load the key from [`ENCRYPTION_KEY_ENV`].
    pub fn from_env() -> Result<Self> {
        let master_key_base64 = std::env::var(ENCRYPTION_KEY_ENV).map_err(|_| {
            Error::config(format!(
                "{} environment variable not set. Generate a key with: openssl rand -base64 32",
                ENCRYPTION_KEY_ENV
            ))
        })?;
        Ok(Self { master_key_base64 })
    }

    /// Create a development/testing configuration with a fixed key.
    /// WARNING: Only use this for development/testing, never in production!
    pub fn for_testing() -> Self {
        let test_key = [0x42u8; 32];
        Self { master_key_base64: base64::engine::general_purpose::STANDARD.encode(test_key) }
    }
}

/// A named secret strategy as it appears in deployment configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum SecretStrategySettings {
    /// Store secrets verbatim
    Plain,
    /// Hex-encoded SHA-256 digest
    Sha256Hash {
        /// Keep accepting stored values that predate the hashing migration
        #[serde(default)]
        fallback_to_plain: bool,
    },
    /// Salted Argon2id hash (application secrets only)
    Argon2,
    /// AES-256-GCM encryption
    Encrypted {
        /// Inline key material; when absent the key is read from
        /// [`ENCRYPTION_KEY_ENV`].
        #[serde(default, skip_serializing_if = "Option::is_none")]
        key: Option<EncryptionKeyConfig>,
    },
}

impl SecretStrategySettings {
    /// Build the configured strategy.
    pub fn build(&self) -> Result<Arc<dyn SecretStrategy>> {
        Ok(match self {
            Self::Plain => Arc::new(Plain),
            Self::Sha256Hash { fallback_to_plain: false } => Arc::new(Sha256Hash::new()),
            Self::Sha256Hash { fallback_to_plain: true } => {
                Arc::new(Sha256Hash::with_plain_fallback())
            }
            Self::Argon2 => Arc::new(Argon2Hash::new()),
            Self::Encrypted { key } => {
                let key = match key {
                    Some(key) => key.clone(),
                    None => EncryptionKeyConfig::from_env()?,
                };
                Arc::new(EncryptedSecrets::from_base64(&key.master_key_base64)?)
            }
        })
    }
}
