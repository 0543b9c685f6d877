//! Reversible secret storage using AES-256-GCM
//!
//! Secrets are encrypted at rest with a 32-byte master key and a unique
//! random nonce per secret. The stored value is
//! `base64(nonce || ciphertext || tag)`, a single string suitable for one
//! record attribute.
//!
//! Because every transform draws a fresh nonce, two transforms of the same
//! plaintext differ; verification therefore restores the stored plaintext and
//! compares it in constant time instead of re-encrypting.

use base64::Engine;
use ring::aead::{self, Aad, BoundKey, Nonce, NonceSequence, UnboundKey, AES_256_GCM};
use ring::rand::{SecureRandom, SystemRandom};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::domain::SecretRecord;
use crate::errors::{Error, Result};

use super::{secure_compare, SecretStrategy};

/// Size of AES-256-GCM nonce in bytes
const NONCE_SIZE: usize = 12;

/// Size of AES-256-GCM tag in bytes
const TAG_SIZE: usize = 16;

/// Master key material, cleared on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
struct MasterKey([u8; 32]);

/// Single-use nonce sequence for AES-GCM
struct SingleNonce {
    nonce: Option<[u8; NONCE_SIZE]>,
}

impl SingleNonce {
    fn new(nonce_bytes: [u8; NONCE_SIZE]) -> Self {
        Self { nonce: Some(nonce_bytes) }
    }
}

impl NonceSequence for SingleNonce {
    fn advance(&mut self) -> std::result::Result<Nonce, ring::error::Unspecified> {
        self.nonce.take().map(Nonce::assume_unique_for_key).ok_or(ring::error::Unspecified)
    }
}

/// Reversible strategy: AES-256-GCM with a process-wide master key.
pub struct EncryptedSecrets {
    key: MasterKey,
    rng: SystemRandom,
}

impl EncryptedSecrets {
    /// Create a strategy from raw 32-byte key material.
    pub fn from_key_bytes(key: [u8; 32]) -> Self {
        Self { key: MasterKey(key), rng: SystemRandom::new() }
    }

    /// Create a strategy from a base64-encoded 32-byte key.
    pub fn from_base64(master_key_base64: &str) -> Result<Self> {
        let key_bytes = base64::engine::general_purpose::STANDARD
            .decode(master_key_base64)
            .map_err(|e| Error::config(format!("Invalid base64 in master encryption key: {}", e)))?;

        if key_bytes.len() != 32 {
            return Err(Error::config(format!(
                "Master encryption key must be 32 bytes (256 bits), got {} bytes",
                key_bytes.len()
            )));
        }

        let mut key_array = [0u8; 32];
        key_array.copy_from_slice(&key_bytes);
        Ok(Self::from_key_bytes(key_array))
    }

    fn decrypt(&self, stored: &str) -> Result<String> {
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(stored)
            .map_err(|e| Error::crypto(format!("Stored secret is not valid base64: {}", e)))?;

        if decoded.len() < NONCE_SIZE + TAG_SIZE {
            return Err(Error::crypto("Stored secret too short (missing nonce or tag)"));
        }

        let mut nonce_bytes = [0u8; NONCE_SIZE];
        nonce_bytes.copy_from_slice(&decoded[..NONCE_SIZE]);

        let unbound_key = UnboundKey::new(&AES_256_GCM, &self.key.0)
            .map_err(|_| Error::crypto("Failed to create decryption key"))?;
        let mut opening_key = aead::OpeningKey::new(unbound_key, SingleNonce::new(nonce_bytes));

        let mut buffer = decoded[NONCE_SIZE..].to_vec();
        let plaintext = opening_key
            .open_in_place(Aad::empty(), &mut buffer)
            .map_err(|_| Error::crypto("Failed to decrypt secret - authentication failed"))?;

        String::from_utf8(plaintext.to_vec())
            .map_err(|_| Error::crypto("Decrypted secret is not valid UTF-8"))
    }
}

impl SecretStrategy for EncryptedSecrets {
    fn name(&self) -> &'static str {
        "encrypted"
    }

    fn transform_secret(&self, plaintext: &str) -> Result<String> {
        let mut nonce_bytes = [0u8; NONCE_SIZE];
        self.rng
            .fill(&mut nonce_bytes)
            .map_err(|_| Error::crypto("Failed to generate random nonce for encryption"))?;

        let unbound_key = UnboundKey::new(&AES_256_GCM, &self.key.0)
            .map_err(|_| Error::crypto("Failed to create encryption key"))?;
        let mut sealing_key = aead::SealingKey::new(unbound_key, SingleNonce::new(nonce_bytes));

        let mut ciphertext = plaintext.as_bytes().to_vec();
        ciphertext.reserve(TAG_SIZE);
        sealing_key
            .seal_in_place_append_tag(Aad::empty(), &mut ciphertext)
            .map_err(|_| Error::crypto("Failed to encrypt secret"))?;

        let mut stored = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
        stored.extend_from_slice(&nonce_bytes);
        stored.extend_from_slice(&ciphertext);
        Ok(base64::engine::general_purpose::STANDARD.encode(stored))
    }

    fn restore_secret(&self, record: &dyn SecretRecord, attribute: &str) -> Result<String> {
        let stored = record.stored_attribute(attribute).ok_or_else(|| {
            Error::config(format!("record has no stored value for attribute '{}'", attribute))
        })?;
        self.decrypt(&stored)
    }

    fn allows_restoring_secrets(&self) -> bool {
        true
    }

    fn secret_matches(&self, input: Option<&str>, stored: Option<&str>) -> bool {
        let (Some(input), Some(stored)) = (input, stored) else {
            return false;
        };
        if input.is_empty() || stored.is_empty() {
            return false;
        }
        match self.decrypt(stored) {
            Ok(plaintext) => secure_compare(plaintext.as_bytes(), input.as_bytes()),
            Err(_) => false,
        }
    }
}

impl std::fmt::Debug for EncryptedSecrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncryptedSecrets").field("key", &"[REDACTED]").finish()
    }
}
