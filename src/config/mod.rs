//! # Configuration
//!
//! The authorization server's mutable settings object and its startup
//! validation.
//!
//! A [`Config`] is populated once at startup, [`Config::validate`] runs
//! exactly once before any request handling begins, and the value is
//! read-only for the rest of the process. Validation auto-corrects unsafe
//! combinations and reports every correction through the injected
//! [`WarningSink`](crate::observability::WarningSink); only an invalid
//! (strategy, usage) pairing is fatal.

mod settings;
mod validation;

pub use settings::{EncryptionKeyConfig, SecretStrategySettings, ENCRYPTION_KEY_ENV};
pub use validation::ConfigModels;

use std::sync::Arc;

use crate::secrets::{Plain, SecretStrategy};

/// Process-wide authorization server settings relevant to secret handling.
#[derive(Debug, Clone)]
pub struct Config {
    /// Whether existing unexpired access tokens may be served again instead
    /// of minting new ones.
    pub reuse_access_token: bool,

    /// Percentage of a token's lifetime below which it is still eligible for
    /// reuse. Meaningful range is (0, 100]; out-of-range values are reset to
    /// 100 during validation.
    pub token_reuse_limit: u32,

    /// Strategy applied to access token secrets.
    pub token_secret_strategy: Arc<dyn SecretStrategy>,

    /// Strategy applied to client application secrets.
    pub application_secret_strategy: Arc<dyn SecretStrategy>,

    /// Additional attribute names the access-token and access-grant models
    /// are expected to expose. Unrecognized entries are dropped during
    /// validation.
    pub custom_access_token_attributes: Vec<String>,
}

impl Config {
    /// Create a configuration with the given strategies and safe defaults
    /// for the remaining fields.
    pub fn new(
        token_secret_strategy: Arc<dyn SecretStrategy>,
        application_secret_strategy: Arc<dyn SecretStrategy>,
    ) -> Self {
        Self {
            reuse_access_token: false,
            token_reuse_limit: 100,
            token_secret_strategy,
            application_secret_strategy,
            custom_access_token_attributes: Vec::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Arc::new(Plain), Arc::new(Plain))
    }
}
