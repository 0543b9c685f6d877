//! # Tollgate
//!
//! Credential secret handling and configuration integrity for an
//! authorization server.
//!
//! ## Core Components
//!
//! - **Secret strategies** ([`secrets`]): interchangeable algorithms that
//!   turn a plaintext secret into a storage-safe value and verify presented
//!   plaintexts against stored values in constant time.
//! - **Configuration validation** ([`config`]): a fixed sequence of
//!   cross-field checks run once at startup, auto-correcting unsafe
//!   combinations and reporting every correction through an injected
//!   warning sink.
//!
//! The surrounding authorization server (request handling, persistence,
//! model schemas, log transport) is consumed through the narrow traits in
//! [`domain`] and [`observability`].
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use tollgate::secrets::Sha256Hash;
//! use tollgate::{Config, ConfigModels, TracingWarnings};
//!
//! struct Schema(&'static str, &'static [&'static str]);
//!
//! impl tollgate::domain::AttributeModel for Schema {
//!     fn name(&self) -> &str {
//!         self.0
//!     }
//!     fn has_attribute(&self, attribute: &str) -> bool {
//!         self.1.contains(&attribute)
//!     }
//! }
//!
//! # fn main() -> tollgate::Result<()> {
//! let mut config = Config::new(Arc::new(Sha256Hash::new()), Arc::new(Sha256Hash::new()));
//! config.reuse_access_token = true;
//!
//! let token_model = Schema("AccessToken", &["token"]);
//! let grant_model = Schema("AccessGrant", &["token"]);
//! let models = ConfigModels {
//!     access_token_model: &token_model,
//!     access_grant_model: &grant_model,
//! };
//!
//! config.validate(&models, &TracingWarnings)?;
//! assert!(!config.reuse_access_token); // downgraded: SHA-256 cannot restore tokens
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod observability;
pub mod secrets;

// Re-export commonly used types and traits
pub use config::{Config, ConfigModels, EncryptionKeyConfig, SecretStrategySettings};
pub use errors::{Error, Result};
pub use observability::{TracingWarnings, WarningSink};
pub use secrets::{SecretStrategy, SecretUsage};

/// Library version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name from Cargo.toml
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
