//! # Error Handling
//!
//! Error types for the tollgate library using `thiserror`.
//!
//! Two of the variants carry contract weight: [`Error::UnsupportedRestore`]
//! signals that a one-way strategy was asked to recover a plaintext, and
//! [`Error::InvalidUsage`] signals a (strategy, usage) pairing that has no
//! safe substitute and must abort startup. Everything else the configuration
//! validator detects is corrected in place and reported as a warning instead
//! of surfacing here.

/// Custom result type for tollgate operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the tollgate library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Configuration errors (malformed key material, missing stored values)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Cryptographic operation failures (encryption, decryption, hashing)
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// A one-way secret strategy was asked to restore a plaintext secret
    #[error("'{strategy}' does not support restoring plaintext secrets")]
    UnsupportedRestore { strategy: &'static str },

    /// A secret strategy rejected the usage it was configured for
    #[error("'{strategy}' can not be used for {usage} secrets")]
    InvalidUsage { strategy: &'static str, usage: String },

    /// A usage name that is neither `token` nor `application`
    #[error("unknown secret usage '{usage}', expected 'token' or 'application'")]
    UnknownUsage { usage: String },
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a new crypto error
    pub fn crypto<S: Into<String>>(message: S) -> Self {
        Self::Crypto(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_usage_message_names_the_usage() {
        let err = Error::UnknownUsage { usage: "wat".into() };
        assert!(err.to_string().contains("wat"));
    }

    #[test]
    fn invalid_usage_message_names_strategy_and_usage() {
        let err = Error::InvalidUsage { strategy: "argon2", usage: "token".into() };
        let message = err.to_string();
        assert!(message.contains("argon2"));
        assert!(message.contains("token"));
    }
}
