//! Identity strategy: secrets are stored verbatim.

use crate::domain::SecretRecord;
use crate::errors::{Error, Result};

use super::SecretStrategy;

/// Stores secrets exactly as presented.
///
/// The stored value is the plaintext itself, so restoring is trivially
/// supported. Verification still goes through the shared constant-time
/// comparison.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl SecretStrategy for Plain {
    fn name(&self) -> &'static str {
        "plain"
    }

    fn transform_secret(&self, plaintext: &str) -> Result<String> {
        Ok(plaintext.to_string())
    }

    fn restore_secret(&self, record: &dyn SecretRecord, attribute: &str) -> Result<String> {
        record.stored_attribute(attribute).ok_or_else(|| {
            Error::config(format!("record has no stored value for attribute '{}'", attribute))
        })
    }

    fn allows_restoring_secrets(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SecretRecord;

    struct OneAttribute(&'static str, &'static str);

    impl SecretRecord for OneAttribute {
        fn stored_attribute(&self, attribute: &str) -> Option<String> {
            (attribute == self.0).then(|| self.1.to_string())
        }
    }

    #[test]
    fn transform_is_identity() {
        assert_eq!(Plain.transform_secret("foo").unwrap(), "foo");
    }

    #[test]
    fn restores_the_stored_value() {
        let record = OneAttribute("token", "sekret");
        assert!(Plain.allows_restoring_secrets());
        assert_eq!(Plain.restore_secret(&record, "token").unwrap(), "sekret");
        assert!(Plain.restore_secret(&record, "missing").is_err());
    }

    #[test]
    fn matches_compare_verbatim() {
        assert!(Plain.secret_matches(Some("foo"), Some("foo")));
        assert!(!Plain.secret_matches(Some("foo"), Some("bar")));
        assert!(!Plain.secret_matches(Some(""), Some("foo")));
        assert!(!Plain.secret_matches(Some("foo"), None));
        assert!(!Plain.secret_matches(None, Some("foo")));
    }
}
