//! # Domain Collaborators
//!
//! Abstract capabilities the library consumes from the surrounding
//! authorization server. The concrete model and storage shapes live outside
//! this crate; only the narrow read access defined here crosses the boundary.

/// Read access to an external model's schema, used when validating the
/// configured custom access token attributes.
pub trait AttributeModel {
    /// Human-readable model name used in warnings (e.g. `AccessToken`).
    fn name(&self) -> &str;

    /// Whether the model exposes an attribute with the given name.
    fn has_attribute(&self, attribute: &str) -> bool;
}

/// Read access to a persisted record's stored secret attribute, used by
/// reversible strategies to recover a plaintext.
pub trait SecretRecord {
    /// The stored (transformed) value of the given attribute, if present.
    fn stored_attribute(&self, attribute: &str) -> Option<String>;
}
