//! Startup validation of the configuration.
//!
//! Four checks run unconditionally in a fixed sequence. Each one may mutate
//! the configuration in place and report the correction through the injected
//! warning sink; rerunning the sequence on an already-validated configuration
//! changes nothing. Tuning mistakes degrade to safe defaults rather than
//! failing startup; only a strategy that rejects its configured usage aborts,
//! because no safe substitute exists for that.

use crate::domain::AttributeModel;
use crate::errors::Result;
use crate::observability::WarningSink;
use crate::secrets::SecretUsage;

use super::Config;

/// Fixed prefix on every configuration warning.
const WARNING_TAG: &str = "[TOLLGATE]";

/// The two external model schemas consulted when validating custom access
/// token attributes.
pub struct ConfigModels<'a> {
    pub access_token_model: &'a dyn AttributeModel,
    pub access_grant_model: &'a dyn AttributeModel,
}

impl Config {
    /// Validate the configuration, correcting unsafe combinations in place.
    ///
    /// Runs once, single-threaded, before any request serving begins. The
    /// only error path is a secret strategy rejecting its configured usage.
    pub fn validate(
        &mut self,
        models: &ConfigModels<'_>,
        warnings: &dyn WarningSink,
    ) -> Result<()> {
        self.validate_reuse_access_token_value(warnings);
        self.validate_token_reuse_limit(warnings);
        self.validate_secret_strategies()?;
        self.validate_custom_access_token_attributes(models, warnings);
        Ok(())
    }

    /// Reusing a token requires restoring its secret later; with a one-way
    /// token strategy the combination is unsound, so reuse is disabled.
    fn validate_reuse_access_token_value(&mut self, warnings: &dyn WarningSink) {
        if !self.reuse_access_token || self.token_secret_strategy.allows_restoring_secrets() {
            return;
        }

        warnings.warn(&format!(
            "{} You have configured both reuse_access_token AND '{}' strategy which cannot \
             restore tokens. This combination is unsupported. reuse_access_token will be disabled",
            WARNING_TAG,
            self.token_secret_strategy.name()
        ));
        self.reuse_access_token = false;
    }

    /// The reuse limit only matters while reuse is enabled; out-of-range
    /// values are reset to the default of 100.
    fn validate_token_reuse_limit(&mut self, warnings: &dyn WarningSink) {
        if !self.reuse_access_token
            || (self.token_reuse_limit > 0 && self.token_reuse_limit <= 100)
        {
            return;
        }

        warnings.warn(&format!(
            "{} You have configured an invalid value for token_reuse_limit option. \
             It will be set to default 100",
            WARNING_TAG
        ));
        self.token_reuse_limit = 100;
    }

    /// An invalid (strategy, usage) pairing is a programmer error and fatal.
    fn validate_secret_strategies(&self) -> Result<()> {
        self.token_secret_strategy.validate_for(SecretUsage::Token)?;
        self.application_secret_strategy.validate_for(SecretUsage::Application)?;
        Ok(())
    }

    /// Every configured custom attribute must exist on both the access-token
    /// and the access-grant model; unrecognized attributes are warned about
    /// once per (model, attribute) pair and dropped so downstream code never
    /// references a non-existent attribute.
    fn validate_custom_access_token_attributes(
        &mut self,
        models: &ConfigModels<'_>,
        warnings: &dyn WarningSink,
    ) {
        if self.custom_access_token_attributes.is_empty() {
            return;
        }

        let mut unrecognized = Vec::new();
        for attribute in &self.custom_access_token_attributes {
            for model in [models.access_token_model, models.access_grant_model] {
                if model.has_attribute(attribute) {
                    continue;
                }

                warnings.warn(&format!(
                    "{} {} does not respond to custom attribute '{}'. \
                     This custom attribute will be ignored.",
                    WARNING_TAG,
                    model.name(),
                    attribute
                ));
                unrecognized.push(attribute.clone());
            }
        }

        self.custom_access_token_attributes.retain(|attribute| !unrecognized.contains(attribute));
    }
}
