//! Resolver tuning.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Container nesting bound; deeper properties are treated as unmappable.
const fn default_max_property_depth() -> usize {
    32
}

const fn default_parallel() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResolverConfig {
    #[serde(default = "default_max_property_depth")]
    pub max_property_depth: usize,

    /// Build RepLayout and ClassNetCache concurrently.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_property_depth: default_max_property_depth(),
            parallel: default_parallel(),
        }
    }
}

impl ResolverConfig {
    /// Reject values the resolver cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `max_property_depth` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_property_depth == 0 {
            return Err(ConfigError::InvalidValue {
                field: "resolver.max_property_depth".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ResolverConfig::default();
        assert_eq!(config.max_property_depth, 32);
        assert!(config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_depth_is_rejected() {
        let config = ResolverConfig {
            max_property_depth: 0,
            ..ResolverConfig::default()
        };
        let err = config.validate().expect_err("zero depth");
        assert!(err.to_string().contains("resolver.max_property_depth"));
    }
}
