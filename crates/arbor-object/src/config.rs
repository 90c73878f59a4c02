//! Walker configuration.
//!
//! ```toml
//! max_depth = 1024
//! skip_missing_objects = true
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ObjectError, ObjectResult};
use crate::walker::MAX_TREE_DEPTH;

/// Tunables for [`crate::TreeWalker`] and the iterators built on it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkerConfig {
    /// Maximum number of frames on the walker stack, root included.
    pub max_depth: usize,
    /// Skip entries whose object is absent from the store instead of failing.
    pub skip_missing_objects: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_TREE_DEPTH,
            skip_missing_objects: true,
        }
    }
}

impl WalkerConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> ObjectResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ObjectResult<()> {
        if self.max_depth == 0 {
            return Err(ObjectError::InvalidConfig(
                "max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = WalkerConfig::default();
        assert_eq!(config.max_depth, 1024);
        assert!(config.skip_missing_objects);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_document_uses_defaults() {
        assert_eq!(WalkerConfig::from_toml_str("").unwrap(), WalkerConfig::default());
    }

    #[test]
    fn partial_document() {
        let config = WalkerConfig::from_toml_str("max_depth = 16").unwrap();
        assert_eq!(config.max_depth, 16);
        assert!(config.skip_missing_objects);
    }

    #[test]
    fn zero_depth_rejected() {
        let err = WalkerConfig::from_toml_str("max_depth = 0").unwrap_err();
        assert!(matches!(err, ObjectError::InvalidConfig(_)));
    }

    #[test]
    fn type_mismatch_is_parse_error() {
        let err = WalkerConfig::from_toml_str("skip_missing_objects = \"yes\"").unwrap_err();
        assert!(matches!(err, ObjectError::ConfigParse(_)));
    }

    #[test]
    fn toml_roundtrip() {
        let config = WalkerConfig {
            max_depth: 8,
            skip_missing_objects: false,
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(WalkerConfig::from_toml_str(&text).unwrap(), config);
    }
}
