//! Cookie service configuration.

use crate::cookies::attributes::CookieAttributes;
use serde::{Deserialize, Serialize};

#[cfg(feature = "json")]
use crate::base::cookieerror::CookieError;
#[cfg(feature = "json")]
use std::path::Path;

/// Configuration options for [`CookieService`](crate::cookies::service::CookieService).
///
/// ```json
/// { "defaults": { "path": "/", "sameSite": "Strict", "secure": true } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CookieServiceConfig {
    /// Attributes applied to every write whose own attributes leave them unset.
    pub defaults: CookieAttributes,
}

impl CookieServiceConfig {
    pub fn with_defaults(defaults: CookieAttributes) -> Self {
        Self { defaults }
    }

    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self, CookieError> {
        Ok(serde_json::from_str(json)?)
    }

    #[cfg(feature = "json")]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CookieError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| CookieError::config_io(path.display().to_string(), e))?;
        let config = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), "loaded cookie service config");
        Ok(config)
    }
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;
    use crate::cookies::attributes::SameSite;
    use std::io::Write;

    #[test]
    fn test_default_is_empty() {
        let config = CookieServiceConfig::default();
        assert_eq!(config.defaults, CookieAttributes::default());
    }

    #[test]
    fn test_from_json() {
        let config = CookieServiceConfig::from_json(
            r#"{"defaults":{"path":"/","sameSite":"Strict","secure":true}}"#,
        )
        .unwrap();
        assert_eq!(config.defaults.path.as_deref(), Some("/"));
        assert_eq!(config.defaults.same_site, Some(SameSite::Strict));
        assert_eq!(config.defaults.secure, Some(true));
    }

    #[test]
    fn test_from_json_missing_fields() {
        let config = CookieServiceConfig::from_json("{}").unwrap();
        assert_eq!(config, CookieServiceConfig::default());
    }

    #[test]
    fn test_from_json_invalid() {
        let err = CookieServiceConfig::from_json("{\"defaults\":").unwrap_err();
        assert!(matches!(err, CookieError::ConfigParse(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"defaults":{{"domain":"example.com"}}}}"#).unwrap();

        let config = CookieServiceConfig::from_file(file.path()).unwrap();
        assert_eq!(config.defaults.domain.as_deref(), Some("example.com"));
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CookieServiceConfig::from_file(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CookieError::ConfigIo { .. }));
    }
}
