use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::Error;

/// Raw JSON bundled into the crate at compile time.
pub const BUNDLED_CONFIG: &str = include_str!("../config.json");

/// Deploy-time configuration. One setting: the URL the embedded frame points
/// at once the deferred load fires.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayConfig {
    pub iframe_url: String,
}

impl OverlayConfig {
    /// Parse a configuration from raw JSON and validate the frame URL.
    pub fn from_json(raw: &str) -> Result<Self, Error> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| Error::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a configuration from a JSON file on disk.
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// The configuration bundled at compile time.
    pub fn bundled() -> Result<Self, Error> {
        Self::from_json(BUNDLED_CONFIG)
    }

    fn validate(&self) -> Result<(), Error> {
        Url::parse(&self.iframe_url)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", self.iframe_url, e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_key() {
        let config = OverlayConfig::from_json(r#"{"iframeUrl": "https://panel.example.com/"}"#)
            .expect("valid config");
        assert_eq!(config.iframe_url, "https://panel.example.com/");
    }

    #[test]
    fn rejects_malformed_json() {
        let err = OverlayConfig::from_json("{").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn rejects_relative_url() {
        let err = OverlayConfig::from_json(r#"{"iframeUrl": "/embed"}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn bundled_config_is_valid() {
        OverlayConfig::bundled().expect("bundled config parses");
    }
}
