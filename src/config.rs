// =============================================================================
// Demo configuration
// =============================================================================

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;
use crate::render::Renderer;
use crate::transfer::TransferStrategy;

/// Names a TOML or JSON file with overrides for the demo.
pub const CONFIG_ENV: &str = "STREET_GARAGE_CONFIG";

/// Which cars the demo starts with and how it presents them. The defaults
/// reproduce the classic `brand_a` / `brand_b` run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// The car held outside any lot before it is parked in the garage.
    pub standalone: String,
    /// Cars that start out on the street, in order.
    pub street: Vec<String>,
    pub strategy: TransferStrategy,
    pub colors: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            standalone: "brand_a".to_string(),
            street: vec!["brand_b".to_string()],
            strategy: TransferStrategy::default(),
            colors: Renderer::should_use_colors(),
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validated()
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = serde_json::from_str(content)?;
        config.validated()
    }

    /// Picks the format from the extension, or from the first character when
    /// there is no recognised extension.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|err| ConfigError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match format.as_deref() {
            Some("json") => Self::from_json_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            _ => {
                let trimmed = content.trim_start();
                if trimmed.starts_with('{') {
                    Self::from_json_str(&content)
                } else {
                    Self::from_toml_str(&content)
                }
            }
        }
    }

    /// Reads the file named by `STREET_GARAGE_CONFIG`, or falls back to the
    /// defaults. `NO_COLOR` wins over whatever the file says.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(std::env::var_os(CONFIG_ENV))
    }

    pub fn load_from(path: Option<OsString>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let path = PathBuf::from(path);
                debug!(path = %path.display(), "loading demo config");
                Self::from_file(&path)?
            }
            None => Self::default(),
        };
        if !Renderer::should_use_colors() {
            config.colors = false;
        }
        Ok(config)
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.standalone.trim().is_empty() {
            return Err(ConfigError::invalid("standalone", "must not be blank"));
        }
        if let Some(index) = self.street.iter().position(|b| b.trim().is_empty()) {
            return Err(ConfigError::invalid(
                format!("street[{index}]"),
                "must not be blank",
            ));
        }
        Ok(self)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_match_classic_run() {
        let config = DemoConfig::default();
        assert_eq!(config.standalone, "brand_a");
        assert_eq!(config.street, vec!["brand_b"]);
        assert_eq!(config.strategy, TransferStrategy::Bulk);
    }

    #[test]
    fn test_parse_toml_partial_override() {
        let config = DemoConfig::from_toml_str(
            "street = [\"audi\", \"bmw\"]\nstrategy = \"iterative\"\ncolors = false\n",
        )
        .unwrap();
        assert_eq!(config.standalone, "brand_a");
        assert_eq!(config.street, vec!["audi", "bmw"]);
        assert_eq!(config.strategy, TransferStrategy::Iterative);
        assert!(!config.colors);
    }

    #[test]
    fn test_parse_json() {
        let config =
            DemoConfig::from_json_str(r#"{"standalone": "volvo", "street": []}"#).unwrap();
        assert_eq!(config.standalone, "volvo");
        assert!(config.street.is_empty());
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = DemoConfig::from_toml_str("street = [\"audi\"");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = DemoConfig::from_json_str(r#"{"parking": "full"}"#);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_blank_labels_rejected() {
        assert_eq!(
            DemoConfig::from_toml_str("standalone = \"  \""),
            Err(ConfigError::invalid("standalone", "must not be blank"))
        );
        assert_eq!(
            DemoConfig::from_toml_str("street = [\"audi\", \"\"]"),
            Err(ConfigError::invalid("street[1]", "must not be blank"))
        );
    }

    #[test]
    fn test_from_file_sniffs_json_without_extension() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"standalone": "saab"}}"#).unwrap();
        let config = DemoConfig::from_file(file.path()).unwrap();
        assert_eq!(config.standalone, "saab");
    }

    #[test]
    fn test_from_file_toml_extension() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "street = [\"fiat\"]").unwrap();
        let config = DemoConfig::from_file(file.path()).unwrap();
        assert_eq!(config.street, vec!["fiat"]);
    }

    #[test]
    fn test_from_file_not_found() {
        let result = DemoConfig::from_file(Path::new("/nonexistent/street_garage.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_load_from_without_path_uses_defaults() {
        let config = DemoConfig::load_from(None).unwrap();
        assert_eq!(config.standalone, "brand_a");
        assert_eq!(config.street, vec!["brand_b"]);
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        writeln!(file, r#"{{"street": ["skoda", "seat"]}}"#).unwrap();
        let config = DemoConfig::load_from(Some(file.path().as_os_str().to_owned())).unwrap();
        assert_eq!(config.street, vec!["skoda", "seat"]);
    }

    #[test]
    fn test_no_color_overrides_file_setting() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "colors = true").unwrap();
        let path = Some(file.path().as_os_str().to_owned());

        let previous = std::env::var_os("NO_COLOR");
        std::env::set_var("NO_COLOR", "1");
        assert!(!Renderer::should_use_colors());
        let config = DemoConfig::load_from(path.clone()).unwrap();
        std::env::remove_var("NO_COLOR");

        assert!(!config.colors);
        assert!(Renderer::should_use_colors());
        assert!(DemoConfig::load_from(path).unwrap().colors);

        if let Some(value) = previous {
            std::env::set_var("NO_COLOR", value);
        }
    }
}
