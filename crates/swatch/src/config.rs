//! Configuration file loading.
//!
//! Reads `swatch.config.json`:
//!
//! ```json
//! {
//!   "prefix": "tw-",
//!   "modifiers": {
//!     "global": { "primary": "bg-brand text-white" },
//!     "components": { "Button": { "primary": "btn-brand" } }
//!   }
//! }
//! ```

use std::path::Path;
use std::sync::Arc;

use swatch_palette::{config, PaletteError, SwatchConfig};

/// File name looked up by [`load_config`].
pub const CONFIG_FILE_NAME: &str = "swatch.config.json";

/// Parse a configuration document.
pub fn parse_config(source: &str) -> Result<SwatchConfig, PaletteError> {
    SwatchConfig::from_json(source)
}

/// Load `swatch.config.json` from the given directory (or CWD if None).
///
/// A missing file yields the defaults. An unreadable or invalid file is
/// reported with a warning and also yields the defaults.
pub fn load_config(dir: Option<&Path>) -> SwatchConfig {
    let base = dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());
    let config_path = base.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("config: no {} in {}", CONFIG_FILE_NAME, base.display());
        return SwatchConfig::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match parse_config(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to parse {}: {}", config_path.display(), e);
                SwatchConfig::default()
            }
        },
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", config_path.display(), e);
            SwatchConfig::default()
        }
    }
}

/// Load the configuration and install it as the process-wide default,
/// returning the one it replaced.
pub fn load_and_install(dir: Option<&Path>) -> Arc<SwatchConfig> {
    config::install(load_config(dir))
}

/// JSON Schema for `swatch.config.json`.
pub const SWATCH_CONFIG_SCHEMA: &str = r#"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "title": "Swatch Configuration",
  "description": "Class prefix and modifier overrides for Swatch components",
  "type": "object",
  "properties": {
    "$schema": {
      "type": "string",
      "description": "JSON Schema reference"
    },
    "prefix": {
      "type": ["string", "null"],
      "description": "Prefix applied to every generated class (not to user classes)"
    },
    "modifiers": {
      "type": "object",
      "description": "Modifier overrides merged over declared vocabularies",
      "properties": {
        "global": {
          "type": "object",
          "description": "Overrides applied to every component",
          "additionalProperties": { "type": "string" }
        },
        "components": {
          "type": "object",
          "description": "Overrides per component type name; these win over global ones",
          "additionalProperties": {
            "type": "object",
            "additionalProperties": { "type": "string" }
          }
        }
      },
      "additionalProperties": false
    }
  },
  "additionalProperties": false
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let config = parse_config(
            r#"{
                "prefix": "tw-",
                "modifiers": {
                    "global": { "primary": "bg-brand" },
                    "components": { "Button": { "primary": "btn-brand" } }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(config.prefix(), Some("tw-"));
        assert_eq!(config.modifiers.global.get("primary"), Some("bg-brand"));
        assert_eq!(
            config
                .modifiers
                .for_component(Some("Button"))
                .and_then(|m| m.get("primary")),
            Some("btn-brand")
        );
    }

    #[test]
    fn test_parse_config_invalid() {
        let err = parse_config(r#"{ "prefix": 3 }"#).unwrap_err();
        assert!(matches!(err, PaletteError::InvalidConfig(_)));
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_config(Some(dir.path())), SwatchConfig::default());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), r#"{ "prefix": "ds-" }"#).unwrap();
        assert_eq!(load_config(Some(dir.path())).prefix(), Some("ds-"));
    }

    #[test]
    fn test_load_config_invalid_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "{ not json").unwrap();
        assert_eq!(load_config(Some(dir.path())), SwatchConfig::default());
    }

    // Only test in this crate that touches the process-wide default.
    #[test]
    fn test_load_and_install_sets_process_default() {
        use swatch_atelier::Styled;
        use swatch_musea::{render_html, Button};

        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), r#"{ "prefix": "tw-" }"#).unwrap();

        let previous = load_and_install(Some(dir.path()));
        assert_eq!(previous.prefix(), None);
        assert_eq!(config::global().prefix(), Some("tw-"));

        let button = Button::new().flag("primary", true).flag("disabled", false);
        assert_eq!(
            render_html(&button).unwrap(),
            r#"<button class="tw-btn tw-btn-primary"></button>"#
        );

        let installed = config::reset();
        assert_eq!(installed.prefix(), Some("tw-"));
        assert_eq!(config::global().prefix(), None);
        assert_eq!(
            render_html(&button).unwrap(),
            r#"<button class="btn btn-primary"></button>"#
        );
    }

    #[test]
    fn test_schema_is_json() {
        let schema: serde_json::Value = serde_json::from_str(SWATCH_CONFIG_SCHEMA).unwrap();
        assert_eq!(schema["title"], "Swatch Configuration");
    }
}
