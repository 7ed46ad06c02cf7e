//! Configuration file loading for vize.
//!
//! Reads `vize.config.json` from the current working directory.
//! Also provides the JSON Schema for editor autocompletion.

use serde::{Deserialize, Serialize};
use std::path::Path;
use vize_folio::load::{COMPONENT_SUFFIX, OVERLAY_SUFFIX};
use vize_folio::MarkdownOptions;

/// Top-level vize configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct VizeConfig {
    /// JSON Schema reference (for editor autocompletion).
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Prop documentation configuration.
    #[serde(default)]
    pub folio: FolioConfig,
}

/// Configuration for the `folio` command.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolioConfig {
    /// Leave mixin-contributed props out of generated documents.
    #[serde(default)]
    pub ignore_mixins: bool,

    /// Suffix of component definition files.
    #[serde(default = "default_component_suffix")]
    pub component_suffix: String,

    /// Suffix of overlay files placed next to component files.
    #[serde(default = "default_overlay_suffix")]
    pub overlay_suffix: String,

    /// Markdown options for descriptions.
    #[serde(default)]
    pub markdown: MarkdownOptions,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            ignore_mixins: false,
            component_suffix: default_component_suffix(),
            overlay_suffix: default_overlay_suffix(),
            markdown: MarkdownOptions::default(),
        }
    }
}

fn default_component_suffix() -> String {
    COMPONENT_SUFFIX.to_string()
}

fn default_overlay_suffix() -> String {
    OVERLAY_SUFFIX.to_string()
}

/// Load `vize.config.json` from the given directory (or CWD if None).
pub fn load_config(dir: Option<&Path>) -> VizeConfig {
    let base = dir
        .map(|d| d.to_path_buf())
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());
    let config_path = base.join("vize.config.json");

    if !config_path.exists() {
        return VizeConfig::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => parse_config(&content).unwrap_or_else(|e| {
            tracing::warn!("Failed to parse {}: {}", config_path.display(), e);
            VizeConfig::default()
        }),
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", config_path.display(), e);
            VizeConfig::default()
        }
    }
}

fn parse_config(content: &str) -> serde_json::Result<VizeConfig> {
    serde_json::from_str(content)
}

/// JSON Schema for `vize.config.json`.
pub const VIZE_CONFIG_SCHEMA: &str = r#"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "title": "Vize Configuration",
  "description": "Configuration file for vize - Vue component prop documentation",
  "type": "object",
  "properties": {
    "$schema": {
      "type": "string",
      "description": "JSON Schema reference for editor autocompletion"
    },
    "folio": {
      "type": "object",
      "description": "Prop documentation configuration",
      "properties": {
        "ignoreMixins": {
          "type": "boolean",
          "description": "Leave mixin-contributed props out of generated documents",
          "default": false
        },
        "componentSuffix": {
          "type": "string",
          "description": "Suffix of component definition files",
          "default": ".component.json"
        },
        "overlaySuffix": {
          "type": "string",
          "description": "Suffix of documentation overlay files placed next to component files",
          "default": ".docs.json"
        },
        "markdown": {
          "type": "object",
          "description": "Markdown options for component descriptions",
          "properties": {
            "tables": { "type": "boolean", "default": true },
            "strikethrough": { "type": "boolean", "default": true },
            "smartPunctuation": { "type": "boolean", "default": false },
            "footnotes": { "type": "boolean", "default": false }
          },
          "additionalProperties": false
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
    fn test_missing_config_uses_defaults() {
        let config = load_config(Some(Path::new("does/not/exist")));
        assert!(!config.folio.ignore_mixins);
        assert_eq!(config.folio.component_suffix, ".component.json");
        assert_eq!(config.folio.overlay_suffix, ".docs.json");
    }

    #[test]
    fn test_parse_folio_section() {
        let config = parse_config(
            r#"{
                "$schema": "./node_modules/.vize/vize.config.schema.json",
                "folio": {
                    "ignoreMixins": true,
                    "overlaySuffix": ".md.json",
                    "markdown": { "smartPunctuation": true }
                }
            }"#,
        )
        .unwrap();

        assert!(config.schema.is_some());
        assert!(config.folio.ignore_mixins);
        assert_eq!(config.folio.component_suffix, ".component.json");
        assert_eq!(config.folio.overlay_suffix, ".md.json");
        assert!(config.folio.markdown.smart_punctuation);
        assert!(config.folio.markdown.tables);
    }

    #[test]
    fn test_schema_is_valid_json() {
        let schema: serde_json::Value = serde_json::from_str(VIZE_CONFIG_SCHEMA).unwrap();
        assert!(schema["properties"]["folio"]["properties"]["ignoreMixins"].is_object());
    }
}
