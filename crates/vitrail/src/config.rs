//! Configuration file loading for vitrail.
//!
//! Reads `vitrail.config.json` from the current working directory.
//! Also provides JSON Schema generation for editor autocompletion.

use serde::{Deserialize, Serialize};
use std::path::Path;

use vitrail_plomb::providers::{ExtendsEdges, GlobalMixinEdges, MixinsArrayEdges};
use vitrail_plomb::{default_providers, EdgeProvider};

/// Top-level vitrail configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct VitrailConfig {
    /// JSON Schema reference (for editor autocompletion).
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Query defaults.
    #[serde(default)]
    pub query: QueryConfig,
}

/// Defaults applied to every query.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryConfig {
    /// Hide computed, methods, data, and `_`/`$`-prefixed names.
    #[serde(default)]
    pub only_public: bool,

    /// Composition edges to follow, in priority order. Recognized names are
    /// `"mixins"`, `"globalMixins"`, and `"extends"`.
    ///
    /// When omitted or null, all three are followed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub providers: Option<Vec<String>>,
}

/// Load `vitrail.config.json` from the given directory (or CWD if None).
pub fn load_config(dir: Option<&Path>) -> VitrailConfig {
    let base = dir
        .map(|d| d.to_path_buf())
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());
    let config_path = base.join("vitrail.config.json");

    if !config_path.exists() {
        return VitrailConfig::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                eprintln!(
                    "\x1b[33mWarning:\x1b[0m Failed to parse {}: {}",
                    config_path.display(),
                    e
                );
                VitrailConfig::default()
            }
        },
        Err(e) => {
            eprintln!(
                "\x1b[33mWarning:\x1b[0m Failed to read {}: {}",
                config_path.display(),
                e
            );
            VitrailConfig::default()
        }
    }
}

/// Edge providers selected by the configuration. Unrecognized names warn
/// and are skipped.
pub fn providers_from_config(config: &VitrailConfig) -> Vec<Box<dyn EdgeProvider>> {
    let Some(names) = &config.query.providers else {
        return default_providers();
    };

    let mut providers: Vec<Box<dyn EdgeProvider>> = Vec::new();
    for name in names {
        match name.as_str() {
            "mixins" => providers.push(Box::new(MixinsArrayEdges)),
            "globalMixins" => providers.push(Box::new(GlobalMixinEdges)),
            "extends" => providers.push(Box::new(ExtendsEdges)),
            other => eprintln!(
                "\x1b[33mWarning:\x1b[0m unknown provider {:?} in vitrail.config.json",
                other
            ),
        }
    }
    providers
}

/// JSON Schema for `vitrail.config.json`.
pub const VITRAIL_CONFIG_SCHEMA: &str = r#"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "title": "Vitrail Configuration",
  "description": "Configuration file for vitrail - Vue component option resolution engine",
  "type": "object",
  "properties": {
    "$schema": {
      "type": "string",
      "description": "JSON Schema reference for editor autocompletion"
    },
    "query": {
      "type": "object",
      "description": "Defaults applied to every query",
      "properties": {
        "onlyPublic": {
          "type": "boolean",
          "description": "Hide computed, methods, data, and _/$-prefixed names",
          "default": false
        },
        "providers": {
          "type": ["array", "null"],
          "description": "Composition edges to follow, in priority order",
          "items": {
            "type": "string",
            "enum": ["mixins", "globalMixins", "extends"]
          }
        }
      },
      "additionalProperties": false
    }
  },
  "additionalProperties": false
}"#;

/// Write the JSON Schema to `node_modules/.vitrail/vitrail.config.schema.json`.
pub fn write_schema(dir: Option<&Path>) {
    let base = dir
        .map(|d| d.to_path_buf())
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());
    let schema_dir = base.join("node_modules/.vitrail");
    if std::fs::create_dir_all(&schema_dir).is_ok() {
        let schema_path = schema_dir.join("vitrail.config.schema.json");
        let _ = std::fs::write(&schema_path, VITRAIL_CONFIG_SCHEMA);
    }
}
