//! Configuration handling for the TUI

use crate::state::FieldType;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::warn;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Backend address (overridden by the FORMBUILDER_URL env var)
    pub backend_url: Option<String>,
    /// Field types offered by the composer, by wire name. Unset means the
    /// full catalog.
    pub field_types: Option<Vec<String>>,
    /// Show createdAt timestamps in the saved forms list
    pub show_timestamps: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "formbuilder", "formbuilder-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// The composer's type catalog.
    ///
    /// Unknown names are skipped with a warning; an unset or fully-invalid
    /// list falls back to the complete catalog.
    pub fn field_catalog(&self) -> Vec<FieldType> {
        let Some(names) = &self.field_types else {
            return FieldType::ALL.to_vec();
        };

        let catalog: Vec<FieldType> = names
            .iter()
            .filter_map(|name| match name.parse::<FieldType>() {
                Ok(t) => Some(t),
                Err(e) => {
                    warn!("config: skipping {e}");
                    None
                }
            })
            .collect();

        if catalog.is_empty() {
            FieldType::ALL.to_vec()
        } else {
            catalog
        }
    }

    pub fn show_timestamps(&self) -> bool {
        self.show_timestamps.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.backend_url.is_none());
        assert!(config.field_types.is_none());
        assert!(config.show_timestamps.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            backend_url: Some("http://localhost:1000".to_string()),
            field_types: Some(vec!["text".to_string(), "date".to_string()]),
            show_timestamps: Some(true),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.backend_url, Some("http://localhost:1000".to_string()));
        assert_eq!(
            parsed.field_types,
            Some(vec!["text".to_string(), "date".to_string()])
        );
        assert_eq!(parsed.show_timestamps, Some(true));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let json = "{}";
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert!(parsed.backend_url.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"backend_url": "http://host:9", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.backend_url, Some("http://host:9".to_string()));
    }

    #[test]
    fn test_field_catalog_defaults_to_full() {
        let config = TuiConfig::default();
        assert_eq!(config.field_catalog(), FieldType::ALL.to_vec());
    }

    #[test]
    fn test_field_catalog_honors_configured_subset() {
        let config = TuiConfig {
            field_types: Some(vec![
                "title".to_string(),
                "gender".to_string(),
                "date".to_string(),
                "checkbox".to_string(),
            ]),
            ..Default::default()
        };
        assert_eq!(
            config.field_catalog(),
            vec![
                FieldType::Title,
                FieldType::Gender,
                FieldType::Date,
                FieldType::Checkbox
            ]
        );
    }

    #[test]
    fn test_field_catalog_skips_unknown_names() {
        let config = TuiConfig {
            field_types: Some(vec!["text".to_string(), "dropdown".to_string()]),
            ..Default::default()
        };
        assert_eq!(config.field_catalog(), vec![FieldType::Text]);
    }

    #[test]
    fn test_field_catalog_all_unknown_falls_back_to_full() {
        let config = TuiConfig {
            field_types: Some(vec!["dropdown".to_string()]),
            ..Default::default()
        };
        assert_eq!(config.field_catalog(), FieldType::ALL.to_vec());
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = TuiConfig::config_path();
    }

    #[test]
    fn test_load_returns_default_when_no_file() {
        let result = TuiConfig::load();
        assert!(result.is_ok());
    }
}
