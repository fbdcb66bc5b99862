//! Widget configuration.
//!
//! The host panel persists these options; this crate only reads them. Field
//! names follow the host's camelCase properties, and the legacy property
//! names (`reportNm`, `vAESKeyName`, `vSearchVarName`) are accepted as
//! aliases.

use memolink_schema::ActionType;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_BUTTON_CSS: &str = "width: 100%;height: 100%;cursor: pointer;color: #e34975;font-weight: bold;background-color: #fefafd;border: 0.135px solid #e34975;padding: 6px 14px;border-radius: 4px;font-size: 12px;";
pub const DEFAULT_POPUP_WIDTH: u32 = 1600;
pub const DEFAULT_POPUP_HEIGHT: u32 = 1200;
pub const DEFAULT_REPORT_NAME: &str = "Global Report";
pub const DEFAULT_SERVER_ADDRESS: &str = "https://cqisdev.lge.com";
pub const DEFAULT_KEY_VARIABLE: &str = "vAESKey";
pub const DEFAULT_PAYLOAD_VARIABLE: &str = "vSearch";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported config format `{0}`; use .toml or .json")]
    UnsupportedFormat(String),
}

/// Options recognized by a dispatch button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetConfig {
    pub action_type: ActionType,
    /// Button caption; blank falls back to the action's wire name.
    pub button_text: String,
    /// Inline button style; blank falls back to [`DEFAULT_BUTTON_CSS`].
    pub custom_css: String,
    pub pop_width: u32,
    pub pop_height: u32,
    #[serde(alias = "reportNm")]
    pub report_name: String,
    pub server_address: String,
    #[serde(alias = "vAESKeyName")]
    pub key_variable_name: String,
    #[serde(alias = "vSearchVarName")]
    pub payload_variable_name: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            action_type: ActionType::default(),
            button_text: String::new(),
            custom_css: DEFAULT_BUTTON_CSS.to_string(),
            pop_width: DEFAULT_POPUP_WIDTH,
            pop_height: DEFAULT_POPUP_HEIGHT,
            report_name: DEFAULT_REPORT_NAME.to_string(),
            server_address: DEFAULT_SERVER_ADDRESS.to_string(),
            key_variable_name: DEFAULT_KEY_VARIABLE.to_string(),
            payload_variable_name: DEFAULT_PAYLOAD_VARIABLE.to_string(),
        }
    }
}

impl WidgetConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Loads a `.toml` or `.json` file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&raw),
            Some("json") => Self::from_json_str(&raw),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or_default().to_string(),
            )),
        }
    }

    pub fn button_label(&self) -> &str {
        if self.button_text.trim().is_empty() {
            self.action_type.as_str()
        } else {
            &self.button_text
        }
    }

    pub fn button_css(&self) -> &str {
        if self.custom_css.trim().is_empty() {
            DEFAULT_BUTTON_CSS
        } else {
            &self.custom_css
        }
    }

    /// Report name used for validation and the payload override, if set.
    pub fn configured_report_name(&self) -> Option<&str> {
        let name = self.report_name.trim();
        (!name.is_empty()).then_some(self.report_name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = WidgetConfig::from_toml_str("").unwrap();
        assert_eq!(config, WidgetConfig::default());
        assert_eq!(config.button_label(), "issue_note");
        assert_eq!(config.pop_width, 1600);
        assert_eq!(config.key_variable_name, "vAESKey");
    }

    #[test]
    fn toml_overrides_and_action_names() {
        let config = WidgetConfig::from_toml_str(
            r#"
            actionType = "qcost_create"
            buttonText = "Create memo"
            reportName = "MS - Audit"
            serverAddress = "https://quality.example.com"
            popWidth = 800
            "#,
        )
        .unwrap();
        assert_eq!(config.action_type, ActionType::QCostCreate);
        assert_eq!(config.button_label(), "Create memo");
        assert_eq!(config.configured_report_name(), Some("MS - Audit"));
        assert_eq!(config.pop_width, 800);
        assert_eq!(config.pop_height, DEFAULT_POPUP_HEIGHT);
    }

    #[test]
    fn json_accepts_legacy_property_names() {
        let config = WidgetConfig::from_json_str(
            r#"{"actionType":"reliability","reportNm":"","vAESKeyName":"vKey","vSearchVarName":"vQuery","customCss":""}"#,
        )
        .unwrap();
        assert_eq!(config.action_type, ActionType::Reliability);
        assert_eq!(config.configured_report_name(), None);
        assert_eq!(config.key_variable_name, "vKey");
        assert_eq!(config.payload_variable_name, "vQuery");
        assert_eq!(config.button_css(), DEFAULT_BUTTON_CSS);
    }

    #[test]
    fn unknown_action_type_fails_to_load() {
        let err = WidgetConfig::from_json_str(r#"{"actionType":"memo_delete"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn unsupported_extension_is_reported() {
        let path = std::env::temp_dir().join(format!(
            "memolink-config-{}-{}.yaml",
            std::process::id(),
            uuid::Uuid::new_v4()
        ));
        std::fs::write(&path, "actionType: reliability").unwrap();
        let err = WidgetConfig::load(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);
        assert!(matches!(err, ConfigError::UnsupportedFormat(ext) if ext == "yaml"));
    }
}
