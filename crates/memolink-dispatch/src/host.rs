//! Host collaborators.
//!
//! The dashboard host owns variable evaluation, popup windows, and user
//! alerts. The pipeline reaches them only through these traits.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::url::DispatchUrl;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VariableError {
    #[error("Variable not found: {0}")]
    NotFound(String),

    /// The variable exists but the host has never evaluated it.
    #[error("Variable has no calculated value: {0}")]
    NoValue(String),

    #[error("failed to read variable {name}: {message}")]
    Unavailable { name: String, message: String },
}

/// Asynchronous lookup of named string variables.
#[async_trait]
pub trait VariableSource: Send + Sync {
    async fn fetch(&self, name: &str) -> Result<String, VariableError>;
}

/// Opens the dispatch popup. Fire-and-forget.
pub trait PopupOpener: Send + Sync {
    fn open(&self, request: &PopupRequest);
}

/// Surfaces a failure message to the user.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Whether the host is showing the dashboard or editing it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostMode {
    #[default]
    Analysis,
    Edit,
}

/// Position and outer size of the host window, in screen pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostWindow {
    pub screen_x: i64,
    pub screen_y: i64,
    pub outer_width: i64,
    pub outer_height: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopupRequest {
    pub url: DispatchUrl,
    pub width: u32,
    pub height: u32,
}

impl PopupRequest {
    /// Top-left corner that centres the popup over `window`.
    pub fn placement(&self, window: &HostWindow) -> (i64, i64) {
        let left = window.screen_x + (window.outer_width - i64::from(self.width)) / 2;
        let top = window.screen_y + (window.outer_height - i64::from(self.height)) / 2;
        (left, top)
    }

    /// `window.open` feature string for this popup.
    pub fn features(&self, window: &HostWindow) -> String {
        let (left, top) = self.placement(window);
        [
            format!("width={}", self.width),
            format!("height={}", self.height),
            format!("left={left}"),
            format!("top={top}"),
            "toolbar=no".to_string(),
            "menubar=no".to_string(),
            "scrollbars=yes".to_string(),
            "resizable=yes".to_string(),
            "status=no".to_string(),
        ]
        .join(",")
    }
}

/// Variables held in memory: `Some` for evaluated values, `None` for
/// variables that exist without a value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticVariables(BTreeMap<String, Option<String>>);

impl StaticVariables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), Some(value.into()));
        self
    }

    pub fn with_unevaluated(mut self, name: impl Into<String>) -> Self {
        self.0.insert(name.into(), None);
        self
    }

    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[async_trait]
impl VariableSource for StaticVariables {
    async fn fetch(&self, name: &str) -> Result<String, VariableError> {
        match self.0.get(name) {
            Some(Some(value)) => Ok(value.clone()),
            Some(None) => Err(VariableError::NoValue(name.to_string())),
            None => Err(VariableError::NotFound(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url::build_url;
    use memolink_schema::ActionType;

    #[tokio::test]
    async fn static_variables_distinguish_missing_from_unevaluated() {
        let vars = StaticVariables::new()
            .with("vAESKey", "0123456789abcdef")
            .with_unevaluated("vSearch");
        assert_eq!(vars.fetch("vAESKey").await.unwrap(), "0123456789abcdef");
        assert_eq!(
            vars.fetch("vSearch").await,
            Err(VariableError::NoValue("vSearch".to_string()))
        );
        assert_eq!(
            vars.fetch("vOther").await,
            Err(VariableError::NotFound("vOther".to_string()))
        );
    }

    #[test]
    fn variables_load_from_json_with_nulls() {
        let vars = StaticVariables::from_json_str(r#"{"vAESKey":"k","vSearch":null}"#).unwrap();
        assert_eq!(
            vars,
            StaticVariables::new().with("vAESKey", "k").with_unevaluated("vSearch")
        );
    }

    #[test]
    fn popup_is_centred_on_the_host_window() {
        let request = PopupRequest {
            url: build_url("https://q.example.com", ActionType::IssueNote, "QUJD"),
            width: 1600,
            height: 1200,
        };
        let window = HostWindow {
            screen_x: 100,
            screen_y: 50,
            outer_width: 1920,
            outer_height: 1080,
        };
        assert_eq!(request.placement(&window), (260, -10));
        assert_eq!(
            request.features(&window),
            "width=1600,height=1200,left=260,top=-10,toolbar=no,menubar=no,scrollbars=yes,resizable=yes,status=no"
        );
    }
}
