//! Action types: which memo screen a dispatch targets.

use serde::{Deserialize, Serialize};

/// The closed set of actions a dispatch button can be configured for.
///
/// The action selects the payload schema, the dependency rules, and the
/// server endpoint. Every consumer matches on it exhaustively.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    #[default]
    IssueNote,
    Reliability,
    #[serde(rename = "qcost_create")]
    QCostCreate,
    #[serde(rename = "qcost_update")]
    QCostUpdate,
}

impl ActionType {
    pub const ALL: [ActionType; 4] = [
        ActionType::IssueNote,
        ActionType::Reliability,
        ActionType::QCostCreate,
        ActionType::QCostUpdate,
    ];

    /// Wire name used in widget configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::IssueNote => "issue_note",
            Self::Reliability => "reliability",
            Self::QCostCreate => "qcost_create",
            Self::QCostUpdate => "qcost_update",
        }
    }
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An action name outside the four supported wire names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown actionType: {0}")]
pub struct UnknownActionType(pub String);

impl std::str::FromStr for ActionType {
    type Err = UnknownActionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == name)
            .ok_or_else(|| UnknownActionType(s.to_string()))
    }
}
