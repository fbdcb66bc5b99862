//! Validation outcomes and the user-facing rejection messages.

use crate::payload::ParsedPayload;
use serde::{Deserialize, Serialize};

pub const MESSAGE_NOT_JSON: &str = "The search payload is not valid JSON.";
pub const MESSAGE_NOT_OBJECT: &str = "The search payload is not valid JSON: expected an object.";
pub const MESSAGE_SYSTEM_FIELD: &str = "A required system field is missing";
pub const MESSAGE_NO_SELECTION: &str = "Please select one record.";
pub const MESSAGE_PROD_AFF: &str = "Please select a Prod Affiliate.";
pub const MESSAGE_YEAR_MONTH: &str = "Please select a YearMonth.";
pub const MESSAGE_FORMULA: &str = "Field selection formula may be invalid";
pub const MESSAGE_MISSING_FIELDS: &str = "Missing required fields";

/// Why a payload was turned away.
///
/// System-level kinds point at a broken dashboard setup; selection kinds
/// are fixed by the user picking different data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionKind {
    /// Payload text is not a JSON object.
    ParseError,
    UnknownActionType,
    /// A field the dashboard must always provide is absent.
    MissingRequiredField,
    /// The user has not selected the data the action needs.
    MissingUserSelection,
    /// A hierarchy gap: the selection expressions feeding the payload are
    /// likely wrong.
    InvalidFieldFormula,
}

impl RejectionKind {
    /// True for kinds the user can resolve by changing their selection.
    pub fn is_user_recoverable(self) -> bool {
        matches!(self, Self::MissingUserSelection)
    }
}

/// A rejected payload: classification, display message, offending keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rejection {
    pub kind: RejectionKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<String>,
}

impl Rejection {
    pub fn new(kind: RejectionKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            missing: Vec::new(),
        }
    }

    pub fn with_missing<S: AsRef<str>>(mut self, missing: &[S]) -> Self {
        self.missing = missing.iter().map(|key| key.as_ref().to_string()).collect();
        self
    }

    pub(crate) fn listing<S: AsRef<str>>(kind: RejectionKind, prefix: &str, keys: &[S]) -> Self {
        let joined = keys
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(", ");
        Self::new(kind, format!("{prefix}: {joined}")).with_missing(keys)
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of validating one payload. Exactly one variant is populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ValidationResult {
    Valid { parsed: ParsedPayload },
    Invalid { reason: Rejection },
}

impl ValidationResult {
    pub fn invalid(kind: RejectionKind, message: impl Into<String>) -> Self {
        Self::Invalid {
            reason: Rejection::new(kind, message),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    pub fn reason(&self) -> Option<&Rejection> {
        match self {
            Self::Valid { .. } => None,
            Self::Invalid { reason } => Some(reason),
        }
    }

    pub fn into_result(self) -> Result<ParsedPayload, Rejection> {
        match self {
            Self::Valid { parsed } => Ok(parsed),
            Self::Invalid { reason } => Err(reason),
        }
    }
}
