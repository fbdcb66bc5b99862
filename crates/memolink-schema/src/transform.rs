//! Payload rewriting applied after validation.

use crate::payload::{ParsedPayload, REPORT_NAME_FIELD};

/// The widget has no report name configured for quality-cost creation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Please enter the report name for QCost.")]
pub struct MissingConfiguration;

/// Replaces the payload's report name with the configured one and returns
/// the re-serialized payload.
///
/// The server resolves memos by its own configured report identifier, so
/// whatever name the dashboard query produced is discarded.
pub fn apply_report_name_override(
    mut parsed: ParsedPayload,
    configured_report_name: &str,
) -> Result<String, MissingConfiguration> {
    if configured_report_name.trim().is_empty() {
        return Err(MissingConfiguration);
    }
    parsed.set(REPORT_NAME_FIELD, configured_report_name);
    Ok(parsed.to_json_string())
}
