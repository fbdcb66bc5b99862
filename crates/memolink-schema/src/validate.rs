//! Structural validation of raw search payloads.

use crate::action::ActionType;
use crate::hierarchy::check_qcost_create;
use crate::payload::ParsedPayload;
use crate::registry::{FieldRule, SimpleRule, rules_for, rules_for_name};
use crate::rejection::{
    MESSAGE_NO_SELECTION, MESSAGE_NOT_JSON, MESSAGE_NOT_OBJECT, MESSAGE_SYSTEM_FIELD, Rejection,
    RejectionKind, ValidationResult,
};
use serde_json::Value;

/// Settings from the widget that influence validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationContext<'a> {
    /// Configured report template; only quality-cost creation reads it.
    pub report_name: Option<&'a str>,
}

impl<'a> ValidationContext<'a> {
    pub fn with_report_name(report_name: &'a str) -> Self {
        Self {
            report_name: Some(report_name),
        }
    }
}

/// Parses `raw` into an object payload, or explains why it cannot be one.
pub fn parse_payload(raw: &str) -> Result<ParsedPayload, Rejection> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|_| Rejection::new(RejectionKind::ParseError, MESSAGE_NOT_JSON))?;
    match value {
        Value::Object(fields) => Ok(ParsedPayload::new(fields)),
        _ => Err(Rejection::new(RejectionKind::ParseError, MESSAGE_NOT_OBJECT)),
    }
}

/// Validates `raw` against the schema for `action`.
pub fn validate(raw: &str, action: ActionType, ctx: ValidationContext<'_>) -> ValidationResult {
    let parsed = match parse_payload(raw) {
        Ok(parsed) => parsed,
        Err(reason) => return ValidationResult::Invalid { reason },
    };
    validate_parsed(parsed, rules_for(action), ctx)
}

/// Validates `raw` for an action given by wire name.
///
/// The payload is parsed before the name is looked up, so malformed JSON is
/// reported even when the action name is also wrong.
pub fn validate_named(raw: &str, action_name: &str, ctx: ValidationContext<'_>) -> ValidationResult {
    let parsed = match parse_payload(raw) {
        Ok(parsed) => parsed,
        Err(reason) => return ValidationResult::Invalid { reason },
    };
    match rules_for_name(action_name) {
        Ok(rule) => validate_parsed(parsed, rule, ctx),
        Err(err) => ValidationResult::invalid(RejectionKind::UnknownActionType, err.to_string()),
    }
}

fn validate_parsed(
    parsed: ParsedPayload,
    rule: &FieldRule,
    ctx: ValidationContext<'_>,
) -> ValidationResult {
    match rule {
        FieldRule::Hierarchical(rule) => check_qcost_create(parsed, rule, ctx.report_name),
        FieldRule::Simple(rule) => check_simple(parsed, rule),
    }
}

fn check_simple(parsed: ParsedPayload, rule: &SimpleRule) -> ValidationResult {
    let missing_required = parsed.missing(rule.required_group);
    if !missing_required.is_empty() {
        return ValidationResult::Invalid {
            reason: Rejection::listing(
                RejectionKind::MissingRequiredField,
                MESSAGE_SYSTEM_FIELD,
                &missing_required,
            ),
        };
    }

    let missing_choices = parsed.missing(rule.or_group);
    if missing_choices.len() == rule.or_group.len() {
        return ValidationResult::Invalid {
            reason: Rejection::new(RejectionKind::MissingUserSelection, MESSAGE_NO_SELECTION)
                .with_missing(&missing_choices),
        };
    }

    ValidationResult::Valid { parsed }
}
