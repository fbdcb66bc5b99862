//! Hierarchical dependency checks for quality-cost creation.
//!
//! Organizational data is a chain `company → gbu1 → gbu2 → gbu3 → division`.
//! A selected division with no business unit above it cannot be resolved by
//! the server, so every absent ancestor of a present field is reported, not
//! only the nearest one. The regional chain `prodAff → region` applies only
//! to the audited report template.

use crate::payload::ParsedPayload;
use crate::registry::HierarchicalRule;
use crate::rejection::{
    MESSAGE_FORMULA, MESSAGE_MISSING_FIELDS, MESSAGE_PROD_AFF, MESSAGE_SYSTEM_FIELD,
    MESSAGE_YEAR_MONTH, Rejection, RejectionKind, ValidationResult,
};

const PROD_AFF: &str = "prodAff";
const YEAR_MONTH: &str = "yyyyMm";

/// Absent ancestors of present fields in `chain` (root first).
///
/// Walks from the tail so that a gap of several levels is reported in one
/// pass. Result is in root-first order.
pub fn chain_gaps<'a>(parsed: &ParsedPayload, chain: &[&'a str]) -> Vec<&'a str> {
    let mut gaps = Vec::new();
    let mut descendant_present = false;
    for field in chain.iter().rev() {
        if parsed.has(field) {
            descendant_present = true;
        } else if descendant_present {
            gaps.push(*field);
        }
    }
    gaps.reverse();
    gaps
}

/// Collects every missing key for a quality-cost create payload.
pub fn missing_fields(
    parsed: &ParsedPayload,
    rule: &HierarchicalRule,
    report_name: Option<&str>,
) -> Vec<String> {
    let mut missing: Vec<String> = parsed
        .missing(rule.required_always)
        .into_iter()
        .map(str::to_string)
        .collect();

    missing.extend(
        chain_gaps(parsed, rule.org_hierarchy)
            .into_iter()
            .map(str::to_string),
    );

    if report_name == Some(rule.audited_report) {
        // The head of the regional chain is required outright; the rest
        // follow the usual ancestor rule, but downward.
        let mut parent_present = true;
        for field in rule.region_chain {
            if !parent_present {
                break;
            }
            if !parsed.has(field) {
                missing.push((*field).to_string());
            }
            parent_present = parsed.has(field);
        }
    }

    missing
}

/// Picks the single message shown for a set of missing keys.
///
/// Priority: system fields, then the prod-affiliate prompt, then the
/// year-month prompt, then selection-formula gaps, then a generic listing.
pub fn classify_missing(rule: &HierarchicalRule, missing: &[String]) -> Rejection {
    let contains = |key: &str| missing.iter().any(|item| item == key);

    let system: Vec<&str> = rule
        .system_fields
        .iter()
        .copied()
        .filter(|key| contains(*key))
        .collect();
    if !system.is_empty() {
        return Rejection::listing(
            RejectionKind::MissingRequiredField,
            MESSAGE_SYSTEM_FIELD,
            &system,
        );
    }

    if contains(PROD_AFF) {
        return Rejection::new(RejectionKind::MissingUserSelection, MESSAGE_PROD_AFF)
            .with_missing(&[PROD_AFF]);
    }
    if contains(YEAR_MONTH) {
        return Rejection::new(RejectionKind::MissingUserSelection, MESSAGE_YEAR_MONTH)
            .with_missing(&[YEAR_MONTH]);
    }

    let formula: Vec<&str> = rule.formula_fields().filter(|key| contains(*key)).collect();
    if !formula.is_empty() {
        return Rejection::listing(RejectionKind::InvalidFieldFormula, MESSAGE_FORMULA, &formula);
    }

    Rejection::listing(
        RejectionKind::MissingRequiredField,
        MESSAGE_MISSING_FIELDS,
        missing,
    )
}

/// Validates a parsed quality-cost create payload.
pub fn check_qcost_create(
    parsed: ParsedPayload,
    rule: &HierarchicalRule,
    report_name: Option<&str>,
) -> ValidationResult {
    let missing = missing_fields(&parsed, rule, report_name);
    if missing.is_empty() {
        return ValidationResult::Valid { parsed };
    }
    ValidationResult::Invalid {
        reason: classify_missing(rule, &missing),
    }
}
