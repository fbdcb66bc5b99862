//! Schema registry: per-action field rules.

use crate::action::{ActionType, UnknownActionType};

/// Report template whose memos also need the regional chain.
pub const AUDITED_REPORT_NAME: &str = "MS - Audit";

/// Flat rule: every `required_group` key, and at least one `or_group` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleRule {
    pub required_group: &'static [&'static str],
    pub or_group: &'static [&'static str],
}

/// Chained rule used by quality-cost creation.
///
/// `org_hierarchy` and `region_chain` are listed root first: a field later
/// in a chain is meaningless without every field before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HierarchicalRule {
    pub required_always: &'static [&'static str],
    pub org_hierarchy: &'static [&'static str],
    /// Report name that switches the regional chain on.
    pub audited_report: &'static str,
    pub region_chain: &'static [&'static str],
    /// Fields only the dashboard itself can supply.
    pub system_fields: &'static [&'static str],
}

impl HierarchicalRule {
    /// Fields whose absence points at a broken selection expression, in
    /// canonical order.
    pub fn formula_fields(&self) -> impl Iterator<Item = &'static str> {
        self.org_hierarchy
            .iter()
            .chain(self.region_chain.iter().skip(1))
            .copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    Simple(SimpleRule),
    Hierarchical(HierarchicalRule),
}

static ISSUE_NOTE: FieldRule = FieldRule::Simple(SimpleRule {
    required_group: &["basisYm", "userId"],
    or_group: &["judgeBasisSn", "surKey"],
});

static RELIABILITY: FieldRule = FieldRule::Simple(SimpleRule {
    required_group: &["basisYm", "userId"],
    or_group: &["closeDivisionSeqKcd"],
});

static QCOST_UPDATE: FieldRule = FieldRule::Simple(SimpleRule {
    required_group: &["userId"],
    or_group: &["surKey"],
});

static QCOST_CREATE: FieldRule = FieldRule::Hierarchical(HierarchicalRule {
    required_always: &["userId", "yyyyMm"],
    org_hierarchy: &["company", "gbu1", "gbu2", "gbu3", "division"],
    audited_report: AUDITED_REPORT_NAME,
    region_chain: &["prodAff", "region"],
    system_fields: &["reportNm", "userId"],
});

/// Rules for a known action.
pub fn rules_for(action: ActionType) -> &'static FieldRule {
    match action {
        ActionType::IssueNote => &ISSUE_NOTE,
        ActionType::Reliability => &RELIABILITY,
        ActionType::QCostCreate => &QCOST_CREATE,
        ActionType::QCostUpdate => &QCOST_UPDATE,
    }
}

/// Rules for an action given by wire name.
pub fn rules_for_name(name: &str) -> Result<&'static FieldRule, UnknownActionType> {
    let action: ActionType = name.parse()?;
    Ok(rules_for(action))
}
