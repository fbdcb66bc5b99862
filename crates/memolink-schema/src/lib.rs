//! # memolink-schema
//!
//! Schemas for the search payloads a memo button sends to the quality
//! server. Each [`ActionType`] owns one [`FieldRule`]:
//!
//! ```text
//! raw text ──parse──▶ ParsedPayload ──FieldRule──▶ ValidationResult
//!                                      │
//!                    Simple ───────────┤ required group + or-group
//!                    Hierarchical ─────┘ fixed fields + org/regional chains
//! ```
//!
//! Validation never panics and never throws: every outcome is a
//! [`ValidationResult`], and rejections carry the exact message the user
//! sees.

pub mod action;
pub mod hierarchy;
pub mod payload;
pub mod registry;
pub mod rejection;
pub mod transform;
pub mod validate;

pub use action::{ActionType, UnknownActionType};
pub use hierarchy::{chain_gaps, check_qcost_create, classify_missing};
pub use payload::{ParsedPayload, REPORT_NAME_FIELD};
pub use registry::{
    AUDITED_REPORT_NAME, FieldRule, HierarchicalRule, SimpleRule, rules_for, rules_for_name,
};
pub use rejection::{Rejection, RejectionKind, ValidationResult};
pub use transform::{MissingConfiguration, apply_report_name_override};
pub use validate::{ValidationContext, parse_payload, validate, validate_named};
