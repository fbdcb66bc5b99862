//! Parsed search payloads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field the quality-cost create screen keys its report template on.
pub const REPORT_NAME_FIELD: &str = "reportNm";

/// A search payload that parsed as a JSON object.
///
/// Keys beyond those a schema requires are kept, in their original order,
/// and travel to the server unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParsedPayload(Map<String, Value>);

impl ParsedPayload {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether `key` carries a usable value.
    ///
    /// Absent keys, `null`, and blank strings all count as missing. Numbers,
    /// booleans, arrays and objects count as present.
    pub fn has(&self, key: &str) -> bool {
        match self.0.get(key) {
            None | Some(Value::Null) => false,
            Some(Value::String(text)) => !text.trim().is_empty(),
            Some(_) => true,
        }
    }

    /// Keys from `keys` that are missing, in the order given.
    pub fn missing<'a>(&self, keys: &[&'a str]) -> Vec<&'a str> {
        keys.iter().copied().filter(|key| !self.has(key)).collect()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Compact JSON text, key order preserved.
    pub fn to_json_string(&self) -> String {
        Value::Object(self.0.clone()).to_string()
    }
}
