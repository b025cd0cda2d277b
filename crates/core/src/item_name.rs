//! Item name value object.

use serde_json::Value;

use crate::{LedgerError, LedgerResult, ValueObject};

/// Key under which a quantity is stored. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemName(String);

impl ItemName {
    /// Validate a name. Only the empty string is rejected; surrounding
    /// whitespace is kept as part of the key.
    pub fn parse(name: impl Into<String>) -> LedgerResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(LedgerError::invalid_name("item name cannot be empty"));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for ItemName {}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Runtime check for names arriving from an untyped (JSON) boundary.
impl TryFrom<&Value> for ItemName {
    type Error = LedgerError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Self::parse(s.as_str()),
            other => Err(LedgerError::invalid_name(format!(
                "item name must be a string, got {}",
                json_kind(other)
            ))),
        }
    }
}

/// Short name of a JSON value's type, for diagnostics.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
