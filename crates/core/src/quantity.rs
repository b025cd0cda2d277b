//! Stock quantity value object.
//!
//! Quantities are signed and may be integral or fractional. Integer
//! arithmetic stays integral until a fractional operand shows up, so a file
//! written with whole numbers reads back with whole numbers.

use core::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::item_name::json_kind;
use crate::{LedgerError, LedgerResult, ValueObject};

/// Numeric stock amount.
///
/// Equality and ordering are numeric across variants: `Int(5) == Float(5.0)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Int(i64),
    Float(f64),
}

impl Quantity {
    pub const ZERO: Quantity = Quantity::Int(0);

    pub fn as_f64(self) -> f64 {
        match self {
            Quantity::Int(v) => v as f64,
            Quantity::Float(v) => v,
        }
    }

    pub fn is_positive(self) -> bool {
        match self {
            Quantity::Int(v) => v > 0,
            Quantity::Float(v) => v > 0.0,
        }
    }

    pub fn checked_add(self, rhs: Quantity) -> LedgerResult<Quantity> {
        match (self, rhs) {
            (Quantity::Int(a), Quantity::Int(b)) => a
                .checked_add(b)
                .map(Quantity::Int)
                .ok_or_else(|| LedgerError::invalid_quantity(format!("{a} + {b} overflows"))),
            (a, b) => finite(a.as_f64() + b.as_f64()),
        }
    }

    pub fn checked_sub(self, rhs: Quantity) -> LedgerResult<Quantity> {
        match (self, rhs) {
            (Quantity::Int(a), Quantity::Int(b)) => a
                .checked_sub(b)
                .map(Quantity::Int)
                .ok_or_else(|| LedgerError::invalid_quantity(format!("{a} - {b} overflows"))),
            (a, b) => finite(a.as_f64() - b.as_f64()),
        }
    }

    /// Reject NaN and infinities, which have no JSON representation.
    pub fn ensure_finite(self) -> LedgerResult<Quantity> {
        match self {
            Quantity::Int(_) => Ok(self),
            Quantity::Float(v) => finite(v),
        }
    }
}

fn finite(v: f64) -> LedgerResult<Quantity> {
    if v.is_finite() {
        Ok(Quantity::Float(v))
    } else {
        Err(LedgerError::invalid_quantity(format!("{v} is not a finite number")))
    }
}

impl ValueObject for Quantity {}

impl Default for Quantity {
    fn default() -> Self {
        Quantity::ZERO
    }
}

impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Quantity::Int(a), Quantity::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Quantity::Int(a), Quantity::Int(b)) => Some(a.cmp(&b)),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            Quantity::Int(v) => write!(f, "{v}"),
            Quantity::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{v:.1}"),
            Quantity::Float(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Quantity::Int(value)
    }
}

impl From<i32> for Quantity {
    fn from(value: i32) -> Self {
        Quantity::Int(i64::from(value))
    }
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Quantity::Float(value)
    }
}

/// Runtime check for amounts arriving from an untyped (JSON) boundary.
impl TryFrom<&Value> for Quantity {
    type Error = LedgerError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let Value::Number(n) = value else {
            return Err(LedgerError::invalid_quantity(format!(
                "quantity must be a number, got {}",
                json_kind(value)
            )));
        };
        match n.as_i64() {
            Some(v) => Ok(Quantity::Int(v)),
            None => n
                .as_f64()
                .ok_or_else(|| LedgerError::invalid_quantity(format!("{n} is not representable")))
                .and_then(finite),
        }
    }
}
