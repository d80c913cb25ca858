//! Seat reference held by a screen.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An opaque seat value.
///
/// Screens do not constrain what a seat looks like: clients send labels,
/// numbers, or whole objects, and get back exactly what they sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seat(Value);

impl Seat {
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for Seat {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<&str> for Seat {
    fn from(label: &str) -> Self {
        Self(Value::String(label.to_string()))
    }
}
