//! Operand structures of the generator output contract

use serde::{Deserialize, Serialize};

/// How a condition's operand is to be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandType {
    /// Literal comparison values
    Value,
    /// The operand names another column; entries are annotated identifiers
    ColumnValue,
}

impl OperandType {
    pub fn as_str(self) -> &'static str {
        match self {
            OperandType::Value => "Value",
            OperandType::ColumnValue => "Column Value",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        match s.trim() {
            "Value" => Some(OperandType::Value),
            "Column Value" => Some(OperandType::ColumnValue),
            _ => None,
        }
    }
}

/// One operand entry: a JSON string, number, boolean, or null
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OperandValue {
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
}

impl OperandValue {
    /// Human-readable form used when joining operands for display.
    ///
    /// Whole numbers drop the fractional part so a wire `10` renders as
    /// `10`, not `10.0`.
    pub fn render(&self) -> String {
        match self {
            OperandValue::Null => "Null".to_string(),
            OperandValue::Bool(b) => b.to_string(),
            OperandValue::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            OperandValue::Str(s) => s.clone(),
        }
    }

    /// The string payload, when this entry is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OperandValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            OperandValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}
