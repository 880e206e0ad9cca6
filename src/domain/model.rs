use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Int,
    Double,
    Text,
    Bool,
    Char,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Int => "int",
            ValueType::Double => "double",
            ValueType::Text => "text",
            ValueType::Bool => "bool",
            ValueType::Char => "char",
        };
        f.write_str(name)
    }
}

/// A scalar literal held by a lesson variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Value {
    Int(i32),
    Double(f64),
    Text(String),
    Bool(bool),
    Char(char),
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Int(_) => ValueType::Int,
            Value::Double(_) => ValueType::Double,
            Value::Text(_) => ValueType::Text,
            Value::Bool(_) => ValueType::Bool,
            Value::Char(_) => ValueType::Char,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Double(v) => fmt_double(*v, f),
            Value::Text(v) => f.write_str(v),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Char(v) => write!(f, "{}", v),
        }
    }
}

// Whole doubles keep one fractional digit ("10.0", "10000000.0"), everything
// else uses the shortest round-trip form.
fn fmt_double(v: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if v.is_nan() {
        f.write_str("NaN")
    } else if v.is_infinite() {
        f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" })
    } else if v.fract() == 0.0 {
        write!(f, "{:.1}", v)
    } else {
        write!(f, "{}", v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::Char(v)
    }
}

/// One piece of a printed line or concatenation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operand {
    Text(String),
    Var(String),
}

impl Operand {
    pub fn text(s: impl Into<String>) -> Self {
        Operand::Text(s.into())
    }

    pub fn var(name: impl Into<String>) -> Self {
        Operand::Var(name.into())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    Print {
        parts: Vec<Operand>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    Declare {
        name: String,
        value: Value,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    Assign {
        name: String,
        value: Value,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    Concat {
        name: String,
        parts: Vec<Operand>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
}

impl Step {
    pub fn print(parts: Vec<Operand>) -> Self {
        Step::Print { parts, note: None }
    }

    pub fn print_text(text: impl Into<String>) -> Self {
        Step::print(vec![Operand::text(text)])
    }

    pub fn declare(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Step::Declare {
            name: name.into(),
            value: value.into(),
            note: None,
        }
    }

    pub fn assign(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Step::Assign {
            name: name.into(),
            value: value.into(),
            note: None,
        }
    }

    pub fn concat(name: impl Into<String>, parts: Vec<Operand>) -> Self {
        Step::Concat {
            name: name.into(),
            parts,
            note: None,
        }
    }

    pub fn with_note(mut self, text: impl Into<String>) -> Self {
        let slot = match &mut self {
            Step::Print { note, .. }
            | Step::Declare { note, .. }
            | Step::Assign { note, .. }
            | Step::Concat { note, .. } => note,
        };
        *slot = Some(text.into());
        self
    }

    pub fn note(&self) -> Option<&str> {
        match self {
            Step::Print { note, .. }
            | Step::Declare { note, .. }
            | Step::Assign { note, .. }
            | Step::Concat { note, .. } => note.as_deref(),
        }
    }

    /// Name introduced or changed by this step, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Step::Print { .. } => None,
            Step::Declare { name, .. } | Step::Assign { name, .. } | Step::Concat { name, .. } => {
                Some(name.as_str())
            }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Step::Print { .. } => "print",
            Step::Declare { .. } => "declare",
            Step::Assign { .. } => "assign",
            Step::Concat { .. } => "concat",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lesson {
    pub name: String,
    pub description: String,
    pub steps: Vec<Step>,
}
