use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Constant {
    Int(i32),
    String(String),
}

impl Constant {
    pub fn int(val: i32) -> Self {
        Constant::Int(val)
    }

    pub fn string(val: impl Into<String>) -> Self {
        Constant::String(val.into())
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Constant::Int(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Constant::String(_))
    }

    pub fn as_integer(&self) -> Option<i32> {
        match self {
            Constant::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            Constant::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constant::Int(i) => write!(f, "{}", i),
            Constant::String(s) => write!(f, "'{}'", s),
        }
    }
}

impl From<i32> for Constant {
    fn from(value: i32) -> Self {
        Constant::Int(value)
    }
}

impl From<String> for Constant {
    fn from(value: String) -> Self {
        Constant::String(value)
    }
}

impl From<&str> for Constant {
    fn from(value: &str) -> Self {
        Constant::String(value.to_string())
    }
}
