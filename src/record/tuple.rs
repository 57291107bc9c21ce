use std::fmt;

use serde::{Deserialize, Serialize};

use crate::query::Constant;

/// An ordered row of values, positionally matching some schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tuple {
    values: Vec<Constant>,
}

impl Tuple {
    pub fn new(values: Vec<Constant>) -> Self {
        Tuple { values }
    }

    pub fn get(&self, index: usize) -> Option<&Constant> {
        self.values.get(index)
    }

    pub fn values(&self) -> &[Constant] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Constant> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<Constant>> for Tuple {
    fn from(values: Vec<Constant>) -> Self {
        Tuple::new(values)
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, "\t")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}
