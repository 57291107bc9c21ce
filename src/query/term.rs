use std::fmt;

use crate::error::DbResult;
use crate::record::{Schema, Tuple};

use super::Expr;

/// Represents a term that compares two expressions for equality.
#[derive(Debug, Clone)]
pub struct Term {
    lhs: Expr,
    rhs: Expr,
}

impl Term {
    pub fn new(lhs: Expr, rhs: Expr) -> Self {
        Term { lhs, rhs }
    }

    pub fn is_satisfied(&self, tuple: &Tuple, schema: &Schema) -> DbResult<bool> {
        let lhs_val = self.lhs.evaluate(tuple, schema)?;
        let rhs_val = self.rhs.evaluate(tuple, schema)?;
        Ok(lhs_val == rhs_val)
    }

    pub fn applies_to(&self, sch: &Schema) -> bool {
        self.lhs.applies_to(sch) && self.rhs.applies_to(sch)
    }

    /// First field name referenced by the term that `sch` lacks.
    pub fn missing_field(&self, sch: &Schema) -> Option<&str> {
        [&self.lhs, &self.rhs]
            .into_iter()
            .filter(|e| !e.applies_to(sch))
            .find_map(Expr::as_field_name)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.lhs, self.rhs)
    }
}
