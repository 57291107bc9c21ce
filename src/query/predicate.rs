use std::fmt;

use crate::error::DbResult;
use crate::record::{Schema, Tuple};

use super::Term;

/// Represents a predicate that combines multiple terms with AND (conjunction).
/// A predicate is satisfied only if all its terms are satisfied; the empty
/// predicate is always satisfied.
#[derive(Debug, Clone, Default)]
pub struct Predicate {
    terms: Vec<Term>,
}

impl Predicate {
    pub fn new(term: Term) -> Self {
        Predicate { terms: vec![term] }
    }

    pub fn conjoin_with(mut self, other: Predicate) -> Self {
        self.terms.extend(other.terms);
        self
    }

    pub fn with_term(mut self, term: Term) -> Self {
        self.terms.push(term);
        self
    }

    pub fn is_satisfied(&self, tuple: &Tuple, schema: &Schema) -> DbResult<bool> {
        for term in &self.terms {
            if !term.is_satisfied(tuple, schema)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub fn missing_field(&self, sch: &Schema) -> Option<&str> {
        self.terms.iter().find_map(|t| t.missing_field(sch))
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " and ")?;
            }
            write!(f, "{}", term)?;
        }
        Ok(())
    }
}
