use std::fmt;

use crate::error::{DbError, DbResult};
use crate::query::Constant;
use crate::record::{Schema, Tuple};

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Expr {
    Constant(Constant),
    FieldName(String),
}

impl Expr {
    pub fn constant(val: impl Into<Constant>) -> Self {
        Expr::Constant(val.into())
    }

    pub fn field_name(fldname: impl Into<String>) -> Self {
        Expr::FieldName(fldname.into())
    }

    /// Value of the expression for `tuple`, whose fields are described by `schema`.
    pub fn evaluate(&self, tuple: &Tuple, schema: &Schema) -> DbResult<Constant> {
        match self {
            Expr::Constant(val) => Ok(val.clone()),
            Expr::FieldName(fldname) => schema
                .index_of(fldname)
                .and_then(|i| tuple.get(i))
                .cloned()
                .ok_or_else(|| DbError::FieldNotFound(fldname.clone())),
        }
    }

    pub fn as_field_name(&self) -> Option<&str> {
        match self {
            Expr::Constant(_) => None,
            Expr::FieldName(fldname) => Some(fldname),
        }
    }

    pub fn applies_to(&self, sch: &Schema) -> bool {
        match self {
            Expr::Constant(_) => true,
            Expr::FieldName(fldname) => sch.has_field(fldname),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Constant(val) => write!(f, "{}", val),
            Expr::FieldName(fldname) => write!(f, "{}", fldname),
        }
    }
}
