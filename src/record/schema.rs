use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DbError, DbResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    Integer,
    Varchar,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Integer => write!(f, "int"),
            FieldType::Varchar => write!(f, "varchar"),
        }
    }
}

/// A single column of a schema. The name may be absent, the type never is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    name: Option<String>,
    field_type: FieldType,
}

impl Field {
    pub fn new(name: Option<String>, field_type: FieldType) -> Self {
        Field { name, field_type }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }
}

/// Ordered list of fields describing the shape of a tuple.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    pub fn new() -> Self {
        Schema { fields: Vec::new() }
    }

    pub fn from_fields(fields: Vec<Field>) -> Self {
        Schema { fields }
    }

    pub fn add_field(&mut self, field_name: Option<String>, field_type: FieldType) {
        self.fields.push(Field::new(field_name, field_type));
    }

    pub fn add_int_field(&mut self, field_name: impl Into<String>) {
        self.add_field(Some(field_name.into()), FieldType::Integer);
    }

    pub fn add_string_field(&mut self, field_name: impl Into<String>) {
        self.add_field(Some(field_name.into()), FieldType::Varchar);
    }

    pub fn add_unnamed_field(&mut self, field_type: FieldType) {
        self.add_field(None, field_type);
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field_name(&self, index: usize) -> Option<&str> {
        self.fields.get(index).and_then(Field::name)
    }

    pub fn field_type(&self, index: usize) -> Option<FieldType> {
        self.fields.get(index).map(Field::field_type)
    }

    pub fn types(&self) -> impl Iterator<Item = FieldType> + '_ {
        self.fields.iter().map(Field::field_type)
    }

    /// Position of the first field carrying `field_name`.
    pub fn index_of(&self, field_name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name() == Some(field_name))
    }

    pub fn has_field(&self, field_name: &str) -> bool {
        self.index_of(field_name).is_some()
    }

    /// Builds a schema holding only `field_names`, in that order.
    pub fn project(&self, field_names: &[String]) -> DbResult<Schema> {
        let mut projected = Schema::new();
        for name in field_names {
            let index = self
                .index_of(name)
                .ok_or_else(|| DbError::FieldNotFound(name.clone()))?;
            projected.fields.push(self.fields[index].clone());
        }
        Ok(projected)
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} {}", field.name().unwrap_or("null"), field.field_type)?;
        }
        write!(f, ")")
    }
}
