use crate::error::{DbError, DbResult};
use crate::query::Scan;
use crate::record::{Schema, Tuple};

/// The scan corresponding to the project relational algebra operator.
/// Keeps the named fields of the inner scan, in the order given.
pub struct ProjectScan<'a> {
    scan: Box<dyn Scan + 'a>,
    fields: Vec<String>,
    indexes: Option<Vec<usize>>,
}

impl<'a> ProjectScan<'a> {
    pub fn new(s: Box<dyn Scan + 'a>, field_names: Vec<String>) -> Self {
        ProjectScan {
            scan: s,
            fields: field_names,
            indexes: None,
        }
    }

    fn resolve(&self) -> DbResult<Vec<usize>> {
        let schema = self.scan.schema()?;
        self.fields
            .iter()
            .map(|f| schema.index_of(f).ok_or_else(|| DbError::FieldNotFound(f.clone())))
            .collect()
    }
}

impl<'a> Scan for ProjectScan<'a> {
    fn open(&mut self) -> DbResult<()> {
        if self.indexes.is_some() {
            return Err(DbError::AlreadyOpen);
        }
        self.scan.open()?;
        match self.resolve() {
            Ok(indexes) => {
                self.indexes = Some(indexes);
                Ok(())
            }
            Err(e) => {
                self.scan.close();
                Err(e)
            }
        }
    }

    fn has_next(&mut self) -> DbResult<bool> {
        if self.indexes.is_none() {
            return Ok(false);
        }
        self.scan.has_next()
    }

    fn next(&mut self) -> DbResult<Tuple> {
        let Some(indexes) = &self.indexes else {
            return Err(DbError::IteratorNotOpen);
        };
        let tuple = self.scan.next()?;
        let values = indexes
            .iter()
            .map(|&i| {
                tuple
                    .get(i)
                    .cloned()
                    .ok_or_else(|| DbError::NoSuchElement(format!("tuple has no field {}", i)))
            })
            .collect::<DbResult<Vec<_>>>()?;
        Ok(Tuple::new(values))
    }

    fn rewind(&mut self) -> DbResult<()> {
        if self.indexes.is_none() {
            return Err(DbError::IteratorNotOpen);
        }
        if let Err(e) = self.scan.rewind() {
            self.indexes = None;
            return Err(e);
        }
        Ok(())
    }

    fn close(&mut self) {
        self.scan.close();
        self.indexes = None;
    }

    fn schema(&self) -> DbResult<Schema> {
        self.scan.schema()?.project(&self.fields)
    }
}
