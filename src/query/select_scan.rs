use crate::error::{DbError, DbResult};
use crate::query::{Predicate, Scan};
use crate::record::{Schema, Tuple};

/// A scan that filters the tuples of an inner scan by a predicate.
/// Field names in the predicate refer to the inner scan's schema, so a
/// predicate over a `SeqScan` aliased `e` names its fields `e.<field>`.
pub struct SelectScan<'a> {
    scan: Box<dyn Scan + 'a>,
    pred: Predicate,
    schema: Option<Schema>,
    pending: Option<Tuple>,
}

impl<'a> SelectScan<'a> {
    pub fn new(s: Box<dyn Scan + 'a>, pred: Predicate) -> Self {
        SelectScan {
            scan: s,
            pred,
            schema: None,
            pending: None,
        }
    }

    fn bind(&self) -> DbResult<Schema> {
        let schema = self.scan.schema()?;
        match self.pred.missing_field(&schema) {
            Some(field) => Err(DbError::FieldNotFound(field.to_string())),
            None => Ok(schema),
        }
    }
}

impl<'a> Scan for SelectScan<'a> {
    fn open(&mut self) -> DbResult<()> {
        if self.schema.is_some() {
            return Err(DbError::AlreadyOpen);
        }
        self.scan.open()?;
        match self.bind() {
            Ok(schema) => {
                self.schema = Some(schema);
                self.pending = None;
                Ok(())
            }
            Err(e) => {
                self.scan.close();
                Err(e)
            }
        }
    }

    fn has_next(&mut self) -> DbResult<bool> {
        if self.pending.is_some() {
            return Ok(true);
        }
        let Some(schema) = &self.schema else {
            return Ok(false);
        };

        while self.scan.has_next()? {
            let tuple = self.scan.next()?;
            if self.pred.is_satisfied(&tuple, schema)? {
                self.pending = Some(tuple);
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn next(&mut self) -> DbResult<Tuple> {
        if self.schema.is_none() {
            return Err(DbError::IteratorNotOpen);
        }
        if self.has_next()? {
            if let Some(tuple) = self.pending.take() {
                return Ok(tuple);
            }
        }
        Err(DbError::NoSuchElement("no tuple satisfies the predicate".into()))
    }

    fn rewind(&mut self) -> DbResult<()> {
        if self.schema.is_none() {
            return Err(DbError::IteratorNotOpen);
        }
        self.pending = None;
        if let Err(e) = self.scan.rewind() {
            self.schema = None;
            return Err(e);
        }
        Ok(())
    }

    fn close(&mut self) {
        self.scan.close();
        self.schema = None;
        self.pending = None;
    }

    fn schema(&self) -> DbResult<Schema> {
        self.scan.schema()
    }
}
