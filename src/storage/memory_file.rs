use std::sync::{Arc, RwLock};

use tracing::trace;

use crate::error::{DbError, DbResult};
use crate::record::Tuple;
use crate::tx::TransactionId;

use super::{TableFile, TableFileIterator};

/// Table file whose tuples live in memory, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryTableFile {
    tuples: Arc<RwLock<Vec<Tuple>>>,
}

impl MemoryTableFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tuples(tuples: Vec<Tuple>) -> Self {
        MemoryTableFile {
            tuples: Arc::new(RwLock::new(tuples)),
        }
    }

    pub fn insert(&self, tuple: Tuple) -> DbResult<()> {
        let mut tuples = self
            .tuples
            .write()
            .map_err(|_| DbError::General("table file lock poisoned".into()))?;
        tuples.push(tuple);
        Ok(())
    }

    pub fn len(&self) -> DbResult<usize> {
        let tuples = self
            .tuples
            .read()
            .map_err(|_| DbError::General("table file lock poisoned".into()))?;
        Ok(tuples.len())
    }

    pub fn is_empty(&self) -> DbResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl TableFile for MemoryTableFile {
    fn iterator(&self, tx: TransactionId) -> Box<dyn TableFileIterator> {
        Box::new(MemoryTableFileIterator {
            tuples: Arc::clone(&self.tuples),
            tx,
            cursor: None,
        })
    }
}

pub struct MemoryTableFileIterator {
    tuples: Arc<RwLock<Vec<Tuple>>>,
    tx: TransactionId,
    cursor: Option<usize>,
}

impl MemoryTableFileIterator {
    fn read_at(&self, pos: usize) -> DbResult<Option<Tuple>> {
        let tuples = self
            .tuples
            .read()
            .map_err(|_| DbError::General("table file lock poisoned".into()))?;
        Ok(tuples.get(pos).cloned())
    }
}

impl TableFileIterator for MemoryTableFileIterator {
    fn open(&mut self) -> DbResult<()> {
        trace!(tx = %self.tx, "memory table iterator opened");
        self.cursor = Some(0);
        Ok(())
    }

    fn has_next(&mut self) -> DbResult<bool> {
        match self.cursor {
            Some(pos) => Ok(self.read_at(pos)?.is_some()),
            None => Ok(false),
        }
    }

    fn next(&mut self) -> DbResult<Option<Tuple>> {
        let pos = self.cursor.ok_or(DbError::IteratorNotOpen)?;
        match self.read_at(pos)? {
            Some(tuple) => {
                self.cursor = Some(pos + 1);
                Ok(Some(tuple))
            }
            None => Err(DbError::NoSuchElement(format!(
                "table exhausted after {} tuples",
                pos
            ))),
        }
    }

    fn close(&mut self) {
        self.cursor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Constant;

    fn row(id: i32) -> Tuple {
        Tuple::new(vec![Constant::int(id)])
    }

    #[test]
    fn test_iterates_in_insertion_order() -> DbResult<()> {
        let file = MemoryTableFile::new();
        file.insert(row(3))?;
        file.insert(row(1))?;
        file.insert(row(2))?;
        assert_eq!(file.len()?, 3);
        assert!(!file.is_empty()?);

        let mut it = file.iterator(TransactionId::new());
        it.open()?;

        let mut ids = Vec::new();
        while it.has_next()? {
            let tuple = it.next()?.expect("has_next promised a tuple");
            ids.push(tuple.get(0).and_then(Constant::as_integer));
        }
        assert_eq!(ids, vec![Some(3), Some(1), Some(2)]);

        assert!(matches!(it.next(), Err(DbError::NoSuchElement(_))));
        Ok(())
    }

    #[test]
    fn test_requires_open() -> DbResult<()> {
        let file = MemoryTableFile::with_tuples(vec![row(1)]);
        let mut it = file.iterator(TransactionId::new());

        assert!(!it.has_next()?);
        assert!(matches!(it.next(), Err(DbError::IteratorNotOpen)));

        it.open()?;
        assert!(it.has_next()?);
        it.close();
        assert!(!it.has_next()?);
        Ok(())
    }

    #[test]
    fn test_reopen_restarts() -> DbResult<()> {
        let file = MemoryTableFile::with_tuples(vec![row(1), row(2)]);
        let mut it = file.iterator(TransactionId::new());

        it.open()?;
        it.next()?;
        it.next()?;
        it.close();
        it.open()?;

        assert_eq!(it.next()?, Some(row(1)));
        Ok(())
    }
}
