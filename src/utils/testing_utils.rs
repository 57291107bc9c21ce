use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::{DbError, DbResult};
use crate::metadata::{MemoryCatalog, TableId};
use crate::query::Constant;
use crate::record::{Schema, Tuple};
use crate::storage::{MemoryTableFile, TableFile, TableFileIterator};
use crate::tx::TransactionId;

pub fn employees_schema() -> Schema {
    let mut schema = Schema::new();
    schema.add_int_field("id");
    schema.add_string_field("name");
    schema
}

pub fn employee(id: i32, name: &str) -> Tuple {
    Tuple::new(vec![Constant::int(id), Constant::string(name)])
}

pub fn employees() -> Vec<Tuple> {
    vec![employee(1, "Alice"), employee(2, "Bob"), employee(3, "Charlie")]
}

/// Catalog holding a single "Employees" table with three rows.
pub fn employees_catalog() -> DbResult<(Arc<MemoryCatalog>, TableId)> {
    let catalog = Arc::new(MemoryCatalog::new());
    let file = MemoryTableFile::with_tuples(employees());
    let table_id = catalog.add_table("Employees", employees_schema(), Arc::new(file))?;
    Ok((catalog, table_id))
}

#[derive(Debug, Clone, Copy)]
pub enum Failure {
    Abort,
    Io,
}

impl Failure {
    fn to_error(self) -> DbError {
        match self {
            Failure::Abort => DbError::TransactionAbort("deadlock victim".into()),
            Failure::Io => DbError::Io(std::io::Error::other("disk gone")),
        }
    }
}

#[derive(Default)]
struct ProbeState {
    opens: AtomicUsize,
    closes: AtomicUsize,
    seen_tx: Mutex<Vec<TransactionId>>,
}

/// Table file that records how it is driven and can be told to misbehave.
#[derive(Clone)]
pub struct ProbeFile {
    tuples: Vec<Tuple>,
    fail_from_open: Option<(usize, Failure)>,
    sentinel: bool,
    state: Arc<ProbeState>,
}

impl ProbeFile {
    pub fn new(tuples: Vec<Tuple>) -> Self {
        ProbeFile {
            tuples,
            fail_from_open: None,
            sentinel: false,
            state: Arc::new(ProbeState::default()),
        }
    }

    /// Every open from the `nth` (1-based) onwards fails with `failure`.
    pub fn fail_from_open(mut self, nth: usize, failure: Failure) -> Self {
        self.fail_from_open = Some((nth, failure));
        self
    }

    /// Iterators claim a next tuple but hand out none.
    pub fn sentinel(mut self) -> Self {
        self.sentinel = true;
        self
    }

    pub fn opens(&self) -> usize {
        self.state.opens.load(Ordering::SeqCst)
    }

    pub fn closes(&self) -> usize {
        self.state.closes.load(Ordering::SeqCst)
    }

    pub fn seen_tx(&self) -> Vec<TransactionId> {
        self.state.seen_tx.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

impl TableFile for ProbeFile {
    fn iterator(&self, tx: TransactionId) -> Box<dyn TableFileIterator> {
        Box::new(ProbeIterator {
            file: self.clone(),
            tx,
            cursor: None,
        })
    }
}

struct ProbeIterator {
    file: ProbeFile,
    tx: TransactionId,
    cursor: Option<usize>,
}

impl TableFileIterator for ProbeIterator {
    fn open(&mut self) -> DbResult<()> {
        let n = self.file.state.opens.fetch_add(1, Ordering::SeqCst) + 1;
        if let Ok(mut seen) = self.file.state.seen_tx.lock() {
            seen.push(self.tx);
        }
        if let Some((nth, failure)) = self.file.fail_from_open {
            if n >= nth {
                return Err(failure.to_error());
            }
        }
        self.cursor = Some(0);
        Ok(())
    }

    fn has_next(&mut self) -> DbResult<bool> {
        Ok(match self.cursor {
            Some(_) if self.file.sentinel => true,
            Some(pos) => pos < self.file.tuples.len(),
            None => false,
        })
    }

    fn next(&mut self) -> DbResult<Option<Tuple>> {
        let pos = self.cursor.ok_or(DbError::IteratorNotOpen)?;
        if self.file.sentinel {
            return Ok(None);
        }
        let tuple = self
            .file
            .tuples
            .get(pos)
            .cloned()
            .ok_or_else(|| DbError::NoSuchElement("probe exhausted".into()))?;
        self.cursor = Some(pos + 1);
        Ok(Some(tuple))
    }

    fn close(&mut self) {
        self.file.state.closes.fetch_add(1, Ordering::SeqCst);
        self.cursor = None;
    }
}

/// Catalog with one "Employees" table backed by `file`.
pub fn probe_catalog(file: &ProbeFile) -> DbResult<(Arc<MemoryCatalog>, TableId)> {
    let catalog = Arc::new(MemoryCatalog::new());
    let table_id = catalog.add_table("Employees", employees_schema(), Arc::new(file.clone()))?;
    Ok((catalog, table_id))
}
