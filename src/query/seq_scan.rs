use std::mem;
use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::error::{DbError, DbResult};
use crate::metadata::{Catalog, TableId};
use crate::record::{Field, Schema, Tuple};
use crate::storage::TableFileIterator;
use crate::tx::TransactionId;

use super::{ReopenPolicy, Scan, ScanConfig};

/// Placeholder used in place of a missing field name.
const NULL_NAME: &str = "null";

enum ScanState {
    Unopened,
    Open(Box<dyn TableFileIterator>),
    Closed,
}

/// Sequential scan over every tuple of one table, in storage order.
///
/// Tuples come out untouched. The schema reported by the scan prefixes
/// each field name with the table alias, or with the table's catalog name
/// when no alias was given, so that `id` in a scan aliased `e` reads `e.id`.
///
/// The scan holds at most one open storage iterator. Dropping the scan
/// closes it.
pub struct SeqScan {
    catalog: Arc<dyn Catalog>,
    tx: TransactionId,
    table_id: TableId,
    alias: Option<String>,
    config: ScanConfig,
    state: ScanState,
}

impl SeqScan {
    pub fn new(
        catalog: Arc<dyn Catalog>,
        tx: TransactionId,
        table_id: TableId,
        alias: Option<&str>,
    ) -> Self {
        Self::with_config(catalog, tx, table_id, alias, ScanConfig::default())
    }

    pub fn with_config(
        catalog: Arc<dyn Catalog>,
        tx: TransactionId,
        table_id: TableId,
        alias: Option<&str>,
        config: ScanConfig,
    ) -> Self {
        SeqScan {
            catalog,
            tx,
            table_id,
            alias: alias.map(str::to_string),
            config,
            state: ScanState::Unopened,
        }
    }

    /// Name of the scanned table as currently recorded in the catalog.
    pub fn table_name(&self) -> DbResult<String> {
        self.catalog.table_name(self.table_id)
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// The alias, or the catalog's table name when none was given.
    /// Looked up on every call.
    pub fn effective_alias(&self) -> DbResult<String> {
        match &self.alias {
            Some(alias) => Ok(alias.clone()),
            None => self.table_name(),
        }
    }

    pub fn table_id(&self) -> TableId {
        self.table_id
    }

    pub fn transaction(&self) -> TransactionId {
        self.tx
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ScanState::Open(_))
    }

    /// Points the scan at another table. The scan must not be open; the
    /// next `open()` reads the new table.
    pub fn reset(&mut self, table_id: TableId, alias: Option<&str>) -> DbResult<()> {
        if self.is_open() {
            return Err(DbError::AlreadyOpen);
        }
        debug!(from = %self.table_id, to = %table_id, ?alias, "seq scan reset");
        self.table_id = table_id;
        self.alias = alias.map(str::to_string);
        Ok(())
    }

    fn acquire(&self) -> DbResult<Box<dyn TableFileIterator>> {
        let file = self
            .catalog
            .table_file(self.table_id)
            .map_err(|source| DbError::StorageUnavailable {
                table_id: self.table_id,
                source: Box::new(source),
            })?;

        let mut iterator = file.iterator(self.tx);
        if let Err(e) = iterator.open() {
            warn!(table_id = %self.table_id, tx = %self.tx, error = %e, "storage iterator failed to open");
            iterator.close();
            return Err(e);
        }
        Ok(iterator)
    }
}

/// Renames every field of `base` to `alias.name`, with `null` standing in
/// for a missing name. Field order and types are kept.
pub fn alias_schema(base: &Schema, alias: &str) -> Schema {
    let fields = base
        .fields()
        .iter()
        .map(|field| {
            let name = field.name().unwrap_or(NULL_NAME);
            Field::new(Some(format!("{}.{}", alias, name)), field.field_type())
        })
        .collect();
    Schema::from_fields(fields)
}

impl Scan for SeqScan {
    fn open(&mut self) -> DbResult<()> {
        if self.is_open() {
            match self.config.reopen_policy {
                ReopenPolicy::Reject => return Err(DbError::AlreadyOpen),
                ReopenPolicy::Reacquire => self.close(),
            }
        }

        let iterator = self.acquire()?;
        debug!(table_id = %self.table_id, tx = %self.tx, alias = ?self.alias, "seq scan opened");
        self.state = ScanState::Open(iterator);
        Ok(())
    }

    fn has_next(&mut self) -> DbResult<bool> {
        match &mut self.state {
            ScanState::Open(iterator) => iterator.has_next(),
            ScanState::Unopened | ScanState::Closed => Ok(false),
        }
    }

    fn next(&mut self) -> DbResult<Tuple> {
        let ScanState::Open(iterator) = &mut self.state else {
            return Err(DbError::IteratorNotOpen);
        };

        match iterator.next()? {
            Some(tuple) => {
                trace!(table_id = %self.table_id, %tuple, "seq scan produced tuple");
                Ok(tuple)
            }
            None => {
                warn!(table_id = %self.table_id, "storage iterator returned no tuple");
                Err(DbError::NoSuchElement("No tuple found".into()))
            }
        }
    }

    fn rewind(&mut self) -> DbResult<()> {
        let mut iterator = match mem::replace(&mut self.state, ScanState::Closed) {
            ScanState::Open(iterator) => iterator,
            other => {
                self.state = other;
                return Err(DbError::IteratorNotOpen);
            }
        };

        iterator.close();
        if let Err(e) = iterator.open() {
            warn!(table_id = %self.table_id, tx = %self.tx, error = %e, "seq scan rewind failed");
            iterator.close();
            return Err(e);
        }

        debug!(table_id = %self.table_id, tx = %self.tx, "seq scan rewound");
        self.state = ScanState::Open(iterator);
        Ok(())
    }

    fn close(&mut self) {
        if let ScanState::Open(mut iterator) = mem::replace(&mut self.state, ScanState::Closed) {
            iterator.close();
            debug!(table_id = %self.table_id, tx = %self.tx, "seq scan closed");
        }
    }

    fn schema(&self) -> DbResult<Schema> {
        let alias = self.effective_alias()?;
        let base = self.catalog.schema(self.table_id)?;
        Ok(alias_schema(&base, &alias))
    }
}

impl Drop for SeqScan {
    fn drop(&mut self) {
        self.close();
    }
}
