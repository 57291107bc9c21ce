use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::record::Schema;
use crate::storage::TableFile;

use super::{Catalog, TableId};

struct TableEntry {
    name: String,
    schema: Schema,
    file: Arc<dyn TableFile>,
}

/// Catalog kept entirely in process memory.
pub struct MemoryCatalog {
    tables: RwLock<HashMap<TableId, TableEntry>>,
    next_id: AtomicI32,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        MemoryCatalog {
            tables: RwLock::new(HashMap::new()),
            next_id: AtomicI32::new(0),
        }
    }

    /// Registers a table and returns its id. A table already registered
    /// under the same name is replaced.
    pub fn add_table(
        &self,
        name: impl Into<String>,
        schema: Schema,
        file: Arc<dyn TableFile>,
    ) -> DbResult<TableId> {
        let name = name.into();
        let mut tables = self.write()?;

        let replaced: Vec<TableId> = tables
            .iter()
            .filter(|(_, entry)| entry.name == name)
            .map(|(id, _)| *id)
            .collect();
        for id in replaced {
            debug!(table_id = %id, %name, "replacing table");
            tables.remove(&id);
        }

        let table_id = TableId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        debug!(%table_id, %name, %schema, "table added");
        tables.insert(table_id, TableEntry { name, schema, file });
        Ok(table_id)
    }

    pub fn table_id(&self, name: &str) -> DbResult<TableId> {
        self.read()?
            .iter()
            .find(|(_, entry)| entry.name == name)
            .map(|(id, _)| *id)
            .ok_or_else(|| DbError::TableNameNotFound(name.to_string()))
    }

    pub fn rename_table(&self, table_id: TableId, new_name: impl Into<String>) -> DbResult<()> {
        let mut tables = self.write()?;
        let entry = tables
            .get_mut(&table_id)
            .ok_or(DbError::TableNotFound(table_id))?;
        entry.name = new_name.into();
        Ok(())
    }

    /// Ids of all registered tables, ascending.
    pub fn table_ids(&self) -> DbResult<Vec<TableId>> {
        let mut ids: Vec<TableId> = self.read()?.keys().copied().collect();
        ids.sort();
        Ok(ids)
    }

    fn read(&self) -> DbResult<RwLockReadGuard<'_, HashMap<TableId, TableEntry>>> {
        self.tables
            .read()
            .map_err(|_| DbError::General("catalog lock poisoned".into()))
    }

    fn write(&self) -> DbResult<RwLockWriteGuard<'_, HashMap<TableId, TableEntry>>> {
        self.tables
            .write()
            .map_err(|_| DbError::General("catalog lock poisoned".into()))
    }
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog for MemoryCatalog {
    fn table_name(&self, table_id: TableId) -> DbResult<String> {
        self.read()?
            .get(&table_id)
            .map(|entry| entry.name.clone())
            .ok_or(DbError::TableNotFound(table_id))
    }

    fn schema(&self, table_id: TableId) -> DbResult<Schema> {
        self.read()?
            .get(&table_id)
            .map(|entry| entry.schema.clone())
            .ok_or(DbError::TableNotFound(table_id))
    }

    fn table_file(&self, table_id: TableId) -> DbResult<Arc<dyn TableFile>> {
        self.read()?
            .get(&table_id)
            .map(|entry| Arc::clone(&entry.file))
            .ok_or(DbError::TableNotFound(table_id))
    }
}
