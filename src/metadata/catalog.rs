use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::DbResult;
use crate::record::Schema;
use crate::storage::TableFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TableId(pub i32);

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Metadata lookups keyed by table id. Every method fails with
/// `DbError::TableNotFound` for an unknown id.
pub trait Catalog {
    fn table_name(&self, table_id: TableId) -> DbResult<String>;

    /// Base schema of the table, with the field names as stored.
    fn schema(&self, table_id: TableId) -> DbResult<Schema>;

    fn table_file(&self, table_id: TableId) -> DbResult<Arc<dyn TableFile>>;
}
