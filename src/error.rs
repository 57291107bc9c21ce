use thiserror::Error;

use crate::metadata::TableId;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Table not found: {0}")]
    TableNotFound(TableId),

    #[error("No table named {0}")]
    TableNameNotFound(String),

    #[error("Storage unavailable for table {table_id}")]
    StorageUnavailable {
        table_id: TableId,
        #[source]
        source: Box<DbError>,
    },

    #[error("Iterator not open")]
    IteratorNotOpen,

    #[error("No such element: {0}")]
    NoSuchElement(String),

    #[error("Iterator already open")]
    AlreadyOpen,

    #[error("Transaction abort exception: {0}")]
    TransactionAbort(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Field not found: {0}")]
    FieldNotFound(String),

    #[error("{0}")]
    General(String),
}

pub type DbResult<T> = std::result::Result<T, DbError>;
