pub mod error;
pub mod metadata;
pub mod query;
pub mod record;
pub mod storage;
pub mod tx;

#[cfg(test)]
mod utils;

pub use crate::error::{DbError, DbResult};
pub use crate::query::{Scan, ScanConfig, SeqScan};
