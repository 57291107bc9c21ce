pub mod catalog;
pub mod memory_catalog;

pub use catalog::{Catalog, TableId};
pub use memory_catalog::MemoryCatalog;
