pub mod memory_file;
pub mod table_file;

pub use memory_file::MemoryTableFile;
pub use table_file::{TableFile, TableFileIterator};
