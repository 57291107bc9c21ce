use crate::error::DbResult;
use crate::record::Tuple;
use crate::tx::TransactionId;

/// Storage handle for one table. Hands out iterators that read the
/// table's tuples in storage order on behalf of a transaction.
pub trait TableFile {
    fn iterator(&self, tx: TransactionId) -> Box<dyn TableFileIterator>;
}

/// Cursor over the tuples of a [`TableFile`].
pub trait TableFileIterator {
    /// Position the iterator before the first tuple. Calling it again
    /// after `close` restarts from the beginning.
    fn open(&mut self) -> DbResult<()>;

    fn has_next(&mut self) -> DbResult<bool>;

    /// Returns the next tuple. `None` means the iterator had nothing to give.
    fn next(&mut self) -> DbResult<Option<Tuple>>;

    fn close(&mut self);
}
