use crate::error::DbResult;
use crate::record::{Schema, Tuple};

/// The `Scan` trait is the iteration contract shared by every query operator.
pub trait Scan {
    fn open(&mut self) -> DbResult<()>;

    /// True while the scan is open and has another tuple to hand out.
    /// Never fails just because the scan is not open.
    fn has_next(&mut self) -> DbResult<bool>;

    fn next(&mut self) -> DbResult<Tuple>;

    /// Position the scan before its first tuple again.
    fn rewind(&mut self) -> DbResult<()>;

    fn close(&mut self);

    fn schema(&self) -> DbResult<Schema>;
}
