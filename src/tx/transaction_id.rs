use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

use serde::{Deserialize, Serialize};

static NEXT_TX_NUM: AtomicI64 = AtomicI64::new(0);

/// Opaque token tying reads to a transaction. Scans pass it through to
/// storage untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(i64);

impl TransactionId {
    pub fn new() -> Self {
        TransactionId(NEXT_TX_NUM.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn id(&self) -> i64 {
        self.0
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tx{}", self.0)
    }
}
