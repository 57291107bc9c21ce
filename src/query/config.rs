use serde::{Deserialize, Serialize};

/// What `open()` does on a scan that is already open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReopenPolicy {
    /// Fail with `DbError::AlreadyOpen`.
    #[default]
    Reject,
    /// Close the live storage iterator and open a fresh one.
    Reacquire,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    pub reopen_policy: ReopenPolicy,
}

impl ScanConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reopen_policy(mut self, reopen_policy: ReopenPolicy) -> Self {
        self.reopen_policy = reopen_policy;
        self
    }
}
