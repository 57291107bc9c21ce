pub mod transaction_id;

pub use transaction_id::TransactionId;
