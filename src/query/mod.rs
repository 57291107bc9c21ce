pub mod config;
pub mod constant;
pub mod expr;
pub mod predicate;
pub mod project_scan;
pub mod scan;
pub mod select_scan;
pub mod seq_scan;
pub mod term;

pub use config::{ReopenPolicy, ScanConfig};
pub use constant::Constant;
pub use expr::Expr;
pub use predicate::Predicate;
pub use project_scan::ProjectScan;
pub use scan::Scan;
pub use select_scan::SelectScan;
pub use seq_scan::SeqScan;
pub use term::Term;
