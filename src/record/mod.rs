pub mod schema;
pub mod tuple;

pub use schema::{Field, FieldType, Schema};
pub use tuple::Tuple;
