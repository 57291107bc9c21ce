use seqscan::query::Constant;
use seqscan::record::{Schema, Tuple};

pub fn employees_schema() -> Schema {
    let mut schema = Schema::new();
    schema.add_int_field("id");
    schema.add_string_field("name");
    schema
}

pub fn employee(id: i32, name: &str) -> Tuple {
    Tuple::new(vec![Constant::int(id), Constant::string(name)])
}

pub fn field_names(schema: &Schema) -> Vec<String> {
    schema
        .fields()
        .iter()
        .map(|f| f.name().unwrap_or_default().to_string())
        .collect()
}
