/// Conversion services: record parsing, schema mapping, envelope assembly
pub mod assembler;
pub mod record_parser;
pub mod schema_mapper;

pub use assembler::{current_timestamp, CatalogAssembler};
pub use record_parser::parse_records;
pub use schema_mapper::{CategoryTable, SchemaMapper, TargetList};
