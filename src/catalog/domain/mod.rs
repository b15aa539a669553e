/// Domain models for the Tool Center catalogue
mod catalog;
mod raw_record;
mod tool_entry;

pub use catalog::{Catalog, CatalogLicense, ToolDocument};
pub use raw_record::RawRecord;
pub use tool_entry::ToolEntry;
