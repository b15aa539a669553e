/// Use cases module containing application business logic orchestration
mod assemble_catalog;
mod convert_catalog;
mod split_catalog;

pub use assemble_catalog::AssembleCatalogUseCase;
pub use convert_catalog::ConvertCatalogUseCase;
pub use split_catalog::{tool_file_name, SplitCatalogUseCase};
