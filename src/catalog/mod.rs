/// Catalogue conversion core - domain models and conversion services
///
/// This layer contains the pure conversion logic: the legacy record
/// parser, the schema mapper, and the envelope assembler. Nothing in
/// here touches the file system.
pub mod domain;
pub mod services;
