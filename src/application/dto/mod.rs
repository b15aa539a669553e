/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod requests;
mod responses;

pub use requests::{AssembleRequest, ConvertRequest, SplitRequest};
pub use responses::{AssembleResponse, ConvertResponse, SplitResponse};
