/// Type alias for Result with anyhow::Error as the error type,
/// giving every layer the same error-propagation shape.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
