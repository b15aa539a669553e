/// Outcome of a convert run.
#[derive(Debug, Clone)]
pub struct ConvertResponse {
    pub tool_count: usize,
    pub last_updated: String,
}

/// Outcome of a split run.
#[derive(Debug, Clone)]
pub struct SplitResponse {
    /// File names written into the tools directory, in catalogue order.
    pub files_written: Vec<String>,
}

/// Outcome of an assemble run.
#[derive(Debug, Clone)]
pub struct AssembleResponse {
    pub tool_count: usize,
    pub last_updated: String,
}
