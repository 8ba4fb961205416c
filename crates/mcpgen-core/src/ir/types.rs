use super::operations::OperationDescriptor;

/// Everything the emitters need for one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct IrSpec {
    pub info: IrInfo,
    /// Upstream base URL without a trailing `/`; empty when the document names no server.
    pub base_url: String,
    pub operations: Vec<OperationDescriptor>,
}

/// API metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IrInfo {
    pub title: Option<String>,
    pub version: Option<String>,
}
