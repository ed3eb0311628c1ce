use serde::Deserialize;
use serde_json::Value;

/// Snapshot returned by `api/solution/status`.
///
/// The backing servers drop zero-valued proto fields, so everything defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SolutionStatus {
    pub state: i64,
    pub state_reason: i64,
    pub name: String,
    pub display_name: String,
    pub simulated: bool,
    pub cluster_name: String,
    pub platform_version: i64,
}

/// Long-running task record from the executive service.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Operation {
    pub name: String,
    pub metadata: Option<Value>,
    pub done: bool,
    pub error: Option<Value>,
    // Go's encoder names the oneof after the struct field.
    #[serde(alias = "Result")]
    pub result: Option<Value>,
}

/// Either shape the operations endpoint has been seen to return.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OperationsPayload {
    /// Go marshals an empty (nil) operations slice as `null`.
    Idle,
    List(Vec<Operation>),
    Envelope {
        #[serde(default)]
        operations: Option<Vec<Operation>>,
    },
}

impl OperationsPayload {
    pub fn into_operations(self) -> Vec<Operation> {
        match self {
            OperationsPayload::Idle => Vec::new(),
            OperationsPayload::List(ops) => ops,
            OperationsPayload::Envelope { operations } => operations.unwrap_or_default(),
        }
    }
}
