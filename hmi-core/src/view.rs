//! Display text shared by the viewers. Kept free of any UI framework so the
//! rendering rules can be checked on the host.

use crate::error::FetchError;
use crate::model::{Operation, SolutionStatus};

pub const NO_OPERATIONS: &str = "No operations running";
pub const NO_OPERATION_ID: &str = "No operation ID found";
pub const SCRIPT_ERROR_TEXT: &str = "(error, see console for details)";

pub const OPERATIONS_FAILED: &str = "Error while running executive service client";
pub const STATUS_FAILED: &str = "Error while running solution status client";
pub const SCRIPT_FETCH_FAILED: &str = "Failed to get operations:";

/// One line per operation in response order, or the fallback message.
pub fn operation_lines(ops: Option<&[Operation]>) -> Vec<String> {
    match ops {
        Some(ops) if !ops.is_empty() => ops
            .iter()
            .map(|op| format!("Operation ID: {}", op.name))
            .collect(),
        _ => vec![NO_OPERATIONS.to_string()],
    }
}

/// Nothing until a status has been loaded.
pub fn status_lines(status: Option<&SolutionStatus>) -> Vec<String> {
    let Some(s) = status else {
        return Vec::new();
    };
    vec![
        format!("Solution name: {}", s.display_name),
        format!("Current status: {}", s.state),
        format!("Cluster id: {}", s.cluster_name),
    ]
}

pub fn latest_operation_text(outcome: Result<&[Operation], &FetchError>) -> String {
    match outcome {
        Ok([first, ..]) => first.name.clone(),
        Ok([]) => NO_OPERATION_ID.to_string(),
        Err(_) => SCRIPT_ERROR_TEXT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(name: &str) -> Operation {
        Operation {
            name: name.to_string(),
            ..Operation::default()
        }
    }

    #[test]
    fn one_line_per_operation_in_order() {
        let ops = vec![op("op-3"), op("op-1"), op("op-2")];
        let lines = operation_lines(Some(ops.as_slice()));
        assert_eq!(
            lines,
            vec!["Operation ID: op-3", "Operation ID: op-1", "Operation ID: op-2"]
        );
    }

    #[test]
    fn empty_or_missing_list_shows_fallback() {
        assert_eq!(operation_lines(None), vec![NO_OPERATIONS]);
        assert_eq!(operation_lines(Some(&[][..])), vec![NO_OPERATIONS]);
    }

    #[test]
    fn status_fields_render_verbatim() {
        let status = SolutionStatus {
            state: 3,
            display_name: "Palletizer <demo>".into(),
            cluster_name: "vmp-9f2e".into(),
            ..SolutionStatus::default()
        };
        assert_eq!(
            status_lines(Some(&status)),
            vec![
                "Solution name: Palletizer <demo>",
                "Current status: 3",
                "Cluster id: vmp-9f2e",
            ]
        );
        assert!(status_lines(None).is_empty());
    }

    #[test]
    fn script_text_picks_first_name() {
        let ops = vec![op("op-1")];
        assert_eq!(latest_operation_text(Ok(ops.as_slice())), "op-1");

        let ops = vec![op("first"), op("second")];
        assert_eq!(latest_operation_text(Ok(ops.as_slice())), "first");
    }

    #[test]
    fn script_text_fallbacks() {
        assert_eq!(latest_operation_text(Ok(&[][..])), NO_OPERATION_ID);
        let err = FetchError::Network("offline".into());
        assert_eq!(latest_operation_text(Err(&err)), SCRIPT_ERROR_TEXT);
    }
}
