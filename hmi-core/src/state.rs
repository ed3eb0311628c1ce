use crate::error::FetchError;
use crate::model::{Operation, SolutionStatus};

/// Response fields owned by the status/operations viewer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewerState {
    pub operations: Option<Vec<Operation>>,
    pub status: Option<SolutionStatus>,
    /// Never set by a successful load; failures reset it.
    pub operation_id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewerAction {
    OperationsLoaded(Result<Vec<Operation>, FetchError>),
    StatusLoaded(Result<SolutionStatus, FetchError>),
}

impl ViewerState {
    /// Success replaces the field wholesale; failure leaves it as it was.
    /// Applying a stale completion after a newer one is allowed: the last
    /// action applied wins.
    pub fn apply(&mut self, action: ViewerAction) {
        match action {
            ViewerAction::OperationsLoaded(Ok(ops)) => self.operations = Some(ops),
            ViewerAction::StatusLoaded(Ok(status)) => self.status = Some(status),
            ViewerAction::OperationsLoaded(Err(_)) | ViewerAction::StatusLoaded(Err(_)) => {
                self.operation_id = None
            }
        }
    }
}

impl ViewerAction {
    /// Console line for a failed load, if this action carries one.
    pub fn failure(&self) -> Option<(&'static str, &FetchError)> {
        match self {
            ViewerAction::OperationsLoaded(Err(e)) => Some((crate::view::OPERATIONS_FAILED, e)),
            ViewerAction::StatusLoaded(Err(e)) => Some((crate::view::STATUS_FAILED, e)),
            _ => None,
        }
    }
}
