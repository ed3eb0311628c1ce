use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::config::{Endpoint, HmiConfig};
use crate::error::FetchError;
use crate::model::{Operation, OperationsPayload, SolutionStatus};
use crate::view;

/// Read-only client for the two HMI endpoints.
///
/// Every call is a single GET with no timeout, retry or cancellation.
/// Overlapping calls resolve in whatever order the network delivers them.
#[derive(Debug, Clone, PartialEq)]
pub struct HmiClient {
    config: HmiConfig,
}

impl HmiClient {
    pub fn new(config: HmiConfig) -> Self {
        Self { config }
    }

    pub async fn list_operations(&self) -> Result<Vec<Operation>, FetchError> {
        let payload: OperationsPayload = self.get_json(Endpoint::Operations).await?;
        Ok(payload.into_operations())
    }

    pub async fn solution_status(&self) -> Result<SolutionStatus, FetchError> {
        self.get_json(Endpoint::SolutionStatus).await
    }

    /// Text for the script viewer's output element. Failures become the
    /// console hint after being passed to `on_error`.
    pub async fn latest_operation_text(&self, on_error: impl FnOnce(&FetchError)) -> String {
        let outcome = self.list_operations().await;
        if let Err(e) = &outcome {
            on_error(e);
        }
        view::latest_operation_text(outcome.as_deref())
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, FetchError> {
        let url = self.config.url(endpoint);
        let resp = Request::get(&url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        decode_body(status, &body)
    }
}

/// Non-2xx statuses fail before the body is looked at.
pub fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Status(status));
    }
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_decodes() {
        let ops: OperationsPayload = decode_body(200, r#"[{"name":"op-1"}]"#).unwrap();
        assert_eq!(ops.into_operations()[0].name, "op-1");
    }

    #[test]
    fn server_error_is_a_fetch_error() {
        let err = decode_body::<SolutionStatus>(500, "Failed to list operations: boom").unwrap_err();
        assert_eq!(err, FetchError::Status(500));
    }

    #[test]
    fn malformed_body_is_a_fetch_error() {
        let err = decode_body::<SolutionStatus>(200, "<html>").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn envelope_body_yields_script_text() {
        let one: OperationsPayload =
            decode_body(200, r#"{"operations":[{"name":"op-1"}]}"#).unwrap();
        let ops = one.into_operations();
        assert_eq!(view::latest_operation_text(Ok(ops.as_slice())), "op-1");

        let none: OperationsPayload = decode_body(200, r#"{"operations":[]}"#).unwrap();
        let ops = none.into_operations();
        assert_eq!(
            view::latest_operation_text(Ok(ops.as_slice())),
            view::NO_OPERATION_ID
        );
    }

    #[test]
    fn idle_executive_renders_fallback() {
        let idle: OperationsPayload = decode_body(200, "null").unwrap();
        let ops = idle.into_operations();
        assert_eq!(
            view::operation_lines(Some(ops.as_slice())),
            vec![view::NO_OPERATIONS]
        );
    }

    #[test]
    fn null_operations_field_yields_script_fallback() {
        let p: OperationsPayload = decode_body(200, r#"{"operations":null}"#).unwrap();
        let ops = p.into_operations();
        assert_eq!(
            view::latest_operation_text(Ok(ops.as_slice())),
            view::NO_OPERATION_ID
        );
    }
}
