//! Shared pieces of the Flowstate HMI front-ends: the response model, startup
//! config, the read-only HTTP client and the text each viewer renders.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod state;
pub mod view;

pub use client::HmiClient;
pub use config::{Endpoint, HmiConfig, DEFAULT_BASE_PREFIX};
pub use error::FetchError;
pub use model::{Operation, OperationsPayload, SolutionStatus};
pub use state::{ViewerAction, ViewerState};
