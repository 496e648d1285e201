//! API layer: HTTP client core, error taxonomy, and the refresh coordinator.

pub mod client;
pub mod error;
pub mod request;

mod refresh;

pub use client::ApiClient;
pub use error::ApiError;
pub use request::{AuthPolicy, PendingOperation, RequestDescriptor};
