//! Arctic client - a Rust client for the Arctic expedition-tracking API.
//!
//! The interesting part of this crate is the authenticated session layer:
//! every protected request carries the current access token, a 401 response
//! hands control to a single-flight refresh coordinator that renews the
//! token exactly once per expiry episode (no matter how many concurrent
//! requests hit it), and the original request is replayed at most once with
//! the renewed credential. Navigation into protected views is gated by
//! [`auth::RouteGuard`], a synchronous check against the shared
//! [`auth::SessionStore`].
//!
//! Everything else - expeditions, participants, metrics, admin operations -
//! is a thin facade on [`api::ApiClient`].

pub mod api;
pub mod auth;
pub mod config;
pub mod models;

pub use api::{ApiClient, ApiError};
pub use auth::{Role, RouteAccess, RouteGuard, Session, SessionStore};
pub use config::Config;
