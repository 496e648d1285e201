//! Data models for the Arctic API.
//!
//! This module contains the wire types exchanged with the backend:
//!
//! - Auth payloads: `LoginResponse`, `RegisterRequest`, `RefreshResponse`
//! - `Expedition`, `NewExpedition`, `ExpeditionUpdate`, `ExpeditionRole`
//! - `Participant`, `UserSummary`: expedition membership
//! - `MetricsReport`: per-participant stats and server-rendered charts
//! - `AdminUser`: the admin user listing

pub mod auth;
pub mod expedition;
pub mod metrics;
pub mod participant;
pub mod user;

pub use auth::{LoginResponse, RefreshResponse, RegisterRequest};
pub use expedition::{Expedition, ExpeditionRole, ExpeditionUpdate, NewExpedition};
pub use metrics::{ChartSet, MetricStats, MetricsReport, MetricsSummary};
pub use participant::{Participant, UserSummary};
pub use user::AdminUser;
