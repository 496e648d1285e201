//! Authentication module: session state, roles, and the route guard.
//!
//! This module provides:
//! - `Session` / `SessionStore`: the single source of truth for "am I logged
//!   in and as whom", with atomic get/set/clear and disk persistence
//! - `Role`: account-level roles (USER, LEADER, ADMIN)
//! - `RouteGuard`: synchronous authorization check before entering a
//!   protected view

pub mod guard;
pub mod roles;
pub mod session;

pub use guard::{RouteAccess, RouteGuard};
pub use roles::Role;
pub use session::{Session, SessionStore};
