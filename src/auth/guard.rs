use std::sync::Arc;

use super::{Role, SessionStore};

/// Outcome of the authorization check for a protected view.
///
/// The guard only decides; navigating (to the login page, to a default
/// authenticated view) is the embedding UI's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Permitted,
    /// No session at all - the user must log in.
    DeniedUnauthenticated,
    /// Logged in, but the view's required role is missing from the session's
    /// role set. Distinct from unauthenticated: re-login would not help.
    DeniedInsufficientRole,
}

/// Synchronous gate evaluated before a protected view is entered.
/// Pure function of the session store - no network calls.
pub struct RouteGuard {
    store: Arc<SessionStore>,
}

impl RouteGuard {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }

    /// Check access to a view. `required` of `None` means any authenticated
    /// session is permitted.
    pub fn check(&self, required: Option<Role>) -> RouteAccess {
        match self.store.get() {
            None => RouteAccess::DeniedUnauthenticated,
            Some(session) => match required {
                Some(role) if !session.has_role(role) => RouteAccess::DeniedInsufficientRole,
                _ => RouteAccess::Permitted,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Session;
    use std::collections::HashSet;

    fn guard_with_roles(roles: HashSet<Role>) -> RouteGuard {
        let store = Arc::new(SessionStore::in_memory());
        store.set(Session::new("token".into(), roles));
        RouteGuard::new(store)
    }

    #[test]
    fn test_no_session_denied_unauthenticated() {
        let guard = RouteGuard::new(Arc::new(SessionStore::in_memory()));
        assert_eq!(guard.check(None), RouteAccess::DeniedUnauthenticated);
        assert_eq!(guard.check(Some(Role::Admin)), RouteAccess::DeniedUnauthenticated);
    }

    #[test]
    fn test_user_denied_admin_view() {
        // Role mismatch is not the same as being logged out
        let guard = guard_with_roles(HashSet::from([Role::User]));
        assert_eq!(guard.check(Some(Role::Admin)), RouteAccess::DeniedInsufficientRole);
    }

    #[test]
    fn test_authenticated_permitted_without_requirement() {
        let guard = guard_with_roles(HashSet::from([Role::User]));
        assert_eq!(guard.check(None), RouteAccess::Permitted);
    }

    #[test]
    fn test_matching_role_permitted() {
        let guard = guard_with_roles(HashSet::from([Role::User, Role::Admin]));
        assert_eq!(guard.check(Some(Role::Admin)), RouteAccess::Permitted);
    }

    #[test]
    fn test_guard_follows_store_state() {
        let store = Arc::new(SessionStore::in_memory());
        let guard = RouteGuard::new(store.clone());

        store.set(Session::new("token".into(), HashSet::from([Role::User])));
        assert_eq!(guard.check(None), RouteAccess::Permitted);

        store.clear();
        assert_eq!(guard.check(None), RouteAccess::DeniedUnauthenticated);
    }
}
