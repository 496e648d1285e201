use reqwest::Method;
use serde_json::Value;

/// Whether a request participates in the session-expiry interception.
///
/// Exemption is declared per request, not inferred from path substrings, so
/// the list of uninterceptable calls (login, register, refresh, logout) is
/// visible at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPolicy {
    /// A 401 response hands the call to the refresh coordinator.
    Protected,
    /// Auth endpoints (login, register, refresh, logout). Never intercepted,
    /// even on a 401, so the refresh machinery cannot recurse into itself.
    Exempt,
}

/// Everything needed to issue (and re-issue) one API request.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    pub auth: AuthPolicy,
}

impl RequestDescriptor {
    pub fn protected(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            auth: AuthPolicy::Protected,
        }
    }

    pub fn exempt(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            auth: AuthPolicy::Exempt,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// One call and its retry budget.
///
/// Constructed fresh for every call so concurrent callers cannot share (or
/// corrupt) each other's retry state. A retried operation that expires again
/// is never handed back to the coordinator.
#[derive(Debug)]
pub struct PendingOperation {
    pub request: RequestDescriptor,
    pub retried: bool,
}

impl PendingOperation {
    pub fn new(request: RequestDescriptor) -> Self {
        Self {
            request,
            retried: false,
        }
    }

    /// Consume the operation, marking its single permitted retry as spent.
    pub fn into_retry(self) -> Self {
        Self {
            request: self.request,
            retried: true,
        }
    }
}
