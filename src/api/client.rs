//! API client for the Arctic expedition-tracking backend.
//!
//! `ApiClient` owns the HTTP transport and the refresh coordinator, and
//! exposes the named operations (login, expeditions, metrics, admin) as thin
//! wrappers over one core send path. The send path attaches the current
//! bearer token, intercepts an expired-session response, and replays the
//! request at most once with the renewed credential.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::auth::{Session, SessionStore};
use crate::config::Config;
use crate::models::{
    AdminUser, Expedition, ExpeditionUpdate, LoginResponse, MetricsReport, NewExpedition,
    Participant, RegisterRequest, UserSummary,
};

use super::refresh::RefreshCoordinator;
use super::request::{AuthPolicy, PendingOperation, RequestDescriptor};
use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// API client for the Arctic backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    store: Arc<SessionStore>,
    refresh: Arc<RefreshCoordinator>,
}

impl ApiClient {
    /// Create a client from config, sharing the given session store.
    /// The cookie store holds the out-of-band refresh credential the server
    /// sets at login; it never appears in the session store.
    pub fn new(config: &Config, store: Arc<SessionStore>) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .cookie_store(true)
            .build()?;

        let base_url = config.api_base_url.trim_end_matches('/').to_string();
        let refresh = Arc::new(RefreshCoordinator::new(
            http.clone(),
            base_url.clone(),
            store.clone(),
        ));

        Ok(Self {
            http,
            base_url,
            store,
            refresh,
        })
    }

    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    // ===== Core send path =====

    /// Issue one request. If a session is present its token rides along as
    /// the bearer credential; otherwise the request goes out
    /// unauthenticated. No status interpretation happens here.
    async fn dispatch(&self, request: &RequestDescriptor) -> Result<reqwest::Response, ApiError> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = self.http.request(request.method.clone(), &url);

        if let Some(session) = self.store.get() {
            builder = builder.bearer_auth(&session.access_token);
        }
        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        Ok(builder.send().await?)
    }

    /// Send with expiry interception: a 401 on a protected call triggers one
    /// coordinated refresh and one replay of the original request. An
    /// operation that has already spent its retry fails terminally instead
    /// of looping, even if the backend keeps answering 401.
    async fn send(&self, request: RequestDescriptor) -> Result<reqwest::Response, ApiError> {
        let mut operation = PendingOperation::new(request);

        loop {
            let response = self.dispatch(&operation.request).await?;

            if response.status() != StatusCode::UNAUTHORIZED
                || operation.request.auth == AuthPolicy::Exempt
            {
                return Self::check(response).await;
            }

            if operation.retried {
                warn!(path = %operation.request.path, "request expired again after retry");
                return Err(ApiError::SessionExpired);
            }

            debug!(path = %operation.request.path, "session expired, renewing token");
            self.refresh.renew().await?;
            operation = operation.into_retry();
        }
    }

    /// Map a response to the error taxonomy: 2xx passes through, everything
    /// else becomes `Http { status, body }`.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::http(status, &body))
        }
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestDescriptor,
    ) -> Result<T, ApiError> {
        let path = request.path.clone();
        let response = self.send(request).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("{}: {}", path, e)))
    }

    async fn execute_no_content(&self, request: RequestDescriptor) -> Result<(), ApiError> {
        self.send(request).await?;
        Ok(())
    }

    // ===== Authentication =====

    /// Log in and populate the session store. The server also sets the
    /// refresh cookie on this response.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let request = RequestDescriptor::exempt(Method::POST, "/auth/login").with_body(
            serde_json::json!({ "email": email, "password": password }),
        );

        let parsed: LoginResponse = self.execute(request).await?;
        let session = Session::new(parsed.access_token, parsed.user_roles.into_iter().collect());
        self.store.set(session.clone());
        info!("logged in");
        Ok(session)
    }

    /// Register a new account. Does not log in.
    pub async fn register(&self, registration: &RegisterRequest) -> Result<(), ApiError> {
        let body = serde_json::to_value(registration)
            .map_err(|e| ApiError::InvalidResponse(format!("register payload: {}", e)))?;
        let request = RequestDescriptor::exempt(Method::POST, "/auth/register").with_body(body);
        self.execute_no_content(request).await
    }

    /// Log out. The local session is discarded no matter what the server
    /// says - a dead backend must not keep a client logged in.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let request = RequestDescriptor::exempt(Method::POST, "/auth/logout");
        let result = self.send(request).await;

        self.store.clear();
        if let Err(e) = result {
            warn!(error = %e, "logout request failed, session cleared locally");
        } else {
            info!("logged out");
        }
        Ok(())
    }

    // ===== Expeditions =====

    /// Expeditions the current user participates in or leads.
    pub async fn my_expeditions(&self) -> Result<Vec<Expedition>, ApiError> {
        self.execute(RequestDescriptor::protected(Method::GET, "/expeditions/my"))
            .await
    }

    pub async fn create_expedition(
        &self,
        expedition: &NewExpedition,
    ) -> Result<Expedition, ApiError> {
        let body = serde_json::to_value(expedition)
            .map_err(|e| ApiError::InvalidResponse(format!("expedition payload: {}", e)))?;
        self.execute(RequestDescriptor::protected(Method::POST, "/expeditions").with_body(body))
            .await
    }

    pub async fn expedition_details(&self, id: i64) -> Result<Expedition, ApiError> {
        self.execute(RequestDescriptor::protected(
            Method::GET,
            format!("/expeditions/{}", id),
        ))
        .await
    }

    pub async fn edit_expedition(
        &self,
        id: i64,
        update: &ExpeditionUpdate,
    ) -> Result<Expedition, ApiError> {
        let body = serde_json::to_value(update)
            .map_err(|e| ApiError::InvalidResponse(format!("expedition payload: {}", e)))?;
        self.execute(
            RequestDescriptor::protected(Method::PUT, format!("/expeditions/{}", id))
                .with_body(body),
        )
        .await
    }

    pub async fn delete_expedition(&self, id: i64) -> Result<(), ApiError> {
        self.execute_no_content(RequestDescriptor::protected(
            Method::DELETE,
            format!("/expeditions/{}", id),
        ))
        .await
    }

    // ===== Participants =====

    pub async fn expedition_participants(
        &self,
        expedition_id: i64,
    ) -> Result<Vec<Participant>, ApiError> {
        self.execute(RequestDescriptor::protected(
            Method::GET,
            format!("/expeditions/{}/participants", expedition_id),
        ))
        .await
    }

    /// Add a participant by their individual number.
    pub async fn add_participant(
        &self,
        expedition_id: i64,
        individual_number: &str,
    ) -> Result<(), ApiError> {
        self.execute_no_content(
            RequestDescriptor::protected(
                Method::POST,
                format!("/expeditions/{}/participants", expedition_id),
            )
            .with_body(serde_json::json!({ "individualNumber": individual_number })),
        )
        .await
    }

    pub async fn remove_participant(
        &self,
        expedition_id: i64,
        participant_id: i64,
    ) -> Result<(), ApiError> {
        self.execute_no_content(RequestDescriptor::protected(
            Method::DELETE,
            format!("/expeditions/{}/participants/{}", expedition_id, participant_id),
        ))
        .await
    }

    /// Look up registered users by individual number, for the participant
    /// management flow.
    pub async fn search_users(&self, individual_number: &str) -> Result<Vec<UserSummary>, ApiError> {
        self.execute(RequestDescriptor::protected(
            Method::GET,
            format!("/users/search?individualNumber={}", individual_number),
        ))
        .await
    }

    // ===== Metrics =====

    /// The current user's metrics for one expedition. Chart markup in the
    /// report is server-rendered and treated as opaque.
    pub async fn my_charts(&self, expedition_id: i64) -> Result<MetricsReport, ApiError> {
        self.execute(RequestDescriptor::protected(
            Method::GET,
            format!("/expeditions/{}/charts/my", expedition_id),
        ))
        .await
    }

    /// A specific participant's metrics, for expedition leaders.
    pub async fn participant_charts(
        &self,
        expedition_id: i64,
        participant_id: i64,
    ) -> Result<MetricsReport, ApiError> {
        self.execute(RequestDescriptor::protected(
            Method::GET,
            format!(
                "/expeditions/{}/participants/{}/charts",
                expedition_id, participant_id
            ),
        ))
        .await
    }

    // ===== Admin =====

    pub async fn admin_users(&self) -> Result<Vec<AdminUser>, ApiError> {
        self.execute(RequestDescriptor::protected(Method::GET, "/admin/users"))
            .await
    }

    pub async fn promote_to_leader(&self, user_id: i64) -> Result<(), ApiError> {
        self.promote(user_id, "promote-to-leader").await
    }

    pub async fn promote_to_admin(&self, user_id: i64) -> Result<(), ApiError> {
        self.promote(user_id, "promote-to-admin").await
    }

    async fn promote(&self, user_id: i64, action: &str) -> Result<(), ApiError> {
        self.execute_no_content(
            RequestDescriptor::protected(
                Method::POST,
                format!("/admin/users/{}/{}", user_id, action),
            )
            .with_body(serde_json::json!({})),
        )
        .await
    }
}
