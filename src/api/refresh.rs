//! Single-flight token refresh.
//!
//! When a protected request comes back 401, the coordinator renews the
//! access token. The renewal is an *episode*: the first caller to hit the
//! expiry starts the one refresh call, and every caller arriving while it is
//! in flight awaits that same call instead of issuing its own. On success
//! the session store is updated before any waiter resumes, so no retried
//! request can observe the stale credential. On failure the store is cleared
//! and every waiter fails with `SessionExpired`; a later 401 starts a fresh
//! episode from scratch.

use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt, Shared};
use reqwest::Client;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::auth::{Session, SessionStore};
use crate::models::RefreshResponse;

use super::ApiError;

/// Pending outcome of one refresh episode, shared by every caller that hit
/// an expired session while it was in flight. The error side is `Arc`ed only
/// to make the future's output cloneable; waiters all surface
/// `SessionExpired` regardless of the underlying cause.
type EpisodeFuture = Shared<BoxFuture<'static, Result<Session, Arc<ApiError>>>>;

pub(crate) struct RefreshCoordinator {
    http: Client,
    base_url: String,
    store: Arc<SessionStore>,
    episode: Mutex<Option<EpisodeFuture>>,
}

impl RefreshCoordinator {
    pub(crate) fn new(http: Client, base_url: String, store: Arc<SessionStore>) -> Self {
        Self {
            http,
            base_url,
            store,
            episode: Mutex::new(None),
        }
    }

    /// Obtain a renewed session, joining the in-flight episode if one
    /// exists. By the time this returns `Ok`, the session store already
    /// holds the new token.
    pub(crate) async fn renew(&self) -> Result<Session, ApiError> {
        let episode = {
            let mut slot = self.episode.lock().await;
            match slot.as_ref() {
                Some(inflight) => {
                    debug!("joining in-flight refresh episode");
                    inflight.clone()
                }
                None => {
                    let fut = Self::run_episode(
                        self.http.clone(),
                        self.base_url.clone(),
                        self.store.clone(),
                    )
                    .boxed()
                    .shared();
                    *slot = Some(fut.clone());
                    fut
                }
            }
        };

        let outcome = episode.clone().await;

        // Retire the episode once it has resolved. Whichever waiter gets
        // here first clears the slot; a 401 arriving after that starts a
        // fresh episode rather than consuming a stale result.
        {
            let mut slot = self.episode.lock().await;
            if slot.as_ref().is_some_and(|current| current.ptr_eq(&episode)) {
                *slot = None;
            }
        }

        outcome.map_err(|_| ApiError::SessionExpired)
    }

    async fn run_episode(
        http: Client,
        base_url: String,
        store: Arc<SessionStore>,
    ) -> Result<Session, Arc<ApiError>> {
        info!("access token expired, refreshing");

        match Self::request_token(&http, &base_url).await {
            Ok(token) => match store.get() {
                Some(previous) => {
                    // Store update happens here, strictly before any waiter
                    // resumes and re-dispatches its request.
                    let renewed = previous.with_token(token);
                    store.set(renewed.clone());
                    debug!("access token renewed");
                    Ok(renewed)
                }
                None => {
                    // Logout raced the refresh; discard the fresh token.
                    warn!("refresh completed but no session remained");
                    Err(Arc::new(ApiError::SessionExpired))
                }
            },
            Err(e) => {
                warn!(error = %e, "token refresh failed, clearing session");
                store.clear();
                Err(Arc::new(e))
            }
        }
    }

    /// The one call the coordinator issues. The refresh credential travels
    /// in the cookie jar, not the bearer header, and the call is exempt from
    /// interception by construction: it goes straight through the transport.
    async fn request_token(http: &Client, base_url: &str) -> Result<String, ApiError> {
        let url = format!("{}/auth/refresh", base_url);
        let response = http.post(&url).json(&serde_json::json!({})).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::http(status, &body));
        }

        let parsed: RefreshResponse = response
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("refresh response: {}", e)))?;
        Ok(parsed.access_token)
    }
}
