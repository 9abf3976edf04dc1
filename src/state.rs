//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the startup config and the session store. Each session's
//! `SessionState` is touched only by requests carrying that session's
//! token. Every access takes the map's write lock, which also covers the
//! idle sweep.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use crate::config::AppConfig;
use crate::services::session::SessionState;

// =============================================================================
// SESSION STORE
// =============================================================================

struct StoredSession {
    state: SessionState,
    last_seen: Instant,
}

/// In-memory sessions keyed by cookie token. Lost on restart.
///
/// A session is only stored once an action changes it from the defaults,
/// so cookieless page loads and failed logins leave nothing behind. Stored
/// sessions idle for longer than `idle_ttl` are swept on the next access.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, StoredSession>>>,
    /// API key handed to every new session.
    default_api_key: Arc<str>,
    idle_ttl: Duration,
}

impl SessionStore {
    #[must_use]
    pub fn new(default_api_key: &str, idle_ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            default_api_key: Arc::from(default_api_key),
            idle_ttl,
        }
    }

    fn fresh(&self) -> SessionState {
        SessionState::new(self.default_api_key.as_ref())
    }

    /// Run `f` against the session for `token`, starting from defaults when
    /// the token is unknown.
    pub async fn with_session<R>(&self, token: &str, f: impl FnOnce(&mut SessionState) -> R) -> R {
        let mut sessions = self.sessions.write().await;
        let now = Instant::now();

        let before = sessions.len();
        sessions.retain(|key, stored| key == token || now.duration_since(stored.last_seen) < self.idle_ttl);
        let expired = before - sessions.len();
        if expired > 0 {
            tracing::debug!(expired, active = sessions.len(), "idle sessions expired");
        }

        if let Some(stored) = sessions.get_mut(token) {
            stored.last_seen = now;
            return f(&mut stored.state);
        }

        let mut state = self.fresh();
        let result = f(&mut state);
        if state != self.fresh() {
            sessions.insert(token.to_owned(), StoredSession { state, last_seen: now });
            tracing::debug!(active = sessions.len(), "session created");
        }
        result
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub sessions: SessionStore,
}

impl AppState {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let sessions = SessionStore::new(&config.api_key, config.session_idle_ttl);
        Self { config: Arc::new(config), sessions }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// `AppState` built from default config (mock API key).
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(AppConfig::default())
    }

    /// Snapshot of a session, if it exists.
    pub async fn session_snapshot(state: &AppState, token: &str) -> Option<SessionState> {
        state.sessions.sessions.read().await.get(token).map(|stored| stored.state.clone())
    }

    pub async fn session_count(state: &AppState) -> usize {
        state.sessions.sessions.read().await.len()
    }

    /// Seed a logged-in session and return its token.
    pub async fn seed_logged_in(state: &AppState, user: &str) -> String {
        let token = crate::services::session::generate_token();
        state
            .sessions
            .with_session(&token, |s| crate::services::auth::attempt_login(s, user, "pw"))
            .await
            .expect("seed login should succeed");
        token
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
