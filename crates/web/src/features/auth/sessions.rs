use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Duration, Utc};
use storage::dto::auth::SessionResponse;
use uuid::Uuid;

#[derive(Debug, Clone)]
struct AdminSession {
    email: String,
    expires_at: DateTime<Utc>,
}

/// In-memory admin sessions keyed by bearer token
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, AdminSession>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    pub fn create(&self, email: &str) -> SessionResponse {
        let token = Uuid::new_v4().simple().to_string();
        let session = AdminSession {
            email: email.to_string(),
            expires_at: Utc::now() + self.ttl,
        };

        let mut sessions = self.sessions.write().unwrap_or_else(|e| e.into_inner());
        sessions.retain(|_, s| s.expires_at > Utc::now());
        sessions.insert(token.clone(), session.clone());

        SessionResponse {
            token,
            email: session.email,
            expires_at: session.expires_at,
        }
    }

    /// Returns the live session for `token`. Expired sessions are dropped.
    pub fn get(&self, token: &str) -> Option<SessionResponse> {
        let now = Utc::now();
        {
            let sessions = self.sessions.read().unwrap_or_else(|e| e.into_inner());
            match sessions.get(token) {
                Some(s) if s.expires_at > now => {
                    return Some(SessionResponse {
                        token: token.to_string(),
                        email: s.email.clone(),
                        expires_at: s.expires_at,
                    });
                }
                Some(_) => {}
                None => return None,
            }
        }

        self.revoke(token);
        None
    }

    pub fn revoke(&self, token: &str) -> bool {
        self.sessions
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(token)
            .is_some()
    }
}
