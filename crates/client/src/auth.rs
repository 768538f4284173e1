use std::sync::{Arc, Mutex};

use storage::dto::auth::SessionResponse;
use tokio::{sync::watch, task::JoinHandle};

use crate::Result;

pub type Session = SessionResponse;

/// The external authentication service
#[async_trait::async_trait]
pub trait AuthProvider: Send + Sync {
    /// Current session, if any
    async fn get_session(&self) -> Result<Option<Session>>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session>;

    async fn sign_out(&self) -> Result<()>;

    /// Receives the current session on every auth-state transition
    fn subscribe(&self) -> watch::Receiver<Option<Session>>;
}

/// Listener for session transitions. Dropping the handle unsubscribes.
#[must_use = "dropping the subscription immediately unsubscribes"]
pub struct AuthSubscription {
    task: JoinHandle<()>,
}

impl AuthSubscription {
    pub fn spawn<F>(mut receiver: watch::Receiver<Option<Session>>, on_change: F) -> Self
    where
        F: Fn(Option<Session>) + Send + 'static,
    {
        let task = tokio::spawn(async move {
            while receiver.changed().await.is_ok() {
                let session = receiver.borrow_and_update().clone();
                on_change(session);
            }
        });

        Self { task }
    }

    pub fn is_active(&self) -> bool {
        !self.task.is_finished()
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for AuthSubscription {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminState {
    Checking,
    Unauthenticated,
    Authenticated(Session),
}

#[derive(Debug)]
struct GateState {
    state: AdminState,
    sign_in_error: Option<String>,
}

/// Session gate in front of the admin view
#[derive(Clone)]
pub struct AdminGate {
    provider: Arc<dyn AuthProvider>,
    inner: Arc<Mutex<GateState>>,
}

impl AdminGate {
    pub fn new(provider: Arc<dyn AuthProvider>) -> Self {
        Self {
            provider,
            inner: Arc::new(Mutex::new(GateState {
                state: AdminState::Checking,
                sign_in_error: None,
            })),
        }
    }

    pub fn state(&self) -> AdminState {
        self.lock().state.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state(), AdminState::Authenticated(_))
    }

    /// Message from the last failed sign-in, shown above the login form
    pub fn sign_in_error(&self) -> Option<String> {
        self.lock().sign_in_error.clone()
    }

    /// Initial session probe; resolves the `Checking` state
    pub async fn probe(&self) -> AdminState {
        let session = match self.provider.get_session().await {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!("Session probe failed: {}", e);
                None
            }
        };

        self.apply(session);
        self.state()
    }

    /// Submits credentials. On failure the error is kept for display and the
    /// gate stays closed.
    pub async fn sign_in(&self, email: &str, password: &str) -> bool {
        self.lock().sign_in_error = None;

        match self.provider.sign_in(email, password).await {
            Ok(session) => {
                self.apply(Some(session));
                true
            }
            Err(e) => {
                let message = e.to_string();
                let message = if message.is_empty() {
                    "An error occurred during sign in".to_string()
                } else {
                    message
                };
                self.lock().sign_in_error = Some(message);
                false
            }
        }
    }

    pub async fn sign_out(&self) -> Result<()> {
        self.provider.sign_out().await?;
        self.apply(None);
        Ok(())
    }

    /// Applies a session pushed by the auth service
    pub fn apply(&self, session: Option<Session>) {
        let mut inner = self.lock();
        inner.state = match session {
            Some(session) => AdminState::Authenticated(session),
            None => AdminState::Unauthenticated,
        };
    }

    /// Follows session transitions pushed by the auth service until the
    /// returned handle is dropped.
    pub fn watch(&self) -> AuthSubscription {
        let gate = self.clone();
        AuthSubscription::spawn(self.provider.subscribe(), move |session| {
            gate.apply(session)
        })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, GateState> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}
