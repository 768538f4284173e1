use reqwest::{RequestBuilder, Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use storage::{
    dto::{
        auth::{ErrorBody, SignInRequest},
        event::NewEvent,
        group::NewGroup,
        result::ScoredResult,
    },
    models::{Event, EventResult, Group},
};
use tokio::sync::watch;

use crate::{
    ClientError, Result,
    auth::{AuthProvider, Session},
    backend::Backend,
};

/// HTTP client for the festival results API
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
    sessions: watch::Sender<Option<Session>>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("festival/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            sessions: watch::Sender::new(None),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    fn session_token(&self) -> Option<String> {
        self.sessions.borrow().as_ref().map(|s| s.token.clone())
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.client.get(self.url(path)).send().await?;
        self.read(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!("POST {}", path);
        let response = self
            .authorized(self.client.post(self.url(path)))
            .json(body)
            .send()
            .await?;
        self.read(response).await
    }

    async fn read<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let body = self.check(response).await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Turns non-success responses into `ApiError`. A 401 while holding a
    /// session means the server no longer honours it, so it is dropped.
    async fn check(&self, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("Unexpected response")
                    .to_string()
            });

        let had_session = self.sessions.borrow().is_some();
        if status == StatusCode::UNAUTHORIZED && had_session {
            tracing::warn!("Session rejected by the server, signing out");
            self.sessions.send_replace(None);
        }

        Err(ClientError::ApiError {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait::async_trait]
impl Backend for ApiClient {
    async fn list_groups(&self) -> Result<Vec<Group>> {
        self.get_json("/groups").await
    }

    async fn list_events(&self) -> Result<Vec<Event>> {
        self.get_json("/events").await
    }

    async fn list_results(&self) -> Result<Vec<EventResult>> {
        self.get_json("/results").await
    }

    async fn insert_event(&self, event: &NewEvent) -> Result<Event> {
        self.post_json("/events", event).await
    }

    async fn insert_group(&self, group: &NewGroup) -> Result<Group> {
        self.post_json("/groups", group).await
    }

    async fn insert_result(&self, result: &ScoredResult) -> Result<EventResult> {
        self.post_json("/results", result).await
    }
}

#[async_trait::async_trait]
impl AuthProvider for ApiClient {
    async fn get_session(&self) -> Result<Option<Session>> {
        let Some(token) = self.session_token() else {
            return Ok(None);
        };

        let response = self
            .client
            .get(self.url("/auth/session"))
            .bearer_auth(token)
            .send()
            .await?;

        match self.read::<Session>(response).await {
            Ok(session) => Ok(Some(session)),
            Err(ClientError::ApiError { status: 401, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        let request = SignInRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self
            .client
            .post(self.url("/auth/sign-in"))
            .json(&request)
            .send()
            .await?;

        let session: Session = self.read(response).await.map_err(|e| match e {
            ClientError::ApiError { message, .. } => ClientError::AuthError(message),
            other => other,
        })?;

        tracing::info!("Signed in as {}", session.email);
        self.sessions.send_replace(Some(session.clone()));
        Ok(session)
    }

    async fn sign_out(&self) -> Result<()> {
        if let Some(token) = self.session_token() {
            let response = self
                .client
                .post(self.url("/auth/sign-out"))
                .bearer_auth(token)
                .send()
                .await?;
            self.check(response).await?;
        }

        self.sessions.send_replace(None);
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.sessions.subscribe()
    }
}
