//! Request dispatcher: the single choke point for backend calls.
//!
//! ARCHITECTURE
//! ============
//! Requests are built relative to the API root and handed to an injected
//! [`Transport`]. Before send, the dispatcher attaches the stored artifact to
//! every endpoint except login and registration. After receive, a 401 clears
//! the session and invokes the injected [`UnauthorizedHandler`] exactly once,
//! and the failure is still returned to the caller.
//!
//! STALE RESPONSES
//! ===============
//! Requests are not cancellable. If a request carried an artifact and the
//! store no longer holds that artifact when a successful response arrives,
//! the response is dropped as [`ApiError::SessionEnded`].

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use std::fmt;
use std::rc::Rc;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;
use crate::routes::LOGIN_PATH;
use crate::session::SessionStore;

/// Header name used for the authentication artifact.
pub const AUTHORIZATION: &str = "Authorization";

/// Endpoints that establish a session and never carry credentials.
pub const PUBLIC_ENDPOINTS: [&str; 2] = ["/auth/login", "/auth/register"];

/// HTTP methods used by the backend API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request relative to the API base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path beginning with `/`, e.g. `/applications/3`.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    #[must_use]
    pub fn with_query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_owned(), value.to_string()));
        self
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if `body` cannot be serialized.
    pub fn with_json<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// First header value matching `name` case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Whether this request targets a session-establishing endpoint.
    #[must_use]
    pub fn is_public(&self) -> bool {
        let path = self.path.split('?').next().unwrap_or_default();
        let path = path.trim_end_matches('/');
        PUBLIC_ENDPOINTS.contains(&path)
    }
}

/// A raw backend response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// The `message` field of a backend error body, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        let value: Value = serde_json::from_str(&self.body).ok()?;
        value
            .get("message")
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
            .map(str::to_owned)
    }
}

/// Performs HTTP for the dispatcher.
#[async_trait(?Send)]
pub trait Transport {
    /// Send `request` and return whatever status the server answered with.
    ///
    /// # Errors
    ///
    /// Returns a description of the failure when no response was received.
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, String>;
}

/// Reacts to rejected authorization after the session has been cleared.
pub trait UnauthorizedHandler {
    /// Force a full navigation to `login_path`.
    fn on_unauthorized(&self, login_path: &str);
}

impl<F: Fn(&str)> UnauthorizedHandler for F {
    fn on_unauthorized(&self, login_path: &str) {
        self(login_path);
    }
}

/// Dispatches API requests with session-aware credential handling.
#[derive(Clone)]
pub struct Dispatcher {
    session: SessionStore,
    transport: Rc<dyn Transport>,
    on_unauthorized: Rc<dyn UnauthorizedHandler>,
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher").field("session", &self.session).finish_non_exhaustive()
    }
}

impl Dispatcher {
    pub fn new(
        session: SessionStore,
        transport: impl Transport + 'static,
        on_unauthorized: impl UnauthorizedHandler + 'static,
    ) -> Self {
        Self {
            session,
            transport: Rc::new(transport),
            on_unauthorized: Rc::new(on_unauthorized),
        }
    }

    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Send `request`, returning only successful responses.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Unauthorized`] on 401, after clearing the session.
    /// - [`ApiError::Status`] on any other non-2xx status.
    /// - [`ApiError::Transport`] when no response arrived.
    /// - [`ApiError::SessionEnded`] when the issuing session ended or was
    ///   replaced in flight, whatever the status; the current session is
    ///   left untouched.
    pub async fn send(&self, mut request: ApiRequest) -> Result<ApiResponse, ApiError> {
        request
            .headers
            .retain(|(key, _)| !key.eq_ignore_ascii_case(AUTHORIZATION));

        let attached = if request.is_public() {
            None
        } else {
            self.session.current_artifact()
        };
        if let Some(artifact) = &attached {
            request.headers.push((
                AUTHORIZATION.to_owned(),
                self.session.scheme().header_value(artifact),
            ));
        }

        log::debug!(
            "dispatch: {} {} (credentials: {})",
            request.method,
            request.path,
            attached.is_some()
        );
        let response = self
            .transport
            .send(&request)
            .await
            .map_err(ApiError::Transport)?;

        if let Some(sent) = attached {
            if self.session.current_artifact().as_deref() != Some(sent.as_str()) {
                log::debug!(
                    "dispatch: dropping {} response for {} after session changed",
                    response.status,
                    request.path
                );
                return Err(ApiError::SessionEnded);
            }
        }

        if response.status == 401 {
            log::warn!("dispatch: {} {} rejected with 401; clearing session", request.method, request.path);
            self.session.clear();
            self.on_unauthorized.on_unauthorized(LOGIN_PATH);
            return Err(ApiError::Unauthorized {
                message: response.error_message(),
            });
        }

        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
                message: response.error_message(),
            });
        }

        Ok(response)
    }

    /// `GET` a JSON resource.
    ///
    /// # Errors
    ///
    /// See [`Dispatcher::send`]; also [`ApiError::Decode`] on a malformed body.
    pub async fn get_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        self.send(request).await?.json()
    }

    /// Send `body` as JSON and decode a JSON response.
    ///
    /// # Errors
    ///
    /// See [`Dispatcher::send`]; also [`ApiError::Decode`] on a malformed body.
    pub async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        request: ApiRequest,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send(request.with_json(body)?).await?.json()
    }

    /// Send a request whose response body is ignored.
    ///
    /// # Errors
    ///
    /// See [`Dispatcher::send`].
    pub async fn send_empty(&self, request: ApiRequest) -> Result<(), ApiError> {
        self.send(request).await.map(|_| ())
    }
}
