//! Bearer-authenticated HTTP wrapper over a pluggable transport.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages never talk to the transport directly. Every call goes through
//! [`ApiClient`], which reads the session token fresh for each request and
//! attaches `Authorization: Bearer <token>` when one is present.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx responses, and undecodable bodies all surface
//! as [`ApiError`]. Panels collapse them into one display string with
//! [`ApiError::display_message`]. There is no retry and no 401 special case.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::Arc;

use futures::future::LocalBoxFuture;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::state::session::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully-built request, ready for a [`Transport`].
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("could not encode request body: {0}")]
    Encode(String),
    #[error("could not decode response body: {0}")]
    Decode(String),
    #[error("http transport is only available in the browser")]
    Unavailable,
}

impl ApiError {
    /// The server-supplied `message`, when the failure carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message: Some(message), .. } => Some(message),
            _ => None,
        }
    }

    /// One human-readable line: the server message, else `fallback`.
    pub fn display_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_owned()
    }
}

/// Pull a string `message` field out of a JSON error body.
pub fn body_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned)
}

/// Sends one request and yields the raw status + body.
///
/// Futures are local: the browser event loop is single threaded.
pub trait Transport {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'_, Result<ApiResponse, ApiError>>;
}

/// REST client shared by all panels through Leptos context.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: Session,
    transport: Arc<dyn Transport + Send + Sync>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: Session, transport: Arc<dyn Transport + Send + Sync>) -> Self {
        Self { base_url: base_url.into(), session, transport }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Build a request for `path`. The bearer header is added only when
    /// `authorized` is set and a token is stored right now.
    pub fn build(&self, method: Method, path: &str, body: Option<serde_json::Value>, authorized: bool) -> ApiRequest {
        let mut headers = Vec::new();
        if authorized {
            if let Some(token) = self.session.token() {
                headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
            }
        }
        if body.is_some() {
            headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
        }
        ApiRequest { method, url: self.url(path), headers, body }
    }

    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let response = self.transport.send(request).await?;
        if !response.ok() {
            return Err(ApiError::Status { status: response.status, message: body_message(&response.body) });
        }
        Ok(response)
    }

    /// `GET path` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or a
    /// body that does not decode as `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute(self.build(Method::Get, path, None, true)).await?;
        decode(&response.body)
    }

    /// Send `body` as JSON with the given method; the response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if encoding fails, the transport fails, or the
    /// server answers with a non-2xx status.
    pub async fn send_json<B: Serialize + ?Sized>(&self, method: Method, path: &str, body: &B) -> Result<(), ApiError> {
        let body = encode(body)?;
        self.execute(self.build(method, path, Some(body), true)).await?;
        Ok(())
    }

    /// `DELETE path`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or non-2xx status.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(self.build(Method::Delete, path, None, true)).await?;
        Ok(())
    }

    /// `POST` without the bearer header and decode the reply. Used by the
    /// login and register endpoints.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on encode, transport, status, or decode failure.
    pub async fn post_public<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let body = encode(body)?;
        let response = self.execute(self.build(Method::Post, path, Some(body), false)).await?;
        decode(&response.body)
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
