//! Browser `fetch` transport backed by `gloo-net`.
//!
//! Client-side (csr): real HTTP calls. Native builds: every send fails with
//! [`ApiError::Unavailable`] since there is no browser to talk through.

use futures::FutureExt;
use futures::future::LocalBoxFuture;

use super::http::{ApiError, ApiRequest, ApiResponse, Transport};

/// Stateless transport; the browser owns connection handling and timeouts.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'_, Result<ApiResponse, ApiError>> {
        send_request(request).boxed_local()
    }
}

#[cfg(feature = "csr")]
async fn send_request(request: ApiRequest) -> Result<ApiResponse, ApiError> {
    use gloo_net::http::{Method as GlooMethod, RequestBuilder};

    use super::http::Method;

    let method = match request.method {
        Method::Get => GlooMethod::GET,
        Method::Post => GlooMethod::POST,
        Method::Put => GlooMethod::PUT,
        Method::Delete => GlooMethod::DELETE,
    };
    let mut builder = RequestBuilder::new(&request.url).method(method);
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    let prepared = match request.body {
        Some(body) => builder.body(body.to_string()),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Transport(e.to_string()))?;

    let response = prepared
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Ok(ApiResponse { status, body })
}

#[cfg(not(feature = "csr"))]
async fn send_request(request: ApiRequest) -> Result<ApiResponse, ApiError> {
    let _ = request;
    Err(ApiError::Unavailable)
}
