//! `gloo-net` implementation of the core `Transport` seam.
//!
//! Client-side (`csr`): real `fetch` calls. Elsewhere every send fails with a
//! transport error, since these endpoints are only reachable from the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use async_trait::async_trait;
use jobtrack_core::{ApiRequest, ApiResponse, Transport};

/// Join `base` and an API path with exactly one slash between them.
pub(crate) fn endpoint_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Sends requests with the browser's `fetch` via `gloo-net`.
#[derive(Clone, Debug)]
pub struct GlooTransport {
    base_url: String,
}

impl GlooTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        endpoint_url(&self.base_url, path)
    }
}

#[cfg(feature = "csr")]
fn gloo_method(method: jobtrack_core::Method) -> gloo_net::http::Method {
    use gloo_net::http::Method as M;
    match method {
        jobtrack_core::Method::Get => M::GET,
        jobtrack_core::Method::Post => M::POST,
        jobtrack_core::Method::Put => M::PUT,
        jobtrack_core::Method::Delete => M::DELETE,
    }
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, String> {
        #[cfg(feature = "csr")]
        {
            let url = self.url(&request.path);
            log::debug!("http: {} {url}", request.method);
            let mut builder = gloo_net::http::RequestBuilder::new(&url)
                .method(gloo_method(request.method))
                .query(request.query.iter().map(|(k, v)| (k.as_str(), v)));
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let response = match &request.body {
                Some(body) => builder.json(body).map_err(|e| e.to_string())?.send().await,
                None => builder.send().await,
            }
            .map_err(|e| e.to_string())?;
            let status = response.status();
            let body = response.text().await.map_err(|e| e.to_string())?;
            Ok(ApiResponse::new(status, body))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err("not available outside the browser".to_owned())
        }
    }
}
