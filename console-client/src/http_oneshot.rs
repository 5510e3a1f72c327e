// console-client/src/http_oneshot.rs
// Oneshot HTTP client - in-process calls into an axum Router
//
// Requires the "in-process" feature

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::ServiceExt;

use crate::error::decode_body;
use crate::{ClientError, ClientResult};

use super::http::HttpClient;

/// Oneshot HTTP client
///
/// Drives a `Router` through Tower's `oneshot`, so the console can run
/// against an in-process API with no network in between.
///
/// # Example
///
/// ```ignore
/// use console_client::{ConsoleApi, OneshotHttpClient};
///
/// let client = OneshotHttpClient::new(console_mock::router(state));
/// let api = ConsoleApi::new(client);
/// let admins = api.list_admins().await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
    token: Arc<RwLock<Option<String>>>,
}

impl OneshotHttpClient {
    /// Create a client over an initialized Router (`with_state` already applied)
    pub fn new(router: Router) -> Self {
        Self {
            router,
            token: Arc::new(RwLock::new(None)),
        }
    }

    async fn build_request(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> ClientResult<Request<Body>> {
        let uri = format!("/{}", path.trim_start_matches('/'));
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = self.token.read().await.as_deref() {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }

        builder
            .header("Content-Type", "application/json")
            .body(body.map(Body::from).unwrap_or_else(Body::empty))
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {}", e)))
    }

    async fn execute<T: DeserializeOwned>(&self, request: Request<Body>) -> ClientResult<T> {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {}", e)))?;

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {}", e)))?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body_bytes).to_string();
            return Err(ClientError::from_status(status, text));
        }
        decode_body(&body_bytes)
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(Method::GET, path, None).await?;
        self.execute(request).await
    }

    async fn post<T: DeserializeOwned + Send, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let bytes = serde_json::to_vec(body)?;
        let request = self.build_request(Method::POST, path, Some(bytes)).await?;
        self.execute(request).await
    }

    async fn put<T: DeserializeOwned + Send, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let bytes = serde_json::to_vec(body)?;
        let request = self.build_request(Method::PUT, path, Some(bytes)).await?;
        self.execute(request).await
    }

    async fn put_empty<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(Method::PUT, path, None).await?;
        self.execute(request).await
    }

    async fn delete<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(Method::DELETE, path, None).await?;
        self.execute(request).await
    }

    async fn set_token(&self, token: Option<String>) {
        *self.token.write().await = token;
    }

    async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let client = OneshotHttpClient::new(Router::new());
        let result: ClientResult<serde_json::Value> = client.get("/missing").await;
        assert!(matches!(result, Err(ClientError::NotFound(_))));
    }
}
