//! HTTP client for network-based API calls

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::decode_body;
use crate::{ClientConfig, ClientError, ClientResult};

/// Remote resource client
///
/// One call, one round-trip: no retries, no caching. Any transport failure
/// or non-2xx status resolves to a `ClientError`.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T>;
    async fn post<T: DeserializeOwned + Send, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn put<T: DeserializeOwned + Send, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn put_empty<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T>;
    async fn delete<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T>;
    async fn set_token(&self, token: Option<String>);
    async fn token(&self) -> Option<String>;
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl NetworkHttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(config.token.clone())),
        })
    }

    /// Base URL every path is joined onto
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!(%method, %url, "sending request");
        let mut req = self.client.request(method, &url);
        if let Some(token) = self.token.read().await.as_deref() {
            req = req.header(reqwest::header::AUTHORIZATION, format!("Bearer {}", token));
        }
        req
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> ClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&bytes).to_string();
            return Err(ClientError::from_status(status, text));
        }
        decode_body(&bytes)
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        let req = self.request(Method::GET, path).await;
        self.send(req).await
    }

    async fn post<T: DeserializeOwned + Send, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.request(Method::POST, path).await.json(body);
        self.send(req).await
    }

    async fn put<T: DeserializeOwned + Send, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.request(Method::PUT, path).await.json(body);
        self.send(req).await
    }

    async fn put_empty<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        let req = self.request(Method::PUT, path).await;
        self.send(req).await
    }

    async fn delete<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        let req = self.request(Method::DELETE, path).await;
        self.send(req).await
    }

    async fn set_token(&self, token: Option<String>) {
        *self.token.write().await = token;
    }

    async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }
}
