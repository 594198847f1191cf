use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{Result, RobinhoodError};
use crate::models::Detailed;

/// JSON request/response envelope shared by every endpoint.
///
/// Responses are decoded in full and then checked for an in-band `detail`
/// error, which fails the call even on HTTP 200.
#[derive(Clone)]
pub(crate) struct HttpEnvelope {
    client: Client,
    authenticated: bool,
    log_bodies: bool,
}

impl HttpEnvelope {
    /// Envelope without credentials, used for the login exchange.
    pub(crate) fn unauthenticated(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            authenticated: false,
            log_bodies: config.log_bodies,
        })
    }

    /// Envelope that attaches `Authorization: Bearer <token>` to every request.
    pub(crate) fn with_bearer(config: &ClientConfig, token: &str) -> Result<Self> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| RobinhoodError::InvalidToken)?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, value);

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            authenticated: true,
            log_bodies: config.log_bodies,
        })
    }

    pub(crate) async fn get_and_decode<T>(&self, url: &str) -> Result<T>
    where
        T: DeserializeOwned + Detailed,
    {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        self.decode(response).await
    }

    pub(crate) async fn post_and_decode<B, T>(&self, url: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Detailed,
    {
        let payload = serde_json::to_vec(body)?;

        tracing::debug!("POST {}", url);
        if self.log_bodies {
            tracing::debug!("Request body: {}", String::from_utf8_lossy(&payload));
        }

        let response = self
            .client
            .post(url)
            .header(header::CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;

        if !self.authenticated && response.status() != StatusCode::OK {
            tracing::warn!("Got status code {} from URL {}", response.status(), url);
        }

        self.decode(response).await
    }

    async fn decode<T>(&self, response: Response) -> Result<T>
    where
        T: DeserializeOwned + Detailed,
    {
        let body = response.bytes().await?;
        if self.log_bodies {
            tracing::debug!("Response body: {}", String::from_utf8_lossy(&body));
        }

        let decoded: T = serde_json::from_slice(&body)?;

        let detail = decoded.detail();
        if !detail.is_empty() {
            return Err(RobinhoodError::Service(detail.to_string()));
        }

        Ok(decoded)
    }
}
