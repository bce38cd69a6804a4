use async_trait::async_trait;
use reqwest::{Client, Request, StatusCode};
use std::time::Duration;

#[cfg(feature = "tracing")]
use tracing::debug;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Status and raw body of a completed HTTP exchange.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Performs the network call for [`crate::IpApi`].
///
/// Errors are handed back to the caller untouched, wrapped in
/// [`crate::IpApiError::Transport`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: Request) -> Result<TransportResponse, BoxError>;
}

#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: Request) -> Result<TransportResponse, BoxError> {
        #[cfg(feature = "tracing")]
        debug!(url = %request.url(), "Sending request to ip-api");

        let res = self.client.execute(request).await?;
        let status = res.status();
        let body = res.bytes().await?;

        Ok(TransportResponse::new(status, body.to_vec()))
    }
}
